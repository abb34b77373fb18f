//! Run-length compression of flat block-id sequences.
//!
//! A block stream is a concatenation of `(count, id)` unsigned-varint pairs
//! with no separators and no record count; the end of the buffer is the
//! only terminator. Ids are non-negative, so this layer uses plain varints
//! with no zig-zag step.

use schem_buffers::{Reader, Writer};

use crate::error::SchemError;
use crate::varint;

/// Run-length-encodes a flat sequence of block ids.
///
/// An empty input yields an empty buffer. The scan runs one position past
/// the end of the input with an out-of-band `None` sentinel, so the final
/// run is flushed by the same arm that flushes interior runs.
pub fn encode(ids: &[u32]) -> Vec<u8> {
    let mut writer = Writer::new();
    if ids.is_empty() {
        return writer.flush();
    }
    let mut run_id = ids[0];
    let mut run_len: u32 = 1;
    for next in ids[1..].iter().copied().map(Some).chain(std::iter::once(None)) {
        match next {
            Some(id) if id == run_id => run_len += 1,
            _ => {
                varint::write_u32(&mut writer, run_len);
                varint::write_u32(&mut writer, run_id);
                if let Some(id) = next {
                    run_id = id;
                    run_len = 1;
                }
            }
        }
    }
    writer.flush()
}

/// Decodes a block stream back into the flat id sequence.
///
/// A run count of zero is permitted; it still consumes its paired id, so
/// the scan always advances and cannot stall. Fails with
/// [`SchemError::TruncatedInput`] when the buffer ends inside a varint or
/// between a count and its id.
///
/// The decoded length is whatever the runs add up to; checking it against
/// an expected voxel count is the caller's contract.
pub fn decode(buf: &[u8]) -> Result<Vec<u32>, SchemError> {
    let mut reader = Reader::new(buf);
    let mut ids = Vec::new();
    while !reader.is_empty() {
        let count = varint::read_u32(&mut reader)?;
        let id = varint::read_u32(&mut reader)?;
        ids.extend(std::iter::repeat(id).take(count as usize));
    }
    Ok(ids)
}
