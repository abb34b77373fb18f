//! Unsigned base-128 varints and the zig-zag signed mapping.
//!
//! 7 payload bits per byte, least-significant group first; the high bit of
//! each byte is set while more bytes follow and clear on the terminal byte.
//! Signed values go through the zig-zag mapping first so small negative
//! numbers stay small on the wire.

use schem_buffers::{Reader, Writer};

use crate::error::SchemError;

/// Writes a value as an unsigned base-128 varint.
pub fn write_u32(writer: &mut Writer, mut value: u32) {
    while value & !0x7F != 0 {
        writer.u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    writer.u8(value as u8);
}

/// Reads an unsigned base-128 varint, advancing the reader's cursor past
/// the terminal byte.
///
/// Fails with [`SchemError::TruncatedInput`] if the buffer ends before a
/// byte with the high bit clear is seen, and with
/// [`SchemError::MalformedStream`] if the encoding runs past 32 bits.
pub fn read_u32(reader: &mut Reader) -> Result<u32, SchemError> {
    let mut value: u32 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = reader.u8().map_err(|_| SchemError::TruncatedInput)?;
        if shift >= 32 {
            return Err(SchemError::MalformedStream("varint exceeds 32 bits"));
        }
        value |= ((byte & 0x7F) as u32) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
    }
}

/// Maps a signed value onto the unsigned varint space: a non-negative `n`
/// becomes `2n`, a negative `n` becomes `-2n - 1`.
#[inline]
pub fn zigzag(n: i32) -> u32 {
    ((n as u32) << 1) ^ ((n >> 31) as u32)
}

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(v: u32) -> i32 {
    ((v >> 1) as i32) ^ -((v & 1) as i32)
}

/// Writes a signed value as a zig-zag-mapped varint.
pub fn write_i32(writer: &mut Writer, value: i32) {
    write_u32(writer, zigzag(value));
}

/// Reads a zig-zag-mapped signed varint.
pub fn read_i32(reader: &mut Reader) -> Result<i32, SchemError> {
    Ok(unzigzag(read_u32(reader)?))
}
