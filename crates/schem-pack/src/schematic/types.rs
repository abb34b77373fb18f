//! Schematic data model and its JSON wire shape.
//!
//! The serde names match the JSON the drawing tool exchanges: positions and
//! extents are 3-element arrays, and both the schematic's origin and each
//! chunk's offset are called `pos`.

use serde::{Deserialize, Serialize};

/// An integer position or extent triple, serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPos(pub i32, pub i32, pub i32);

/// A positioned sub-volume carrying its own flat block-id sequence.
///
/// `blocks` is ordered z-major: flat position `p = z*size_y*size_x +
/// y*size_x + x` (outer loop z, middle y, inner x). The encoder building
/// the sequence and any consumer reconstructing coordinates from it must
/// agree on this ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(rename = "pos")]
    pub offset: BlockPos,
    pub blocks: Vec<u32>,
}

/// A named voxel cuboid: placement origin, extents, and positioned chunks.
///
/// Chunk order is preserved and meaningful: chunks are positioned, not
/// sorted, by the consumer. The aggregate chunk extents are expected to
/// equal `size` for the container to round-trip meaningfully; current usage
/// always emits exactly one chunk whose extents equal `size`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schematic {
    pub name: String,
    #[serde(rename = "pos")]
    pub origin: BlockPos,
    pub size: BlockPos,
    pub chunks: Vec<Chunk>,
}

impl Schematic {
    /// Download file name the consumer expects for this schematic.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, super::layout::FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_wire_shape() {
        let schematic = Schematic {
            name: "hut".to_owned(),
            origin: BlockPos(1, 2, 3),
            size: BlockPos(2, 1, 1),
            chunks: vec![Chunk {
                offset: BlockPos(0, 0, 0),
                blocks: vec![9, 9],
            }],
        };
        let json = serde_json::to_value(&schematic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "hut",
                "pos": [1, 2, 3],
                "size": [2, 1, 1],
                "chunks": [{"pos": [0, 0, 0], "blocks": [9, 9]}],
            })
        );
        let back: Schematic = serde_json::from_value(json).unwrap();
        assert_eq!(back, schematic);
    }

    #[test]
    fn download_file_name() {
        let schematic = Schematic {
            name: "hut".to_owned(),
            ..Schematic::default()
        };
        assert_eq!(schematic.file_name(), "hut.bloxdschem");
    }
}
