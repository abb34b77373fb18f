//! Versioned binary container codec for voxel schematics.
//!
//! Converts a named voxel cuboid (a [`Schematic`]) into the compact binary
//! container its consumer downloads, and parses that container back. Two
//! layers do the work:
//!
//! - a nested run-length + varint stream compressing per-voxel block ids
//!   inside each chunk ([`block_stream`]);
//! - a positional, schema-projected record layout: the writer emits the
//!   full field list, compatibility tail included, while the reader walks a
//!   validated prefix of it and stops after `chunks` ([`LayoutResolver`]).
//!
//! All multi-byte integers on the wire are signed zig-zag varints; there is
//! no fixed-width endianness anywhere in the format.
//!
//! # Example
//!
//! ```
//! use schem_pack::schematic::{self, BlockPos, Chunk, Schematic};
//!
//! let schematic = Schematic {
//!     name: "tower".to_owned(),
//!     origin: BlockPos(0, 0, 0),
//!     size: BlockPos(1, 1, 2),
//!     chunks: vec![Chunk {
//!         offset: BlockPos(0, 0, 0),
//!         blocks: vec![7, 7],
//!     }],
//! };
//! let bytes = schematic::encode(&schematic).unwrap();
//! assert_eq!(schematic::decode(&bytes).unwrap(), schematic);
//! ```

pub mod block_stream;
mod error;
pub mod grid;
pub mod record;
mod resolver;
pub mod schema;
pub mod schematic;
mod value;
pub mod varint;

pub use error::SchemError;
pub use resolver::LayoutResolver;
pub use schematic::Schematic;
pub use value::SchemaValue;

#[cfg(test)]
mod tests {
    use crate::grid::VoxelGrid;
    use crate::schematic::{self, BlockPos};

    #[test]
    fn grid_to_container_and_back() {
        let grid = VoxelGrid::from_layer(BlockPos(4, 4, 2), &[0, 1, 1, 0, 2, 2, 2, 2]);
        let schematic = grid.into_schematic("stamp");
        let bytes = schematic::encode(&schematic).unwrap();
        let decoded = schematic::decode(&bytes).unwrap();
        assert_eq!(decoded, schematic);
        assert_eq!(decoded.chunks[0].blocks.len(), 4 * 4 * 2);
    }

    #[test]
    fn containers_are_deterministic() {
        let schematic = VoxelGrid::filled(BlockPos(3, 3, 3), 42).into_schematic("cube");
        let a = schematic::encode(&schematic).unwrap();
        let b = schematic::encode(&schematic).unwrap();
        assert_eq!(a, b);
    }
}
