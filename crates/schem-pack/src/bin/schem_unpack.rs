//! Reads a binary container on stdin and writes the decoded schematic as
//! JSON to stdout.

use std::io::{self, Read, Write};

use schem_pack::schematic;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    let decoded = schematic::decode(&input)?;
    serde_json::to_writer(io::stdout(), &decoded)?;
    io::stdout().write_all(b"\n")?;
    Ok(())
}
