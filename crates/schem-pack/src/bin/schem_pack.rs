//! Reads a schematic JSON document on stdin and writes the binary
//! container to stdout.

use std::io::{self, Read, Write};

use schem_pack::schematic::{self, Schematic};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let parsed: Schematic = serde_json::from_str(&input)?;
    let bytes = schematic::encode(&parsed)?;
    io::stdout().write_all(&bytes)?;
    Ok(())
}
