//! Decompress command implementation.

use crate::utils::{codes_path_for, decompressed_path, read_input};
use oxihuff_codec::{HuffmanConfig, decompress_with};
use std::path::Path;
use tracing::info;

/// Options for decompressing a file.
#[derive(Debug, Default)]
pub struct DecompressOptions<'a> {
    pub output: Option<&'a Path>,
    pub codes: Option<&'a Path>,
}

pub fn cmd_decompress(
    input: &Path,
    options: &DecompressOptions,
    config: &HuffmanConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let codes_in = options
        .codes
        .map_or_else(|| codes_path_for(input), Path::to_path_buf);
    let output = options
        .output
        .map_or_else(|| decompressed_path(input), Path::to_path_buf);

    let compressed = read_input(input)?;
    let table = read_input(&codes_in)?;
    info!(
        compressed = %input.display(),
        codes = %codes_in.display(),
        "read compressed pair"
    );

    let restored = decompress_with(&compressed, &table, config)?;
    std::fs::write(&output, &restored)?;

    println!("Decompressed file written as {}", output.display());
    println!("  Restored size: {} bytes", restored.len());

    Ok(())
}
