//! Compress command implementation.

use crate::utils::{codes_path, compressed_path, percent_of, read_input, symbol_label};
use oxihuff_codec::{HuffmanConfig, HuffmanEncoder};
use std::path::Path;
use tracing::info;

/// Options for compressing a file.
#[derive(Debug, Default)]
pub struct CompressOptions<'a> {
    pub output: Option<&'a Path>,
    pub codes: Option<&'a Path>,
    pub show_codes: bool,
}

pub fn cmd_compress(
    input: &Path,
    options: &CompressOptions,
    config: &HuffmanConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    info!(path = %input.display(), len = data.len(), "read input");

    let (compressed, table) = HuffmanEncoder::new(*config).encode(&data)?;
    let table_bytes = table.to_bytes(config.byte_order)?;

    let compressed_out = options
        .output
        .map_or_else(|| compressed_path(input), Path::to_path_buf);
    let codes_out = options
        .codes
        .map_or_else(|| codes_path(input), Path::to_path_buf);

    if options.show_codes {
        println!("Huffman codes ({} symbols):", table.alphabet_size());
        for entry in &table.entries {
            println!("  {:>6}  {}", symbol_label(entry.symbol), entry.code);
        }
        println!();
    }

    std::fs::write(&compressed_out, &compressed)?;
    std::fs::write(&codes_out, &table_bytes)?;

    println!("Compressed file written as {}", compressed_out.display());
    println!("Codes written as {}", codes_out.display());
    println!("  Original size:   {} bytes", data.len());
    println!(
        "  Compressed size: {} bytes ({:.1}%)",
        compressed.len(),
        percent_of(compressed.len(), data.len())
    );
    println!("  Table size:      {} bytes", table_bytes.len());

    Ok(())
}
