//! Info command implementation.

use crate::utils::{codes_path_for, percent_of, read_input, symbol_label};
use oxihuff_codec::{CodeTable, HuffmanConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JSON serializable code of one symbol.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: u8,
    code: String,
}

/// JSON output for a compressed pair.
#[derive(Debug, Serialize)]
struct TableInfoJson {
    file: String,
    codes_file: String,
    alphabet_size: usize,
    original_size: usize,
    compressed_size: usize,
    table_size: usize,
    ratio: f64,
    max_code_len: usize,
    /// Code length → number of symbols with that length.
    code_lengths: BTreeMap<usize, usize>,
    codes: Vec<CodeJson>,
}

impl TableInfoJson {
    fn new(
        file: &Path,
        codes_file: &Path,
        table: &CodeTable,
        compressed: usize,
        table_size: usize,
    ) -> Self {
        Self {
            file: file.display().to_string(),
            codes_file: codes_file.display().to_string(),
            alphabet_size: table.alphabet_size(),
            original_size: table.original_len,
            compressed_size: compressed,
            table_size,
            ratio: percent_of(compressed, table.original_len),
            max_code_len: table.max_code_len(),
            code_lengths: length_histogram(table),
            codes: table
                .entries
                .iter()
                .map(|e| CodeJson {
                    symbol: e.symbol,
                    code: e.code.clone(),
                })
                .collect(),
        }
    }
}

fn length_histogram(table: &CodeTable) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for entry in &table.entries {
        *histogram.entry(entry.len()).or_insert(0) += 1;
    }
    histogram
}

pub fn cmd_info(
    file: &Path,
    codes: Option<&Path>,
    json: bool,
    config: &HuffmanConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let codes_file = codes.map_or_else(|| codes_path_for(file), Path::to_path_buf);
    let compressed = read_input(file)?;
    let table_bytes = read_input(&codes_file)?;
    let table = CodeTable::from_bytes(&table_bytes, config.byte_order)?;

    let info = TableInfoJson::new(file, &codes_file, &table, compressed.len(), table_bytes.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Huffman Pair Information");
    println!("========================");
    println!("File: {}", info.file);
    println!("Codes: {}", info.codes_file);
    println!("Original size: {} bytes", info.original_size);
    println!("Compressed size: {} bytes", info.compressed_size);
    println!("Table size: {} bytes", info.table_size);
    if info.original_size > 0 {
        println!("Compression ratio: {:.1}%", info.ratio);
    }

    println!();
    println!("Code table:");
    println!("  Symbols: {}", info.alphabet_size);
    println!("  Longest code: {} bits", info.max_code_len);
    for (len, count) in &info.code_lengths {
        println!("  {:>3} bits: {} symbols", len, count);
    }

    if !table.entries.is_empty() {
        println!();
        for entry in &table.entries {
            println!("  {:>6}  {}", symbol_label(entry.symbol), entry.code);
        }
    }

    Ok(())
}
