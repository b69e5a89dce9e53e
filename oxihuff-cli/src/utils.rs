//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff_core::OxiHuffError;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const COMPRESSED_SUFFIX: &str = "Compressed";
const CODES_SUFFIX: &str = "Codes";
const DECOMPRESSED_SUFFIX: &str = "Decompressed";

/// Install the stderr log subscriber.
///
/// Without `-v` the level comes from `RUST_LOG`, falling back to `warn`.
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Read a whole input file, reporting a missing file as [`OxiHuffError::NotFound`].
pub fn read_input(path: &Path) -> Result<Vec<u8>, OxiHuffError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => OxiHuffError::not_found(path.display().to_string()),
        _ => OxiHuffError::Io(e),
    })
}

/// `dir/nameSUFFIX.ext` for `dir/name.ext`.
fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    path.with_file_name(name)
}

/// Where `compress` writes the bitstream for `input`.
pub fn compressed_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, COMPRESSED_SUFFIX)
}

/// Where `compress` writes the code table for `input`.
pub fn codes_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, CODES_SUFFIX)
}

/// The original input path a compressed file was derived from.
///
/// Removes a trailing `Compressed` from the stem; other names are returned as is.
pub fn source_path(compressed: &Path) -> PathBuf {
    let Some(stem) = compressed.file_stem().map(|s| s.to_string_lossy()) else {
        return compressed.to_path_buf();
    };
    match stem.strip_suffix(COMPRESSED_SUFFIX) {
        Some(base) if !base.is_empty() => {
            let name = match compressed.extension() {
                Some(ext) => format!("{}.{}", base, ext.to_string_lossy()),
                None => base.to_string(),
            };
            compressed.with_file_name(name)
        }
        _ => compressed.to_path_buf(),
    }
}

/// The code table that belongs to a compressed file.
pub fn codes_path_for(compressed: &Path) -> PathBuf {
    codes_path(&source_path(compressed))
}

/// Where `decompress` writes the restored bytes.
pub fn decompressed_path(compressed: &Path) -> PathBuf {
    with_stem_suffix(&source_path(compressed), DECOMPRESSED_SUFFIX)
}

/// Printable label for a symbol.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02X}", symbol)
    }
}

/// Size ratio as a percentage of the original.
pub fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
