//! OxiHuff CLI - The Oxidized Huffman Compressor
//!
//! Compresses a file into a packed bitstream and a code table, and restores
//! the original bytes from the pair.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    CompressOptions, DecompressOptions, cmd_compress, cmd_decompress, cmd_info, cmd_test,
};
use oxihuff_codec::{ByteOrder, HuffmanConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(
    author,
    version,
    about = "The Oxidized Huffman Compressor - Pure Rust static Huffman coding"
)]
#[command(long_about = "
OxiHuff compresses a file with a static Huffman code. Every compression
produces two files: the packed bitstream and the code table needed to
decode it.

Examples:
  oxihuff compress story.txt          # storyCompressed.txt + storyCodes.txt
  oxihuff compress story.txt --show-codes
  oxihuff decompress storyCompressed.txt
  oxihuff info storyCompressed.txt --json
  oxihuff test *Compressed.txt
  oxihuff --byte-order little compress story.txt
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Byte order of the integers in the code table
    #[arg(long, value_enum, default_value = "native", global = true)]
    byte_order: TableByteOrder,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a bitstream and a code table
    #[command(alias = "c")]
    Compress {
        /// File to compress
        file: PathBuf,

        /// Compressed output file (default: <stem>Compressed.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Code table output file (default: <stem>Codes.<ext>)
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Print the code assigned to each symbol
        #[arg(long)]
        show_codes: bool,
    },

    /// Restore a file from its bitstream and code table
    #[command(alias = "d")]
    Decompress {
        /// Compressed file
        file: PathBuf,

        /// Restored output file (default: <stem>Decompressed.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Code table file (default: derived from the compressed file name)
        #[arg(long)]
        codes: Option<PathBuf>,
    },

    /// Show the code table of a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file
        file: PathBuf,

        /// Code table file (default: derived from the compressed file name)
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify that compressed files decode with their code tables
    #[command(alias = "t")]
    Test {
        /// Compressed files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Byte order of the table integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum TableByteOrder {
    /// Order of the machine running the command (default)
    #[default]
    Native,
    /// Little-endian, portable between machines
    Little,
    /// Big-endian
    Big,
}

impl From<TableByteOrder> for ByteOrder {
    fn from(order: TableByteOrder) -> Self {
        match order {
            TableByteOrder::Native => ByteOrder::Native,
            TableByteOrder::Little => ByteOrder::Little,
            TableByteOrder::Big => ByteOrder::Big,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let config = HuffmanConfig::new(cli.byte_order.into());

    let result = match cli.command {
        Commands::Compress {
            file,
            output,
            codes,
            show_codes,
        } => cmd_compress(
            &file,
            &CompressOptions {
                output: output.as_deref(),
                codes: codes.as_deref(),
                show_codes,
            },
            &config,
        ),
        Commands::Decompress {
            file,
            output,
            codes,
        } => cmd_decompress(
            &file,
            &DecompressOptions {
                output: output.as_deref(),
                codes: codes.as_deref(),
            },
            &config,
        ),
        Commands::Info { file, codes, json } => cmd_info(&file, codes.as_deref(), json, &config),
        Commands::Test { files } => cmd_test(&files, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
