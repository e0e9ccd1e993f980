use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Инспекция файлов TFRecord
#[derive(Parser, Debug)]
#[command(name = "tfrecord", version, about = "TFRecord inspection CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Count records in a file
    Count {
        #[arg(long)]
        path: PathBuf,
        /// Skip masked CRC32C verification (fields are still consumed)
        #[arg(long)]
        no_crc: bool,
    },
    /// Print every record: index, length and a preview of the payload
    Dump {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        no_crc: bool,
        /// JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Stop after N records
        #[arg(long)]
        limit: Option<u64>,
        /// How many payload bytes to show per record
        #[arg(long, default_value_t = 32)]
        preview: usize,
    },
    /// Read the whole file with checksums on; fail on the first bad record
    Verify {
        #[arg(long)]
        path: PathBuf,
    },
}
