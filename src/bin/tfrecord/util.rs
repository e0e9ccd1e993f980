use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tfrecord::{ReaderBuilder, RecordReader};

pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(BufReader::new(f))
}

/// Открыть файл и обернуть в RecordReader. --no-crc перекрывает TFR_CRC_CHECK.
pub fn open_reader(path: &Path, no_crc: bool) -> Result<RecordReader<BufReader<File>>> {
    let mut builder = ReaderBuilder::new();
    if no_crc {
        builder = builder.crc_check(false);
    }
    let cfg = builder.build();
    debug!("open {} with {}", path.display(), cfg);

    Ok(RecordReader::with_config(open_file(path)?, &cfg))
}

pub fn display_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.escape_debug().to_string(),
        Err(_) => format!("(binary {} B)", bytes.len()),
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
