use anyhow::{anyhow, Result};
use log::debug;
use std::path::PathBuf;

use tfrecord::RecordReader;

use super::util::open_file;

pub fn exec(path: PathBuf) -> Result<()> {
    // Всегда с проверкой CRC, независимо от TFR_CRC_CHECK.
    let mut rdr = RecordReader::new(open_file(&path)?, true);
    debug!("verify {}", path.display());

    let mut records: u64 = 0;
    let mut bytes: u64 = 0;
    for res in rdr.records() {
        let payload =
            res.map_err(|e| anyhow!("{}: record #{}: {}", path.display(), records, e))?;
        records += 1;
        bytes += payload.len() as u64;
    }

    println!("ok: {} records, {} payload bytes", records, bytes);
    Ok(())
}
