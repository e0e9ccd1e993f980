use anyhow::{Context, Result};
use std::path::PathBuf;

use super::util::open_reader;

pub fn exec(path: PathBuf, no_crc: bool) -> Result<()> {
    let mut rdr = open_reader(&path, no_crc)?;
    let mut n: u64 = 0;
    while rdr
        .read()
        .with_context(|| format!("{}: record #{}", path.display(), n))?
        .is_some()
    {
        n += 1;
    }
    println!("{}", n);
    Ok(())
}
