use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::util::{display_text, open_reader, to_hex};

#[derive(Serialize)]
struct RecordLine<'a> {
    index: u64,
    len: usize,
    preview_hex: &'a str,
    truncated: bool,
}

pub fn exec(
    path: PathBuf,
    no_crc: bool,
    json: bool,
    limit: Option<u64>,
    preview: usize,
) -> Result<()> {
    let mut rdr = open_reader(&path, no_crc)?;
    let mut index: u64 = 0;

    while limit.map_or(true, |l| index < l) {
        let payload = match rdr
            .read()
            .with_context(|| format!("{}: record #{}", path.display(), index))?
        {
            Some(p) => p,
            None => break,
        };

        let shown = &payload[..payload.len().min(preview)];
        if json {
            let hex = to_hex(shown);
            let line = RecordLine {
                index,
                len: payload.len(),
                preview_hex: &hex,
                truncated: shown.len() < payload.len(),
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!(
                "#{} ({} B) {}{}",
                index,
                payload.len(),
                display_text(shown),
                if shown.len() < payload.len() { " ..." } else { "" }
            );
        }
        index += 1;
    }

    if index == 0 && !json {
        println!("(no records)");
    }
    Ok(())
}
