// tests/cli_smoke.rs
//
// Прогон бинарника tfrecord на временных файлах.

mod common;

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use common::{data_crc_off, stream_of};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_path(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("tfrtest-cli-{prefix}-{pid}-{t}-{id}.tfrecord"))
}

fn tfrecord(args: &[&str]) -> Result<std::process::Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_tfrecord"))
        .args(args)
        .env_remove("TFR_CRC_CHECK")
        .output()?)
}

#[test]
fn count_and_verify_clean_file() -> Result<()> {
    let path = unique_path("clean");
    fs::write(&path, stream_of(["alpha", "beta", "gamma"]))?;
    let p = path.to_string_lossy().to_string();

    let out = tfrecord(&["count", "--path", &p])?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "3");

    let out = tfrecord(&["verify", "--path", &p])?;
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "ok: 3 records, 14 payload bytes"
    );

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn dump_json_lines() -> Result<()> {
    let path = unique_path("dump");
    fs::write(&path, stream_of(["hello", "world!"]))?;
    let p = path.to_string_lossy().to_string();

    let out = tfrecord(&["dump", "--path", &p, "--json", "--preview", "2"])?;
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[0]["len"], 5);
    assert_eq!(lines[0]["preview_hex"], "6865");
    assert_eq!(lines[0]["truncated"], true);
    assert_eq!(lines[1]["len"], 6);

    let out = tfrecord(&["dump", "--path", &p, "--limit", "1"])?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 1);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn verify_fails_on_bad_crc_but_count_no_crc_passes() -> Result<()> {
    let path = unique_path("bad");
    let mut data = stream_of(["ok", "broken"]);
    // второй кадр начинается после первого (16 + 2 байта)
    let second = 16 + 2;
    data[second + data_crc_off(6)] ^= 0x01;
    fs::write(&path, &data)?;
    let p = path.to_string_lossy().to_string();

    let out = tfrecord(&["verify", "--path", &p])?;
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("record #1"), "stderr: {stderr}");

    let out = tfrecord(&["count", "--path", &p, "--no-crc"])?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "2");

    fs::remove_file(&path)?;
    Ok(())
}
