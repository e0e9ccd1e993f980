use anyhow::Result;
use env_logger::{Builder, Env};
use log::error;

mod cli;
mod util;
mod cmd_count;
mod cmd_dump;
mod cmd_verify;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug ./tfrecord dump --path data.tfrecord
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse_args();
    match cli.cmd {
        cli::Cmd::Count { path, no_crc } =>
            cmd_count::exec(path, no_crc),

        cli::Cmd::Dump { path, no_crc, json, limit, preview } =>
            cmd_dump::exec(path, no_crc, json, limit, preview),

        cli::Cmd::Verify { path } =>
            cmd_verify::exec(path),
    }
}
