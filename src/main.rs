//! Command-line BSP inspector.
//!
//! `paddock FILE...` decodes each argument left to right and dumps every
//! field to stdout. Files that cannot be read or are not exactly 604 bytes
//! are skipped without a diagnostic; run with `RUST_LOG=paddock=debug` to
//! see why a file was passed over.

use clap::Parser;
use paddock::{BspReader, render};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "paddock", version, about = "Inspect Mario Kart Wii BSP vehicle physics files")]
struct Cli {
    /// BSP files to inspect, processed left to right
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.files.is_empty() {
        eprintln!("Usage: paddock FILES...");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &cli.files {
        // Per-file failures never affect the exit status; this is a batch
        // tool and partial success is the expected common case.
        match BspReader::open(path) {
            Ok(reader) => {
                if let Err(err) = render(&mut out, reader.identity(), reader.bsp()) {
                    debug!(path = %path, %err, "write to stdout failed");
                    break;
                }
                let _ = out.flush();
            }
            Err(err) => {
                debug!(path = %path, %err, "skipping file");
            }
        }
    }

    ExitCode::SUCCESS
}
