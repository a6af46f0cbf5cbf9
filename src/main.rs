use std::env;
use std::fs;
use std::io;
use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use torus_life::app;
use torus_life::config::Config;

fn main() -> ExitCode {
    // Logs go to stderr so they never corrupt the raw-mode surface.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = match read_seed() {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Failed to read seed input: {e:#}");
            return ExitCode::from(4);
        }
    };

    let config = Config::default();

    match app::run(&config, &seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Seed coordinates come from the file named on the command line, or from
/// stdin when no path is given. Interactive keys are read from the
/// terminal event stream, never from stdin, so the two input sources stay
/// separate even when stdin is redirected.
fn read_seed() -> anyhow::Result<Vec<u8>> {
    match env::args().nth(1) {
        Some(path) => fs::read(&path).with_context(|| format!("reading seed file {path}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading seed from stdin")?;

            Ok(buf)
        }
    }
}
