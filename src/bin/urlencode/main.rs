use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod stream;

use config::{Args, Config};
use error::CliError;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing();

    let config = Config::from(args);
    debug!(?config, "resolved configuration");

    match execute(&config) {
        Ok(count) => {
            debug!(count, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "aborted");
            eprintln!("urlencode: err: {e}");
            eprintln!(r#"tip: Call "urlencode --help" to see usage"#);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("URLENCODE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn execute(config: &Config) -> Result<u64, CliError> {
    let writer = BufWriter::new(io::stdout().lock());

    match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            stream::run(config, BufReader::new(file), writer)
        }
        None => stream::run(config, io::stdin().lock(), writer),
    }
}
