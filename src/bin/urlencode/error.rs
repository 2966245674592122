use std::{io, path::PathBuf};
use thiserror::Error;
use urlencode::MalformedEscapeError;

/// An error that aborts a run of the tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
    /// `value` counts from 1, so it is the line number in line mode.
    #[error("value {value}: {source}")]
    Malformed {
        value: u64,
        #[source]
        source: MalformedEscapeError,
    },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Open { .. } => 3,
            CliError::Read(_) | CliError::Write(_) | CliError::Malformed { .. } => 2,
        }
    }
}
