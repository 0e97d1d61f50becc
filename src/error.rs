use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("cannot read {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to render the header")]
    RenderFailed(#[from] fmt::Error),
    #[error("another logger is already installed")]
    LoggerUnavailable,
    #[error("invalid code point 0x{0:X}")]
    InvalidCodePoint(u32),
}

impl TablesError {
    pub fn exit_code(&self) -> u8 {
        match self {
            TablesError::InputUnavailable { .. } => 2,
            TablesError::OutputUnwritable { .. } => 3,
            TablesError::RenderFailed(_) | TablesError::LoggerUnavailable | TablesError::InvalidCodePoint(_) => 1,
        }
    }
}
