use crate::FsError;
use std::io;
use thiserror::Error;
use tracing::debug;

pub type CmdResult<T> = Result<T, CommandError>;

/// Errors raised while running a single command; none of them stops the
/// shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no such function")]
    NoSuchFunction,

    #[error("invalid {0} name")]
    MissingName(&'static str),

    #[error("missing operand")]
    MissingOperand,

    #[error("invalid exit status '{0}'")]
    InvalidStatus(String),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn log(&self) {
        match self {
            CommandError::Fs(err) => err.log(),
            err => debug!("... {}", err),
        }
    }
}
