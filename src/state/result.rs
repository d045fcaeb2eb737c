use crate::FileKind;
use anyhow::Error;
use thiserror::Error;
use tracing::{debug, error};

pub type FsResult<T> = Result<T, FsError>;

/// Errors raised by the file tree.
///
/// Note that lookup misses (e.g. `cd` into a nonexistent directory) are not
/// errors - operations report them through their return value instead.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("is a {0}")]
    WrongFileType(FileKind),

    #[error("invalid file name '{0}'")]
    InvalidName(String),

    #[error("cannot remove '{0}'")]
    CannotRemove(String),

    #[error(transparent)]
    Other(#[from] Error),
}

impl FsError {
    pub fn log(&self) {
        match self {
            FsError::WrongFileType(kind) => {
                debug!("... wrong file type ({})", kind);
            }

            FsError::InvalidName(name) => {
                debug!("... invalid name: {:?}", name);
            }

            FsError::CannotRemove(name) => {
                debug!("... cannot remove: {:?}", name);
            }

            FsError::Other(err) => {
                error!("... {:?}", err);
            }
        }
    }
}
