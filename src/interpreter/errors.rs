//! Dispatch Errors
//!
//! Conditions under which a command line could not be run at all. Errors
//! raised by a binary while running are reported in its `CommandResult`.

use thiserror::Error;

use crate::fs::FsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    /// The matched file holds text, not a binary id.
    #[error("{path}: cannot execute: not a binary")]
    NotExecutable { path: String },

    /// The matched file names a binary nobody registered.
    #[error("{path}: cannot execute: unknown binary '{id}'")]
    UnregisteredBinary { path: String, id: String },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl DispatchError {
    /// Shell-style exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::CommandNotFound { .. } => 127,
            DispatchError::NotExecutable { .. } | DispatchError::UnregisteredBinary { .. } => 126,
            DispatchError::Fs(FsError::NotFound { .. }) => 127,
            DispatchError::Fs(_) => 1,
        }
    }
}
