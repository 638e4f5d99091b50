//! File System Types
//!
//! Core types shared by the node tree, permissions and path resolution.

use thiserror::Error;

use crate::identity::IdentityError;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// No such node, or a segment tried to descend through a file.
    #[error("ENOENT: no such file or directory '{path}'")]
    NotFound { path: String },

    #[error("invalid permission spec '{spec}'")]
    MalformedPermissionSpec { spec: String },

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// The two kinds of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// File content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    /// Id of a callable in the binary registry
    Binary(String),
}

impl FileContent {
    /// Length in bytes as shown by listings. Binaries report their id length.
    pub fn len(&self) -> usize {
        match self {
            FileContent::Text(s) | FileContent::Binary(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FileContent {
    fn default() -> Self {
        FileContent::Text(String::new())
    }
}

impl From<String> for FileContent {
    fn from(s: String) -> Self {
        FileContent::Text(s)
    }
}

impl From<&str> for FileContent {
    fn from(s: &str) -> Self {
        FileContent::Text(s.to_string())
    }
}
