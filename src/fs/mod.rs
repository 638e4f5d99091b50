//! File System Module
//!
//! Simulated node tree, permission model and path handling.

pub mod filesystem;
pub mod node;
pub mod path;
pub mod permissions;
pub mod types;

pub use filesystem::Filesystem;
pub use node::{make_directory, make_file, make_root, Metadata, Node, NodeOptions, Owner};
pub use path::Path;
pub use permissions::{PermissionSet, PermissionSource, PermissionTriad};
pub use types::*;
