//! Identity Registry
//!
//! Fixed table of users and groups, looked up by numeric id.

pub mod registry;

pub use registry::IdentityRegistry;

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Identity lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("unknown {kind} id {id}")]
    UnknownIdentity { kind: IdentityKind, id: u32 },

    #[error("user '{user}' references missing group {gid}")]
    DanglingGroupReference { user: String, gid: u32 },
}

/// Which table an id was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKind::User => write!(f, "user"),
            IdentityKind::Group => write!(f, "group"),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
    /// Supplementary group memberships
    #[serde(default)]
    pub groups: BTreeSet<u32>,
}

impl User {
    pub fn new(name: &str, uid: u32, gid: u32, groups: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.to_string(),
            uid,
            gid,
            groups: groups.into_iter().collect(),
        }
    }

    /// Home directory path for this user
    pub fn home(&self) -> String {
        format!("/home/{}", self.name)
    }
}

/// A group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub name: String,
    pub gid: u32,
}

impl Group {
    pub fn new(name: &str, gid: u32) -> Self {
        Self { name: name.to_string(), gid }
    }
}
