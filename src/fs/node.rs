//! Filesystem nodes
//!
//! A node is either a file holding content or a directory holding an
//! ordered list of children. Both carry the same metadata block.

use chrono::{DateTime, Utc};

use super::permissions::{PermissionSet, PermissionSource};
use super::types::{FileContent, FsError, NodeKind};
use crate::environment::ExecutionEnvironment;
use crate::identity::{Group, User};

/// Resolved owning user and group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub user: User,
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// `None` only for the root directory
    pub name: Option<String>,
    pub owner: Owner,
    pub permissions: PermissionSet,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File {
        metadata: Metadata,
        content: FileContent,
    },
    Directory {
        metadata: Metadata,
        /// Insertion order is listing order; lookup is first match.
        children: Vec<Node>,
    },
}

/// Optional metadata for node construction.
#[derive(Debug, Clone, Default)]
pub struct NodeOptions {
    /// Defaults to the environment's current user
    pub owner: Option<User>,
    /// Defaults to the node kind's default set
    pub permissions: Option<PermissionSource>,
    /// Defaults to now
    pub modified_at: Option<DateTime<Utc>>,
}

impl NodeOptions {
    pub fn owned_by(user: &User) -> Self {
        Self { owner: Some(user.clone()), ..Default::default() }
    }

    pub fn with_permissions(mut self, permissions: impl Into<PermissionSource>) -> Self {
        self.permissions = Some(permissions.into());
        self
    }
}

impl Node {
    pub fn metadata(&self) -> &Metadata {
        match self {
            Node::File { metadata, .. } | Node::Directory { metadata, .. } => metadata,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata().name.as_deref()
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == Some(name))
    }

    pub fn content(&self) -> Option<&FileContent> {
        match self {
            Node::File { content, .. } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Content length for files, child count for directories.
    pub fn size(&self) -> usize {
        match self {
            Node::File { content, .. } => content.len(),
            Node::Directory { children, .. } => children.len(),
        }
    }
}

fn build_metadata(
    env: &ExecutionEnvironment,
    name: Option<&str>,
    kind: NodeKind,
    options: NodeOptions,
) -> Result<Metadata, FsError> {
    let user = options.owner.unwrap_or_else(|| env.user().clone());
    let group = env.identities().group_of(&user)?.clone();
    let permissions = PermissionSet::from_source(
        options
            .permissions
            .unwrap_or_else(|| PermissionSet::default_for(kind).into()),
    )?;
    Ok(Metadata {
        name: name.map(str::to_string),
        owner: Owner { user, group },
        permissions,
        modified_at: options.modified_at.unwrap_or_else(Utc::now),
    })
}

/// Build a detached file node.
pub fn make_file(
    env: &ExecutionEnvironment,
    name: &str,
    content: impl Into<FileContent>,
    options: NodeOptions,
) -> Result<Node, FsError> {
    Ok(Node::File {
        metadata: build_metadata(env, Some(name), NodeKind::File, options)?,
        content: content.into(),
    })
}

/// Build a detached directory node. Duplicate child names are kept as given.
pub fn make_directory(
    env: &ExecutionEnvironment,
    name: &str,
    children: Vec<Node>,
    options: NodeOptions,
) -> Result<Node, FsError> {
    Ok(Node::Directory {
        metadata: build_metadata(env, Some(name), NodeKind::Directory, options)?,
        children,
    })
}

/// Build the nameless root directory.
pub fn make_root(
    env: &ExecutionEnvironment,
    children: Vec<Node>,
    options: NodeOptions,
) -> Result<Node, FsError> {
    Ok(Node::Directory {
        metadata: build_metadata(env, None, NodeKind::Directory, options)?,
        children,
    })
}
