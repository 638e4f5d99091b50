// src/identity/registry.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::{Group, IdentityError, IdentityKind, User};

lazy_static! {
    static ref BUILTIN: Arc<IdentityRegistry> = Arc::new(IdentityRegistry::new(
        vec![
            User::new("root", 0, 0, [0]),
            User::new("nyx", 1000, 1000, [1000, 10]),
        ],
        vec![
            Group::new("root", 0),
            Group::new("wheel", 10),
            Group::new("nyx", 1000),
        ],
    ));
}

/// Immutable uid/gid tables.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    users: BTreeMap<u32, User>,
    groups: BTreeMap<u32, Group>,
}

impl IdentityRegistry {
    /// Build a registry. Later entries with a duplicate id replace earlier ones.
    pub fn new(users: Vec<User>, groups: Vec<Group>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.uid, u)).collect(),
            groups: groups.into_iter().map(|g| (g.gid, g)).collect(),
        }
    }

    /// The process-wide default table (root and nyx).
    pub fn builtin() -> Arc<IdentityRegistry> {
        Arc::clone(&BUILTIN)
    }

    pub fn lookup_user(&self, uid: u32) -> Result<&User, IdentityError> {
        self.users.get(&uid).ok_or(IdentityError::UnknownIdentity {
            kind: IdentityKind::User,
            id: uid,
        })
    }

    pub fn lookup_group(&self, gid: u32) -> Result<&Group, IdentityError> {
        self.groups.get(&gid).ok_or(IdentityError::UnknownIdentity {
            kind: IdentityKind::Group,
            id: gid,
        })
    }

    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.values().find(|u| u.name == name)
    }

    /// Primary group of a user.
    pub fn group_of(&self, user: &User) -> Result<&Group, IdentityError> {
        self.groups
            .get(&user.gid)
            .ok_or_else(|| IdentityError::DanglingGroupReference {
                user: user.name.clone(),
                gid: user.gid,
            })
    }

    /// Supplementary groups that exist in the table, ordered by gid.
    pub fn groups_of(&self, user: &User) -> Vec<&Group> {
        user.groups
            .iter()
            .filter_map(|gid| self.groups.get(gid))
            .collect()
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Check that every user's primary group exists.
    pub fn validate(&self) -> Result<(), IdentityError> {
        for user in self.users.values() {
            self.group_of(user)?;
        }
        Ok(())
    }
}
