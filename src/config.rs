//! Configuration
//!
//! Session settings and the identity table, loadable from TOML. Missing
//! keys fall back to the built-in defaults.

use std::path::Path as StdPath;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::environment::DEFAULT_HOSTNAME;
use crate::identity::{Group, IdentityError, IdentityRegistry, User};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub hostname: String,
    /// Who the session logs in as
    pub login_uid: u32,
    pub users: Vec<User>,
    pub groups: Vec<Group>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let builtin = IdentityRegistry::builtin();
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            login_uid: 1000,
            users: builtin.users().cloned().collect(),
            groups: builtin.groups().cloned().collect(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<StdPath>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&text)
    }

    /// Build the identity table, checking every primary group exists.
    pub fn identities(&self) -> Result<Arc<IdentityRegistry>, ConfigError> {
        let registry = IdentityRegistry::new(self.users.clone(), self.groups.clone());
        registry.validate()?;
        Ok(Arc::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin() {
        let config = ShellConfig::default();
        assert_eq!(config.login_uid, 1000);
        assert_eq!(config.hostname, "localhost");
        let reg = config.identities().unwrap();
        assert_eq!(reg.lookup_user(0).unwrap().name, "root");
    }

    #[test]
    fn test_parse_full() {
        let config = ShellConfig::from_toml_str(
            r#"
            hostname = "nyx-term"
            login_uid = 7

            [[groups]]
            name = "crew"
            gid = 70

            [[users]]
            name = "ada"
            uid = 7
            gid = 70
            groups = [70]
            "#,
        )
        .unwrap();
        assert_eq!(config.hostname, "nyx-term");
        let reg = config.identities().unwrap();
        let ada = reg.lookup_user(7).unwrap();
        assert_eq!(reg.group_of(ada).unwrap().name, "crew");
        assert!(reg.lookup_user(1000).is_err());
    }

    #[test]
    fn test_partial_uses_defaults() {
        let config = ShellConfig::from_toml_str("login_uid = 0").unwrap();
        assert_eq!(config.login_uid, 0);
        assert_eq!(config.users.len(), 2);
    }

    #[test]
    fn test_dangling_group_rejected() {
        let config = ShellConfig::from_toml_str(
            r#"
            [[users]]
            name = "ghost"
            uid = 5
            gid = 55
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.identities(),
            Err(ConfigError::Identity(IdentityError::DanglingGroupReference { gid: 55, .. }))
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            ShellConfig::from_toml_str("login_uid = \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ShellConfig::load("/definitely/not/here.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
