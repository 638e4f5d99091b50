//! Execution Environment
//!
//! Per-session state: who is logged in, where they are, and their
//! variables. Everything that needs a cwd or a user takes one of these
//! explicitly.

use std::sync::Arc;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex_lite::{Captures, Regex};
use tracing::debug;

use crate::fs::Path;
use crate::identity::{IdentityError, IdentityRegistry, User};

pub const DEFAULT_PATH: &str = "/bin";
pub const DEFAULT_TMPDIR: &str = "/tmp";
pub const DEFAULT_PS1: &str = "\\u@\\h:\\w\\$ ";
pub const DEFAULT_HOSTNAME: &str = "localhost";

lazy_static! {
    static ref PROMPT_ESCAPE: Regex = Regex::new(r"\\([uhw$])").unwrap();
}

#[derive(Debug, Clone)]
pub struct ExecutionEnvironment {
    cwd: Path,
    user: User,
    variables: IndexMap<String, String>,
    identities: Arc<IdentityRegistry>,
}

impl ExecutionEnvironment {
    /// Log `uid` in: cwd is their home and the variables are seeded from it.
    pub fn create(uid: u32, identities: Arc<IdentityRegistry>) -> Result<Self, IdentityError> {
        let user = identities.lookup_user(uid)?.clone();
        let home = user.home();

        let mut variables = IndexMap::new();
        variables.insert("HOME".to_string(), home.clone());
        variables.insert("PWD".to_string(), home.clone());
        variables.insert("TMPDIR".to_string(), DEFAULT_TMPDIR.to_string());
        variables.insert("PS1".to_string(), DEFAULT_PS1.to_string());
        variables.insert("PATH".to_string(), DEFAULT_PATH.to_string());
        variables.insert("USER".to_string(), user.name.clone());
        variables.insert("HOSTNAME".to_string(), DEFAULT_HOSTNAME.to_string());

        debug!(uid, user = %user.name, home = %home, "created execution environment");
        Ok(Self {
            cwd: Path::parse(&home),
            user,
            variables,
            identities,
        })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Move to `path` (canonicalized). Updates `PWD` and `OLDPWD`.
    /// No existence check happens here.
    pub fn set_cwd(&mut self, path: &Path) {
        let next = path.canonicalize(&self.cwd);
        let previous = std::mem::replace(&mut self.cwd, next);
        self.variables.insert("OLDPWD".to_string(), previous.to_string());
        self.variables.insert("PWD".to_string(), self.cwd.to_string());
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    pub fn get_var(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn set_var(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    pub fn unset_var(&mut self, name: &str) -> Option<String> {
        self.variables.shift_remove(name)
    }

    /// Variables in the order they were first set.
    pub fn variables(&self) -> &IndexMap<String, String> {
        &self.variables
    }

    /// Canonicalize a raw path against the current directory.
    pub fn resolve_path(&self, raw: &str) -> Path {
        Path::parse(raw).canonicalize(&self.cwd)
    }

    /// Render `PS1`: `\u` user, `\h` host, `\w` cwd with `~` for home, `\$`
    /// `#` for root and `$` otherwise.
    pub fn prompt(&self) -> String {
        let template = self.get_var("PS1").unwrap_or(DEFAULT_PS1);
        PROMPT_ESCAPE
            .replace_all(template, |caps: &Captures| match &caps[1] {
                "u" => self.user.name.clone(),
                "h" => self.get_var("HOSTNAME").unwrap_or(DEFAULT_HOSTNAME).to_string(),
                "w" => self.display_cwd(),
                _ => String::from(if self.user.uid == 0 { "#" } else { "$" }),
            })
            .into_owned()
    }

    fn display_cwd(&self) -> String {
        let cwd = self.cwd.as_str();
        match self.get_var("HOME") {
            Some(home) if cwd == home => "~".to_string(),
            Some(home) if cwd.starts_with(&format!("{}/", home)) => {
                format!("~{}", &cwd[home.len()..])
            }
            _ => cwd.to_string(),
        }
    }
}
