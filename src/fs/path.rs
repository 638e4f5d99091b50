//! Path values
//!
//! A `Path` wraps the raw string it was parsed from. Segment splitting,
//! classification and canonicalization are derived from that string on
//! demand and never touch the node tree.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    raw: String,
}

impl Path {
    /// Wrap a raw string verbatim.
    pub fn parse(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }

    pub fn root() -> Self {
        Self::parse("/")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with(SEPARATOR)
    }

    /// Non-empty segments, in order.
    pub fn parts(&self) -> Vec<&str> {
        self.raw.split(SEPARATOR).filter(|p| !p.is_empty()).collect()
    }

    /// String-level join. No normalization happens here.
    pub fn append(&self, part: impl AsRef<str>) -> Path {
        let part = part.as_ref();
        if self.raw.ends_with(SEPARATOR) {
            Self { raw: format!("{}{}", self.raw, part) }
        } else {
            Self { raw: format!("{}{}{}", self.raw, SEPARATOR, part) }
        }
    }

    /// Resolve `.` and `..` and make the path absolute, rebasing relative
    /// paths onto `cwd`. A `..` at the root is dropped.
    pub fn canonicalize(&self, cwd: &Path) -> Path {
        let rebased;
        let absolute = if self.is_absolute() {
            self
        } else {
            rebased = cwd.append(self);
            &rebased
        };

        let mut stack: Vec<&str> = Vec::new();
        for part in absolute.parts() {
            match part {
                "." => {}
                ".." => {
                    stack.pop();
                }
                _ => stack.push(part),
            }
        }
        Self { raw: format!("{}{}", SEPARATOR, stack.join("/")) }
    }

    /// Everything but the last segment, as an absolute-or-relative path
    /// matching this one. `None` when there are no segments.
    pub fn parent(&self) -> Option<Path> {
        let parts = self.parts();
        let (_, init) = parts.split_last()?;
        let joined = init.join("/");
        Some(if self.is_absolute() {
            Self { raw: format!("/{}", joined) }
        } else if joined.is_empty() {
            Self::parse(".")
        } else {
            Self { raw: joined }
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.raw.split(SEPARATOR).filter(|p| !p.is_empty()).last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
