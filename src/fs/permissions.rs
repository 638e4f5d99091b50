//! Permission Model
//!
//! Owner/group/other triads of read/write/execute flags. Permissions are
//! recorded on every node but never enforced.

use std::fmt;
use std::str::FromStr;

use super::types::{FsError, NodeKind};

/// Read/write/execute flags for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionTriad {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl PermissionTriad {
    /// Decode one octal digit. Only the low three bits are read.
    pub fn from_digit(digit: u32) -> Self {
        Self {
            read: digit & 4 != 0,
            write: digit & 2 != 0,
            execute: digit & 1 != 0,
        }
    }

    pub fn digit(&self) -> u32 {
        (self.read as u32) << 2 | (self.write as u32) << 1 | self.execute as u32
    }
}

impl fmt::Display for PermissionTriad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.read { 'r' } else { '-' },
            if self.write { 'w' } else { '-' },
            if self.execute { 'x' } else { '-' },
        )
    }
}

/// Anything a permission set can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSource {
    Existing(PermissionSet),
    /// Three octal digits, e.g. "754"
    Symbolic(String),
    /// Numeric mode, e.g. 0o754
    Numeric(u32),
}

impl From<PermissionSet> for PermissionSource {
    fn from(set: PermissionSet) -> Self {
        PermissionSource::Existing(set)
    }
}

impl From<&str> for PermissionSource {
    fn from(s: &str) -> Self {
        PermissionSource::Symbolic(s.to_string())
    }
}

impl From<u32> for PermissionSource {
    fn from(mode: u32) -> Self {
        PermissionSource::Numeric(mode)
    }
}

/// Permission triads for owner, group and other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    pub user: PermissionTriad,
    pub group: PermissionTriad,
    pub other: PermissionTriad,
}

impl PermissionSet {
    pub fn from_source(source: impl Into<PermissionSource>) -> Result<Self, FsError> {
        match source.into() {
            PermissionSource::Existing(set) => Ok(set),
            PermissionSource::Symbolic(spec) => parse_symbolic(&spec),
            PermissionSource::Numeric(mode) => {
                if mode > 0o777 {
                    return Err(FsError::MalformedPermissionSpec {
                        spec: format!("{:o}", mode),
                    });
                }
                Ok(Self::from_mode(mode))
            }
        }
    }

    /// Default for a node kind: directories `rwxrwxr-x`, files `rw-rw-r--`.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Directory => Self::from_mode(0o775),
            NodeKind::File => Self::from_mode(0o664),
        }
    }

    fn from_mode(mode: u32) -> Self {
        Self {
            user: PermissionTriad::from_digit((mode >> 6) & 0o7),
            group: PermissionTriad::from_digit((mode >> 3) & 0o7),
            other: PermissionTriad::from_digit(mode & 0o7),
        }
    }

    pub fn mode(&self) -> u32 {
        self.user.digit() << 6 | self.group.digit() << 3 | self.other.digit()
    }
}

fn parse_symbolic(spec: &str) -> Result<PermissionSet, FsError> {
    let malformed = || FsError::MalformedPermissionSpec { spec: spec.to_string() };
    let digits: Vec<u32> = spec
        .chars()
        .map(|c| c.to_digit(8))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(malformed)?;
    match digits.as_slice() {
        [u, g, o] => Ok(PermissionSet {
            user: PermissionTriad::from_digit(*u),
            group: PermissionTriad::from_digit(*g),
            other: PermissionTriad::from_digit(*o),
        }),
        _ => Err(malformed()),
    }
}

impl FromStr for PermissionSet {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbolic(s)
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.user, self.group, self.other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_754() {
        let set = PermissionSet::from_source("754").unwrap();
        assert_eq!(set.user, PermissionTriad { read: true, write: true, execute: true });
        assert_eq!(set.group, PermissionTriad { read: true, write: false, execute: true });
        assert_eq!(set.other, PermissionTriad { read: true, write: false, execute: false });
        assert_eq!(set.to_string(), "rwxr-xr--");
    }

    #[test]
    fn test_every_digit_decodes() {
        for d in 0..8u32 {
            let spec = format!("{d}{d}{d}");
            let set = PermissionSet::from_source(spec.as_str()).unwrap();
            for triad in [set.user, set.group, set.other] {
                assert_eq!(triad.read, d & 4 != 0);
                assert_eq!(triad.write, d & 2 != 0);
                assert_eq!(triad.execute, d & 1 != 0);
            }
        }
    }

    #[test]
    fn test_numeric_uses_input() {
        let set = PermissionSet::from_source(0o640u32).unwrap();
        assert_eq!(set.to_string(), "rw-r-----");
        assert_eq!(set.mode(), 0o640);
        assert_eq!(PermissionSet::from_source(0u32).unwrap().to_string(), "---------");
    }

    #[test]
    fn test_numeric_out_of_range() {
        assert!(matches!(
            PermissionSet::from_source(0o1777u32),
            Err(FsError::MalformedPermissionSpec { .. })
        ));
    }

    #[test]
    fn test_existing_pass_through() {
        let set = PermissionSet::from_source("531").unwrap();
        assert_eq!(PermissionSet::from_source(set).unwrap(), set);
    }

    #[test]
    fn test_malformed_symbolic() {
        for bad in ["", "75", "7554", "abc", "758", "-75", "7 5"] {
            assert_eq!(
                PermissionSet::from_source(bad),
                Err(FsError::MalformedPermissionSpec { spec: bad.to_string() }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PermissionSet::default_for(NodeKind::Directory).to_string(), "rwxrwxr-x");
        assert_eq!(PermissionSet::default_for(NodeKind::File).to_string(), "rw-rw-r--");
    }

    #[test]
    fn test_from_str() {
        let set: PermissionSet = "700".parse().unwrap();
        assert_eq!(set.mode(), 0o700);
    }
}
