//! Filesystem
//!
//! Owns the root node and walks paths down the tree.

use tracing::trace;

use super::node::Node;
use super::path::Path;
use super::types::FsError;

/// A tree of nodes with a single directory root.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: Node,
}

impl Filesystem {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk the segments of `path` from the root. The path is taken as
    /// given: `.` and `..` are matched as literal names. Descending
    /// through a file is reported as not found.
    pub fn resolve(&self, path: &Path) -> Result<&Node, FsError> {
        let mut current = &self.root;
        for segment in path.parts() {
            let next = match current {
                Node::File { .. } => None,
                Node::Directory { children, .. } => {
                    children.iter().find(|c| c.name() == Some(segment))
                }
            };
            current = next.ok_or_else(|| {
                trace!(path = %path, segment, "resolution failed");
                FsError::NotFound { path: path.to_string() }
            })?;
        }
        Ok(current)
    }

    /// Canonicalize against `cwd`, then resolve.
    pub fn resolve_from(&self, cwd: &Path, path: &Path) -> Result<&Node, FsError> {
        self.resolve(&path.canonicalize(cwd))
    }

    /// Depth-first pre-order visit of `start` and everything below it,
    /// yielding each node with its canonical path.
    pub fn walk(&self, start: &Path) -> Result<Vec<(Path, &Node)>, FsError> {
        let node = self.resolve(start)?;
        let mut out = Vec::new();
        collect(start.canonicalize(&Path::root()), node, &mut out);
        Ok(out)
    }
}

fn collect<'a>(path: Path, node: &'a Node, out: &mut Vec<(Path, &'a Node)>) {
    let children = node.children();
    out.push((path.clone(), node));
    for child in children {
        if let Some(name) = child.name() {
            collect(path.append(name), child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ExecutionEnvironment;
    use crate::fs::node::{make_directory, make_file, make_root, NodeOptions};
    use crate::fs::types::FileContent;
    use crate::identity::IdentityRegistry;

    fn sample() -> Filesystem {
        let env = ExecutionEnvironment::create(1000, IdentityRegistry::builtin()).unwrap();
        let opts = NodeOptions::default;
        let readme = make_file(&env, "readme", "top", opts()).unwrap();
        let dup_a = make_file(&env, "dup", "first", opts()).unwrap();
        let dup_b = make_directory(&env, "dup", vec![], opts()).unwrap();
        let docs = make_directory(&env, "docs", vec![readme, dup_a, dup_b], opts()).unwrap();
        let bin = make_directory(&env, "bin", vec![], opts()).unwrap();
        Filesystem::new(make_root(&env, vec![docs, bin], opts()).unwrap())
    }

    #[test]
    fn test_empty_path_is_root() {
        let fs = sample();
        assert_eq!(fs.resolve(&Path::parse("/")).unwrap().name(), None);
        assert_eq!(fs.resolve(&Path::parse("")).unwrap().name(), None);
    }

    #[test]
    fn test_resolve_nested() {
        let fs = sample();
        let node = fs.resolve(&Path::parse("/docs/readme")).unwrap();
        assert_eq!(node.content(), Some(&FileContent::Text("top".to_string())));
        // Relative raw paths walk from the root too
        assert!(fs.resolve(&Path::parse("docs//readme")).unwrap().is_file());
    }

    #[test]
    fn test_descend_through_file_is_not_found() {
        let fs = sample();
        assert_eq!(
            fs.resolve(&Path::parse("/docs/readme/more")),
            Err(FsError::NotFound { path: "/docs/readme/more".to_string() })
        );
    }

    #[test]
    fn test_missing_segment() {
        let fs = sample();
        assert!(matches!(fs.resolve(&Path::parse("/nope")), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let fs = sample();
        let node = fs.resolve(&Path::parse("/docs/dup")).unwrap();
        assert!(node.is_file());
    }

    #[test]
    fn test_resolve_does_not_canonicalize() {
        let fs = sample();
        assert!(fs.resolve(&Path::parse("/docs/../bin")).is_err());
        assert!(fs.resolve_from(&Path::root(), &Path::parse("/docs/../bin")).unwrap().is_directory());
        assert!(fs.resolve_from(&Path::parse("/docs"), &Path::parse("./readme")).unwrap().is_file());
    }

    #[test]
    fn test_walk_preorder() {
        let fs = sample();
        let paths: Vec<String> = fs
            .walk(&Path::root())
            .unwrap()
            .into_iter()
            .map(|(p, _)| p.to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["/", "/docs", "/docs/readme", "/docs/dup", "/docs/dup", "/bin"]
        );
    }
}
