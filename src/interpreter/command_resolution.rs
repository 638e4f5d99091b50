//! Command Resolution
//!
//! PATH-based lookup of executable files in the node tree.

use crate::fs::{Filesystem, Node, Path};

/// Split PATH into individual directories
pub fn split_path(path_env: &str) -> Vec<&str> {
    path_env.split(':').filter(|s| !s.is_empty()).collect()
}

/// Check if a command name contains a path separator (making it a path reference)
pub fn is_path_command(command_name: &str) -> bool {
    command_name.contains('/')
}

/// The first file named `name` directly inside `dir`, if `dir` resolves to
/// a directory.
pub fn find_in_dir<'a>(fs: &'a Filesystem, dir: &Path, name: &str) -> Option<&'a Node> {
    match fs.resolve(dir) {
        Ok(Node::Directory { children, .. }) => children
            .iter()
            .find(|c| c.is_file() && c.name() == Some(name)),
        _ => None,
    }
}

/// Every match for `name` across `dirs`, in PATH order.
pub fn find_in_path<'a>(fs: &'a Filesystem, dirs: &[&str], name: &str) -> Vec<(Path, &'a Node)> {
    dirs.iter()
        .filter_map(|dir| {
            let dir = Path::parse(dir);
            find_in_dir(fs, &dir, name).map(|node| (dir.append(name), node))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::sample;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/bin:/usr/bin"), vec!["/bin", "/usr/bin"]);
        assert_eq!(split_path(":/bin::"), vec!["/bin"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_is_path_command() {
        assert!(is_path_command("/bin/ls"));
        assert!(is_path_command("./run"));
        assert!(!is_path_command("ls"));
    }

    #[test]
    fn test_find_in_dir_skips_directories() {
        let (fs, _) = sample();
        assert!(find_in_dir(&fs, &Path::parse("/bin"), "ls").is_some());
        // "projects" exists in the home dir but is a directory
        assert!(find_in_dir(&fs, &Path::parse("/home/nyx"), "projects").is_none());
        // PATH entry that is a file, not a directory
        assert!(find_in_dir(&fs, &Path::parse("/home/nyx/notes.txt"), "x").is_none());
    }

    #[test]
    fn test_find_in_path_order() {
        let (fs, _) = sample();
        let hits = find_in_path(&fs, &["/missing", "/home/nyx", "/bin"], "notes.txt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.as_str(), "/home/nyx/notes.txt");
    }
}
