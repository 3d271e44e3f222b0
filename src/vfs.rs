// src/vfs.rs
//! Virtual path resolution.
//!
//! Every command resolves its path tokens through here, so all commands
//! share identical path semantics: a token is normalized into a virtual
//! absolute path and anchored under the mount root. Normalization is
//! purely lexical and `..` clamps at the virtual root, so a resolved
//! host path can never leave the mounted subtree.

use std::path::{Path, PathBuf};

/// Normalize a virtual path into absolute form.
///
/// `.` components are dropped, `..` pops at most to the root, repeated
/// and trailing separators collapse. The result always starts with `/`.
pub fn normalize(path: &str) -> String {
    let parts: Vec<&str> = path
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();
    let mut resolved: Vec<&str> = Vec::new();
    for part in parts {
        if part == ".." {
            resolved.pop();
        } else {
            resolved.push(part);
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve a path token to a host location under `mount_root`.
///
/// Pure composition; does not check existence.
pub fn resolve(mount_root: &Path, token: &str) -> PathBuf {
    let virtual_path = normalize(token);
    if virtual_path == "/" {
        mount_root.to_path_buf()
    } else {
        mount_root.join(&virtual_path[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize("a/b"), "/a/b");
        assert_eq!(normalize("/a/b"), "/a/b");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_normalize_dots() {
        assert_eq!(normalize("./a/./b"), "/a/b");
        assert_eq!(normalize("a/../b"), "/b");
        assert_eq!(normalize("a//b/"), "/a/b");
    }

    #[test]
    fn test_normalize_clamps_at_root() {
        assert_eq!(normalize(".."), "/");
        assert_eq!(normalize("../../etc/passwd"), "/etc/passwd");
        assert_eq!(normalize("a/../../../b"), "/b");
    }

    #[test]
    fn test_resolve_under_root() {
        let root = Path::new("/tmp/vfs");
        assert_eq!(resolve(root, "docs/a.txt"), Path::new("/tmp/vfs/docs/a.txt"));
        assert_eq!(resolve(root, "/docs"), Path::new("/tmp/vfs/docs"));
        assert_eq!(resolve(root, ""), Path::new("/tmp/vfs"));
    }

    #[test]
    fn test_resolve_cannot_escape() {
        let root = Path::new("/tmp/vfs");
        assert_eq!(resolve(root, "../../etc"), Path::new("/tmp/vfs/etc"));
        assert!(resolve(root, "a/../../..").starts_with(root));
    }
}
