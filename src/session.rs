// src/session.rs
//! Session state for one emulator run.

use std::path::PathBuf;

/// The live emulator state: identity strings plus the mounted root and
/// the tracked current location.
///
/// `current_dir` is a normalized virtual path (always `/`-rooted); `cd`
/// is the only mutator. The process working directory is never touched.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub hostname: String,
    pub mount_root: PathBuf,
    pub current_dir: String,
}

impl Session {
    pub fn new(username: &str, hostname: &str, mount_root: PathBuf) -> Self {
        Self {
            username: username.to_string(),
            hostname: hostname.to_string(),
            mount_root,
            current_dir: "/".to_string(),
        }
    }

    /// The interactive prompt, printed before each read.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.username, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_format() {
        let s = Session::new("alice", "box", PathBuf::from("/tmp/vfs"));
        assert_eq!(s.prompt(), "alice@box:~$ ");
    }

    #[test]
    fn test_starts_at_virtual_root() {
        let s = Session::new("u", "h", PathBuf::from("/tmp/vfs"));
        assert_eq!(s.current_dir, "/");
    }
}
