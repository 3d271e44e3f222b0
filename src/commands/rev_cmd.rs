// src/commands/rev_cmd.rs
use crate::session::Session;
use crate::vfs;

use super::types::CommandResult;

/// Reverse over Unicode code points, not bytes.
fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Print the file's full text content with character order reversed.
pub fn execute(session: &mut Session, args: &[String]) -> CommandResult {
    let Some(token) = args.first() else {
        return CommandResult::error("rev: not enough arguments\n".to_string());
    };

    let path = vfs::resolve(&session.mount_root, token);
    match std::fs::read_to_string(&path) {
        Ok(content) => CommandResult::success(format!("{}\n", reverse_string(&content))),
        Err(_) => CommandResult::error(format!("rev: cannot open file: {}\n", token)),
    }
}
