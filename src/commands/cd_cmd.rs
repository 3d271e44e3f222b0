// src/commands/cd_cmd.rs
use crate::session::Session;
use crate::vfs;

use super::types::CommandResult;

/// Change the session's tracked location. The target resolves under the
/// mount root; path resolution for the other commands stays anchored at
/// the root regardless of the tracked location.
pub fn execute(session: &mut Session, args: &[String]) -> CommandResult {
    let Some(token) = args.first() else {
        return CommandResult::error("cd: not enough arguments\n".to_string());
    };

    let target = vfs::resolve(&session.mount_root, token);
    if target.is_dir() {
        session.current_dir = vfs::normalize(token);
        CommandResult::empty()
    } else {
        CommandResult::error(format!("cd: cannot find directory: {}\n", token))
    }
}
