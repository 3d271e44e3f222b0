// src/commands/ls.rs
use crate::session::Session;
use crate::vfs;

use super::types::CommandResult;

/// List entries of the target directory, one per line, in the order the
/// host filesystem returns them. Defaults to the mount root.
pub fn execute(session: &mut Session, args: &[String]) -> CommandResult {
    let token = args.first();
    let target = match token {
        Some(t) => vfs::resolve(&session.mount_root, t),
        None => session.mount_root.clone(),
    };

    let entries = match std::fs::read_dir(&target) {
        Ok(entries) => entries,
        Err(_) => {
            // Show the token as given, or the root it actually tried.
            let shown = token
                .cloned()
                .unwrap_or_else(|| session.mount_root.display().to_string());
            return CommandResult::error(format!("ls: cannot open directory: {}\n", shown));
        }
    };

    let mut output = String::new();
    for entry in entries.flatten() {
        output.push_str(&entry.file_name().to_string_lossy());
        output.push('\n');
    }
    CommandResult::success(output)
}
