// src/commands/touch.rs
use std::fs::{FileTimes, OpenOptions};
use std::time::SystemTime;

use crate::session::Session;
use crate::vfs;

use super::types::CommandResult;

/// Create the file if absent, then set its access and modification times
/// to now. The open handle closes on drop on every path out.
pub fn execute(session: &mut Session, args: &[String]) -> CommandResult {
    let Some(token) = args.first() else {
        return CommandResult::error("touch: not enough arguments\n".to_string());
    };

    let path = vfs::resolve(&session.mount_root, token);
    let times = FileTimes::new()
        .set_accessed(SystemTime::now())
        .set_modified(SystemTime::now());

    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|file| file.set_times(times));

    match result {
        Ok(()) => CommandResult::empty(),
        Err(e) => CommandResult::error(format!("touch: cannot touch '{}': {}\n", token, e)),
    }
}
