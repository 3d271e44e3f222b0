// src/commands/exit_cmd.rs
use crate::session::Session;

use super::types::CommandResult;

pub const FAREWELL: &str = "Exiting shell.\n";

/// Print the farewell line; the driver terminates with status 0.
pub fn execute(_session: &mut Session, _args: &[String]) -> CommandResult {
    CommandResult::success(FAREWELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_prints_farewell() {
        let mut s = Session::new("u", "h", PathBuf::from("/tmp/vshell-test"));
        let r = execute(&mut s, &[]);
        assert_eq!(r.stdout, FAREWELL);
        assert_eq!(r.exit_code, 0);
    }
}
