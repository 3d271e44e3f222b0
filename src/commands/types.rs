// src/commands/types.rs

/// Output of one dispatched command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Empty result for no-op lines.
    pub fn empty() -> Self {
        Self::success(String::new())
    }
}

/// What the driver should do after a dispatched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the result and keep reading.
    Continue(CommandResult),
    /// Print the farewell and terminate the session.
    Exit(CommandResult),
}
