//! vshell - a minimal shell emulator over a mounted virtual filesystem
//!
//! Extracts a tar image onto a host directory, then runs a fixed set of
//! shell-like commands against it, reading first from a startup script
//! and then from an interactive prompt.

pub mod commands;
pub mod mount;
pub mod session;
pub mod shell;
pub mod vfs;

pub use commands::{dispatch, CommandKind, CommandResult, Outcome};
pub use mount::{mount, MountError};
pub use session::Session;
pub use shell::Shell;
