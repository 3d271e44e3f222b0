// src/commands/mod.rs
pub mod cd_cmd;
pub mod date;
pub mod dispatch;
pub mod exit_cmd;
pub mod ls;
pub mod rev_cmd;
pub mod touch;
pub mod types;

pub use dispatch::{dispatch, CommandKind};
pub use types::{CommandResult, Outcome};
