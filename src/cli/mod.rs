//! Interactive and scriptable shell around the transaction feed.

pub mod commands;
pub mod context;
pub mod error;
pub mod output;
pub mod shell;

pub use context::{CliMode, ShellContext};
pub use error::{CliError, CommandError};
pub use shell::run_cli;
