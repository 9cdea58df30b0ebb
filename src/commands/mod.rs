//! Command implementations for webptidy.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod cleanup;
mod convert;
mod delete;
mod summary;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert::cmd_convert(args),
        Command::Cleanup(args) => cleanup::cmd_cleanup(args),
        Command::Delete(args) => delete::cmd_delete(args),
    }
}
