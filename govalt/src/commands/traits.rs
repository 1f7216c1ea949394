//! Command trait for the govalt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all govalt commands implement.
///
/// # Type Parameters
/// * `Args` - The parsed arguments for this command
/// * `Output` - The value returned after the command has printed its report
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: &Config) -> Result<Self>
    where
        Self: Sized;

    /// Execute the command, writing its report to stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
