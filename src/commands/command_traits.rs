//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use std::io::Write;

use crate::errors::RegionResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command, writing its report to `out`
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self, out: &mut dyn Write) -> RegionResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> RegionResult<Box<dyn Command>>;
}
