//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod describe_command;
pub mod contains_command;
pub mod classify_command;

pub use command_traits::{Command, CommandFactory};
pub use describe_command::DescribeCommand;
pub use contains_command::ContainsCommand;
pub use classify_command::ClassifyCommand;

use clap::ArgMatches;
use log::info;

use crate::config::{self, RegionSet};
use crate::errors::{RegionError, RegionResult};
use crate::geometry::BoundingRegion;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RectkitCommandFactory;

impl RectkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RectkitCommandFactory
    }
}

impl Default for RectkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for RectkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> RegionResult<Box<dyn Command>> {
        if args.get_flag("list-presets") {
            return Ok(Box::new(DescribeCommand::presets()));
        }

        let region = region_from_args(args)?;

        if args.contains_id("points-file") {
            Ok(Box::new(ClassifyCommand::new(args, region)?))
        } else if args.contains_id("point") {
            Ok(Box::new(ContainsCommand::new(args, region)?))
        } else {
            // Default to describing the region
            Ok(Box::new(DescribeCommand::new(region)))
        }
    }
}

/// Resolve the region named on the command line
///
/// Explicit corners take precedence over `--region`. A region name is looked
/// up in `--config` when given, otherwise among the built-in presets.
pub fn region_from_args(args: &ArgMatches) -> RegionResult<BoundingRegion> {
    let corner_a = args.get_one::<String>("corner-a");
    let corner_b = args.get_one::<String>("corner-b");

    match (corner_a, corner_b) {
        (Some(a), Some(b)) => return BoundingRegion::from_strings(a, b),
        (Some(_), None) | (None, Some(_)) => {
            return Err(RegionError::GenericError(
                "Both --corner-a and --corner-b are required".to_string(),
            ))
        }
        (None, None) => {}
    }

    let name = args.get_one::<String>("region").ok_or_else(|| {
        RegionError::GenericError("Missing region. Use --corner-a/--corner-b or --region".to_string())
    })?;

    match args.get_one::<String>("config") {
        Some(path) => {
            info!("Looking up region '{}' in {}", name, path);
            let set = RegionSet::from_file(path)?;
            set.get(name).cloned()
        }
        None => {
            info!("Looking up preset '{}'", name);
            config::preset(name).cloned()
        }
    }
}
