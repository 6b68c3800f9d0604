//! Point containment command
//!
//! Tests one or more points given on the command line against a region.

use std::io::Write;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{RegionError, RegionResult};
use crate::geometry::{BoundingRegion, Point};

/// Command for testing points against a region
pub struct ContainsCommand {
    /// Region to test against
    region: BoundingRegion,
    /// Points to test, in command-line order
    points: Vec<Point>,
}

impl ContainsCommand {
    /// Create a new contains command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `region` - Region resolved from the arguments
    ///
    /// # Returns
    /// A new ContainsCommand instance or an error
    pub fn new(args: &ArgMatches, region: BoundingRegion) -> RegionResult<Self> {
        let points = args
            .get_many::<String>("point")
            .ok_or_else(|| RegionError::GenericError("Missing --point".to_string()))?
            .map(|s| Point::from_string(s))
            .collect::<RegionResult<Vec<_>>>()?;

        Ok(Self::from_points(region, points))
    }

    /// Create a contains command from already parsed points
    pub fn from_points(region: BoundingRegion, points: Vec<Point>) -> Self {
        ContainsCommand { region, points }
    }
}

impl Command for ContainsCommand {
    fn execute(&self, out: &mut dyn Write) -> RegionResult<()> {
        info!("Testing {} points against region {}", self.points.len(), self.region);

        for point in &self.points {
            let inside = self.region.contains(point)?;
            writeln!(out, "{}: {}", point, if inside { "inside" } else { "outside" })?;
        }

        Ok(())
    }
}
