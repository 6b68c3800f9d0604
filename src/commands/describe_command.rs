//! Region description command
//!
//! Prints the corners and derived geometry of a region, or the names of the
//! built-in presets.

use std::io::Write;

use log::info;

use crate::commands::command_traits::Command;
use crate::config;
use crate::errors::RegionResult;
use crate::geometry::BoundingRegion;

/// Command for describing a region
pub struct DescribeCommand {
    /// Region to describe; `None` lists the presets instead
    region: Option<BoundingRegion>,
}

impl DescribeCommand {
    /// Create a command that describes `region`
    pub fn new(region: BoundingRegion) -> Self {
        DescribeCommand { region: Some(region) }
    }

    /// Create a command that lists the built-in presets
    pub fn presets() -> Self {
        DescribeCommand { region: None }
    }

    fn describe_region(region: &BoundingRegion, out: &mut dyn Write) -> RegionResult<()> {
        writeln!(out, "Dimensions: {}", region.dimensions())?;
        writeln!(out, "Corner A:   {}", region.corner_a())?;
        writeln!(out, "Corner B:   {}", region.corner_b())?;
        writeln!(out, "Extent:     {:?}", region.extent())?;
        writeln!(out, "Min:        {}", region.min_corner())?;
        writeln!(out, "Max:        {}", region.max_corner())?;
        writeln!(out, "Center:     {}", region.center())?;
        Ok(())
    }
}

impl Command for DescribeCommand {
    fn execute(&self, out: &mut dyn Write) -> RegionResult<()> {
        match &self.region {
            Some(region) => {
                info!("Describing region {}", region);
                Self::describe_region(region, out)
            }
            None => {
                let presets = config::presets();
                info!("Listing {} built-in presets", presets.len());
                for name in presets.names() {
                    let region = presets.get(name)?;
                    writeln!(out, "{:<12} {}", name, region)?;
                }
                Ok(())
            }
        }
    }
}
