//! Batch point classification command
//!
//! Reads a file with one point per line and classifies each point against a
//! region. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, error, info};

use crate::commands::command_traits::Command;
use crate::errors::{RegionError, RegionResult};
use crate::geometry::{BoundingRegion, Point};
use crate::utils::progress::ProgressTracker;

/// Inside/outside tally from a classification run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassifySummary {
    /// Points inside the region
    pub inside: usize,
    /// Points outside the region
    pub outside: usize,
}

/// Command for classifying a file of points
pub struct ClassifyCommand {
    /// Region to test against
    region: BoundingRegion,
    /// Path to the points file
    points_file: PathBuf,
    /// Only report points that are inside
    inside_only: bool,
    /// Draw a progress bar while classifying
    show_progress: bool,
}

impl ClassifyCommand {
    /// Create a new classify command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `region` - Region resolved from the arguments
    ///
    /// # Returns
    /// A new ClassifyCommand instance or an error
    pub fn new(args: &ArgMatches, region: BoundingRegion) -> RegionResult<Self> {
        let points_file = args
            .get_one::<String>("points-file")
            .ok_or_else(|| RegionError::GenericError("Missing points file".to_string()))?;

        Ok(ClassifyCommand {
            region,
            points_file: PathBuf::from(points_file),
            inside_only: args.get_flag("inside-only"),
            show_progress: !args.get_flag("quiet"),
        })
    }

    /// Create a classify command without a progress bar
    pub fn from_path<P: AsRef<Path>>(region: BoundingRegion, points_file: P, inside_only: bool) -> Self {
        ClassifyCommand {
            region,
            points_file: points_file.as_ref().to_path_buf(),
            inside_only,
            show_progress: false,
        }
    }

    /// Parse the points file into `(line number, point)` pairs
    fn read_points(&self) -> RegionResult<Vec<(usize, Point)>> {
        let contents = fs::read_to_string(&self.points_file)?;

        contents
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(line_no, line)| {
                Point::from_string(line)
                    .map(|point| (line_no, point))
                    .map_err(|e| RegionError::ParseError(format!("line {}: {}", line_no, e)))
            })
            .collect()
    }

    /// Classify every point in the file, writing one line per reported point
    pub fn classify(&self, out: &mut dyn Write) -> RegionResult<ClassifySummary> {
        let points = self.read_points()?;
        info!("Classifying {} points from {}", points.len(), self.points_file.display());

        let progress = if self.show_progress {
            ProgressTracker::new(points.len() as u64, "Classifying points")
        } else {
            ProgressTracker::hidden(points.len() as u64)
        };

        let mut summary = ClassifySummary::default();
        for (line_no, point) in &points {
            let inside = match self.region.contains(point) {
                Ok(inside) => inside,
                Err(e) => {
                    error!("line {}: {}", line_no, e);
                    return Err(e);
                }
            };
            debug!("line {}: {} inside={}", line_no, point, inside);

            if inside {
                summary.inside += 1;
            } else {
                summary.outside += 1;
            }

            if inside || !self.inside_only {
                let line = format!("{}: {}", point, if inside { "inside" } else { "outside" });
                progress.suspend(|| writeln!(out, "{}", line))?;
            }
            progress.increment(1);
        }
        progress.finish();

        Ok(summary)
    }
}

impl Command for ClassifyCommand {
    fn execute(&self, out: &mut dyn Write) -> RegionResult<()> {
        let summary = self.classify(out)?;
        writeln!(out, "{} inside, {} outside", summary.inside, summary.outside)?;
        info!("Classification complete: {} inside, {} outside", summary.inside, summary.outside);
        Ok(())
    }
}
