//! Bounding region structure for axis-aligned containment tests
//!
//! A region is the axis-aligned box spanned by two opposite corners. The
//! corners may be given in any order on any axis: containment is decided
//! against the per-axis minimum and maximum, so swapping them never changes
//! a result.

use std::fmt;

use log::{debug, trace};

use super::point::Point;
use crate::errors::{RegionError, RegionResult};

/// An axis-aligned box in n dimensions defined by two corners
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingRegion {
    /// First corner, kept exactly as given
    corner_a: Point,
    /// Second corner, kept exactly as given
    corner_b: Point,
    /// Absolute size along each axis
    extent: Vec<f64>,
}

impl BoundingRegion {
    /// Create a new bounding region
    ///
    /// # Arguments
    /// * `corner_a` - One corner of the box
    /// * `corner_b` - The opposite corner
    ///
    /// # Returns
    /// The region, or `RegionError::DimensionMismatch` if the corners
    /// have different dimensionalities
    pub fn new(corner_a: Point, corner_b: Point) -> RegionResult<Self> {
        corner_b.ensure_dimensions(corner_a.dimensions())?;

        let extent = corner_a
            .coords()
            .iter()
            .zip(corner_b.coords())
            .map(|(a, b)| (b - a).abs())
            .collect();

        trace!("Created region {} -> {}", corner_a, corner_b);

        Ok(BoundingRegion {
            corner_a,
            corner_b,
            extent,
        })
    }

    /// Parse a region from two corner strings (format: "x,y,...")
    pub fn from_strings(corner_a: &str, corner_b: &str) -> RegionResult<Self> {
        Self::new(Point::from_string(corner_a)?, Point::from_string(corner_b)?)
    }

    /// The first corner as given at construction
    pub fn corner_a(&self) -> &Point {
        &self.corner_a
    }

    /// The second corner as given at construction
    pub fn corner_b(&self) -> &Point {
        &self.corner_b
    }

    /// Absolute size along each axis
    pub fn extent(&self) -> &[f64] {
        &self.extent
    }

    /// Number of axes the region spans
    pub fn dimensions(&self) -> usize {
        self.corner_a.dimensions()
    }

    /// Check if this region contains a point
    ///
    /// Boundaries are inclusive on every face. A NaN coordinate in the point
    /// or in either corner makes the test fail for that axis.
    ///
    /// # Returns
    /// Whether the point is inside, or `RegionError::DimensionMismatch` if
    /// the point does not have the region's dimensionality
    pub fn contains(&self, point: &Point) -> RegionResult<bool> {
        point.ensure_dimensions(self.dimensions())?;

        let inside = self
            .axis_bounds()
            .zip(point.coords())
            .all(|((lo, hi), &p)| lo <= p && p <= hi);

        debug!("Point {} is {} region {}", point, if inside { "inside" } else { "outside" }, self);
        Ok(inside)
    }

    /// Check if this region contains every point in `points`
    ///
    /// Stops at the first point that is outside. A dimensionality error is
    /// reported for the first offending point that is reached.
    pub fn contains_all<'p, I>(&self, points: I) -> RegionResult<bool>
    where
        I: IntoIterator<Item = &'p Point>,
    {
        for point in points {
            if !self.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Corner holding the smallest coordinate on every axis
    pub fn min_corner(&self) -> Point {
        Point::from_axes(self.axis_bounds().map(|(lo, _)| lo).collect())
    }

    /// Corner holding the largest coordinate on every axis
    pub fn max_corner(&self) -> Point {
        Point::from_axes(self.axis_bounds().map(|(_, hi)| hi).collect())
    }

    /// Get the center point of the region
    ///
    /// Each corner is halved before summing so that far-apart finite
    /// corners cannot overflow.
    pub fn center(&self) -> Point {
        Point::from_axes(
            self.corner_a
                .coords()
                .iter()
                .zip(self.corner_b.coords())
                .map(|(a, b)| a / 2.0 + b / 2.0)
                .collect(),
        )
    }

    /// Per-axis `(lo, hi)` pairs, recomputed from the stored corners
    ///
    /// If either corner is NaN on an axis, the NaN ends up in one of the two
    /// bounds so that every comparison against it fails.
    fn axis_bounds(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.corner_a
            .coords()
            .iter()
            .zip(self.corner_b.coords())
            .map(|(&a, &b)| if a <= b { (a, b) } else { (b, a) })
    }
}

impl fmt::Display for BoundingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.corner_a, self.corner_b)
    }
}
