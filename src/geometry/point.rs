//! Point structure for representing n-dimensional coordinates

use std::fmt;

use crate::errors::{RegionError, RegionResult};
use crate::utils::string_utils::parse_coordinates;

/// A point with one or more `f64` coordinates
///
/// The dimensionality is the number of coordinates and is fixed once the
/// point is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a new point from its coordinates
    ///
    /// # Arguments
    /// * `coords` - One coordinate per axis
    ///
    /// # Returns
    /// The point, or `RegionError::EmptyPoint` if `coords` is empty
    pub fn new(coords: Vec<f64>) -> RegionResult<Self> {
        if coords.is_empty() {
            return Err(RegionError::EmptyPoint);
        }
        Ok(Point { coords })
    }

    /// Parse a point from a string (format: "x,y,z,...")
    ///
    /// The list may be wrapped in parentheses or square brackets.
    pub fn from_string(point_str: &str) -> RegionResult<Self> {
        Self::new(parse_coordinates(point_str)?)
    }

    /// Number of axes this point spans
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate on the given axis, if the axis exists
    pub fn component(&self, axis: usize) -> Option<f64> {
        self.coords.get(axis).copied()
    }

    /// All coordinates in axis order
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Build a point from coordinates already known to be non-empty
    pub(crate) fn from_axes(coords: Vec<f64>) -> Self {
        debug_assert!(!coords.is_empty());
        Point { coords }
    }

    /// Fail with `DimensionMismatch` unless this point has `expected` axes
    pub(crate) fn ensure_dimensions(&self, expected: usize) -> RegionResult<()> {
        if self.dimensions() != expected {
            return Err(RegionError::DimensionMismatch {
                expected,
                found: self.dimensions(),
            });
        }
        Ok(())
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    /// Panics when `N == 0`.
    fn from(coords: [f64; N]) -> Self {
        assert!(N > 0, "a point needs at least one coordinate");
        Point { coords: coords.to_vec() }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = RegionError;

    fn try_from(coords: Vec<f64>) -> RegionResult<Self> {
        Point::new(coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
