//! Geometry for axis-aligned containment
//!
//! This module provides the n-dimensional point type and the bounding
//! region built from two of its corners.

mod point;
mod region;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Point;
pub use self::region::BoundingRegion;
