//! Axis-aligned bounding regions in any number of dimensions.
//!
//! A [`BoundingRegion`] is built from two opposite corners given in any
//! order and answers boundary-inclusive containment queries.

pub mod errors;
pub mod geometry;
pub mod config;
pub mod utils;
pub mod cli;
pub mod commands;
#[cfg(test)]
mod tests;

pub use crate::errors::{RegionError, RegionResult};
pub use crate::config::RegionSet;
pub use geometry::{BoundingRegion, Point};
