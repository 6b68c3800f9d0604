//! Named region definitions
//!
//! Regions can be loaded from a TOML file with one table per region:
//!
//! ```toml
//! [regions.unit_cube]
//! corner_a = [0.0, 0.0, 0.0]
//! corner_b = [1.0, 1.0, 1.0]
//! ```
//!
//! A set of built-in presets is compiled into the crate from `presets.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};

use crate::errors::{RegionError, RegionResult};
use crate::geometry::{BoundingRegion, Point};

lazy_static! {
    // Parse the embedded presets on first use
    static ref PRESETS: RegionSet = {
        let content = include_str!("../presets.toml");
        RegionSet::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in region presets: {}", e);
            RegionSet::default()
        })
    };
}

/// Built-in region presets
pub fn presets() -> &'static RegionSet {
    &PRESETS
}

/// Look up a built-in preset by name
pub fn preset(name: &str) -> RegionResult<&'static BoundingRegion> {
    PRESETS.get(name)
}

/// Collection of named bounding regions
///
/// Regions in one set may span different numbers of dimensions.
#[derive(Debug, Default, Clone)]
pub struct RegionSet {
    regions: BTreeMap<String, BoundingRegion>,
}

impl RegionSet {
    /// Parse region definitions from a TOML string
    pub fn from_str(content: &str) -> RegionResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RegionError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut set = RegionSet::default();

        let table = match toml_value.get("regions") {
            Some(value) => value
                .as_table()
                .ok_or_else(|| RegionError::ConfigError("'regions' must be a table".to_string()))?,
            None => return Ok(set),
        };

        for (name, definition) in table {
            let corner_a = Self::parse_corner(name, definition, "corner_a")?;
            let corner_b = Self::parse_corner(name, definition, "corner_b")?;
            let region = BoundingRegion::new(corner_a, corner_b)?;
            debug!("Loaded region '{}': {}", name, region);
            set.regions.insert(name.clone(), region);
        }

        Ok(set)
    }

    /// Load region definitions from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> RegionResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let set = Self::from_str(&contents)?;
        info!("Loaded {} regions from {}", set.len(), path.display());
        Ok(set)
    }

    /// Helper to read one corner array of a region table
    fn parse_corner(name: &str, definition: &toml::Value, key: &str) -> RegionResult<Point> {
        let values = definition
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| RegionError::ConfigError(format!("Region '{}' is missing array '{}'", name, key)))?;

        let coords = values
            .iter()
            .map(|v| match v {
                toml::Value::Float(f) => Ok(*f),
                toml::Value::Integer(i) => Ok(*i as f64),
                other => Err(RegionError::ConfigError(format!(
                    "Region '{}' has non-numeric {} value: {}",
                    name, key, other
                ))),
            })
            .collect::<RegionResult<Vec<f64>>>()?;

        Point::new(coords)
    }

    /// Get a region by name
    pub fn get(&self, name: &str) -> RegionResult<&BoundingRegion> {
        self.regions
            .get(name)
            .ok_or_else(|| RegionError::RegionNotFound(name.to_string()))
    }

    /// Region names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of regions in the set
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the set holds no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Names of every region that contains `point`
    ///
    /// Regions with a different dimensionality than the point are skipped.
    pub fn containing(&self, point: &Point) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|(_, region)| region.dimensions() == point.dimensions())
            .filter(|(_, region)| matches!(region.contains(point), Ok(true)))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
