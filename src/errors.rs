//! Custom error types for region processing

use std::fmt;
use std::io;

/// Region-specific error types
#[derive(Debug)]
pub enum RegionError {
    /// I/O error
    IoError(io::Error),
    /// Two points that must share a dimensionality do not
    DimensionMismatch {
        /// Dimensionality established by the region or first corner
        expected: usize,
        /// Dimensionality of the offending point
        found: usize,
    },
    /// A point was built with no coordinates
    EmptyPoint,
    /// Coordinate text could not be parsed
    ParseError(String),
    /// Region file is malformed
    ConfigError(String),
    /// No region or preset with the given name
    RegionNotFound(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::IoError(e) => write!(f, "I/O error: {}", e),
            RegionError::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected {} dimensions, found {}",
                expected, found
            ),
            RegionError::EmptyPoint => write!(f, "Point must have at least one coordinate"),
            RegionError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RegionError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            RegionError::RegionNotFound(name) => write!(f, "Region not found: {}", name),
            RegionError::GenericError(msg) => write!(f, "Region error: {}", msg),
        }
    }
}

impl std::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegionError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegionError {
    fn from(error: io::Error) -> Self {
        RegionError::IoError(error)
    }
}

impl From<String> for RegionError {
    fn from(msg: String) -> Self {
        RegionError::GenericError(msg)
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
