//! Tests for the error types

use std::io;

use crate::errors::RegionError;

#[test]
fn test_dimension_mismatch_message() {
    let err = RegionError::DimensionMismatch { expected: 2, found: 3 };
    assert_eq!(err.to_string(), "Dimension mismatch: expected 2 dimensions, found 3");
}

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
    let err: RegionError = io_err.into();
    assert!(matches!(err, RegionError::IoError(_)));
    assert!(std::error::Error::source(&err).is_some());
}
