//! String utility functions
//!
//! Utilities for turning coordinate text into numbers.

use crate::errors::{RegionError, RegionResult};

/// Parse a comma-separated list of coordinates
///
/// Accepts `"1,2,3"`, `"(1, 2, 3)"` and `"[1, 2, 3]"`. Every component must
/// parse as `f64`; `inf`, `-inf` and `NaN` are accepted as Rust spells them.
/// An empty list yields an empty vector.
pub fn parse_coordinates(text: &str) -> RegionResult<Vec<f64>> {
    let trimmed = strip_brackets(text.trim());
    if trimmed.trim().is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(i, part)| {
            let part = part.trim();
            part.parse::<f64>().map_err(|_| {
                RegionError::ParseError(format!("Invalid coordinate {} '{}' in '{}'", i, part, text.trim()))
            })
        })
        .collect()
}

/// Strips one matching pair of `()` or `[]` around the text
fn strip_brackets(text: &str) -> &str {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = text.strip_prefix(open).and_then(|t| t.strip_suffix(close)) {
            return inner;
        }
    }
    text
}
