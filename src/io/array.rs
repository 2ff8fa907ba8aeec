//! # Custom Arrays
//!
//! Arrays are entered as comma separated numbers such as `5, 3, 8, 1`.
//! Whitespace around entries and empty entries (`1,,2` or a trailing comma) are ignored.

use crate::{AlgoscopeError, AlgoscopeResult};

/// Message shown for any text that does not describe a list of numbers
pub const INVALID_ARRAY_MESSAGE: &str = "Invalid input! Please enter a valid list of numbers.";

/// Parses a comma separated list of numbers.
///
/// # Errors
/// Returns [`AlgoscopeError::InvalidInput`] if an entry is not a finite number or if no entry
/// remains after dropping empty ones.
pub fn parse_custom_array(text: &str) -> AlgoscopeResult<Vec<f64>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            _ => Err(AlgoscopeError::invalid_input(INVALID_ARRAY_MESSAGE)),
        })
        .collect::<AlgoscopeResult<Vec<f64>>>()?;

    if values.is_empty() {
        return Err(AlgoscopeError::invalid_input(INVALID_ARRAY_MESSAGE));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_skips_empty_entries() {
        assert_eq!(
            parse_custom_array(" 5, 3 ,8,, 1.5,").unwrap(),
            vec![5.0, 3.0, 8.0, 1.5]
        );
        assert_eq!(parse_custom_array("-2").unwrap(), vec![-2.0]);
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", " , ,", "1, two, 3", "1;2", "NaN", "inf, 1"] {
            let err = parse_custom_array(text).unwrap_err();
            assert!(matches!(err, AlgoscopeError::InvalidInput(_)), "{text:?}");
            assert!(err.to_string().contains(INVALID_ARRAY_MESSAGE));
        }
    }
}
