//! Failure rate value object
//!
//! Represents a validated injection probability in `[0.0, 1.0]`.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::FailureRate;
//!
//! let rate = FailureRate::new(0.3).expect("valid rate");
//! assert!((rate.value() - 0.3).abs() < f64::EPSILON);
//!
//! // The host hands rates over as strings
//! let parsed: FailureRate = "0.3".parse().expect("valid rate");
//! assert_eq!(parsed, rate);
//!
//! assert!(FailureRate::new(1.5).is_err());
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Probability that a matched request receives an injected failure
///
/// Always within `[0.0, 1.0]`; out-of-range or NaN values are rejected at
/// construction rather than clamped, so a misconfigured rate never silently
/// becomes 0% or 100%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct FailureRate(f64);

impl FailureRate {
    /// A rate that never injects
    pub const NEVER: Self = Self(0.0);

    /// A rate that always injects
    pub const ALWAYS: Self = Self(1.0);

    /// Create a new validated failure rate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFailureRate` if the value is NaN or
    /// outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidFailureRate(format!(
                "{value} is out of range (must be 0.0 to 1.0)"
            )));
        }
        Ok(Self(value))
    }

    /// The rate as a plain float
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Whether this rate can never fire
    #[must_use]
    pub fn is_never(&self) -> bool {
        self.0 <= 0.0
    }

    /// Whether this rate always fires
    #[must_use]
    pub fn is_always(&self) -> bool {
        self.0 >= 1.0
    }
}

impl fmt::Display for FailureRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FailureRate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidFailureRate(format!("'{s}' is not a number")))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_are_valid() {
        assert!(FailureRate::new(0.0).is_ok());
        assert!(FailureRate::new(1.0).is_ok());
        assert!(FailureRate::new(0.5).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(FailureRate::new(-0.1).is_err());
        assert!(FailureRate::new(1.1).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(FailureRate::new(f64::NAN).is_err());
    }

    #[test]
    fn parses_string_encoded_option() {
        let rate: FailureRate = "0.3".parse().unwrap();
        assert!((rate.value() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        let rate: FailureRate = " 0.5 ".parse().unwrap();
        assert!((rate.value() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_string_is_rejected() {
        let result = "lots".parse::<FailureRate>();
        assert!(matches!(result, Err(DomainError::InvalidFailureRate(_))));
    }

    #[test]
    fn out_of_range_string_is_rejected() {
        assert!("2.0".parse::<FailureRate>().is_err());
        assert!("-1".parse::<FailureRate>().is_err());
    }

    #[test]
    fn never_and_always_constants() {
        assert!(FailureRate::NEVER.is_never());
        assert!(!FailureRate::NEVER.is_always());
        assert!(FailureRate::ALWAYS.is_always());
        assert!(!FailureRate::ALWAYS.is_never());
    }

    #[test]
    fn display_renders_plain_float() {
        assert_eq!(FailureRate::ALWAYS.to_string(), "1");
        assert_eq!("0.25".parse::<FailureRate>().unwrap().to_string(), "0.25");
    }
}
