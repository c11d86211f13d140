//! CSS length values for font sizes, line heights and breakpoint widths.
//!
//! Supports the formats a configuration file is likely to carry:
//!
//! - Pixel strings: `"12px"`
//! - Relative units: `"1.5rem"`, `"2em"`, `"150%"`
//! - Bare numbers: `12` or `"12"` (interpreted as pixels)
//! - Zero: `0` (rendered unitless)
//!
//! # Example
//!
//! ```rust
//! use typepresets::{Length, Unit};
//!
//! let size = Length::parse_string("14px").unwrap();
//! assert_eq!(size, Length::px(14.0));
//! assert_eq!(size.to_string(), "14px");
//!
//! let rem = Length::parse_value(&serde_yaml::Value::String(".875rem".into())).unwrap();
//! assert_eq!(rem.unit(), Unit::Rem);
//! assert_eq!(rem.to_string(), "0.875rem");
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Unit suffix of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// No unit. Only produced for zero, which CSS accepts unitless.
    None,
    Px,
    Rem,
    Em,
    Percent,
}

impl Unit {
    /// Returns the CSS suffix for this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
        }
    }

    fn split(s: &str) -> (&str, Unit) {
        // "rem" must be checked before "em"
        for unit in [Unit::Px, Unit::Rem, Unit::Em, Unit::Percent] {
            if let Some(number) = s.strip_suffix(unit.suffix()) {
                return (number, unit);
            }
        }
        (s, Unit::Px)
    }
}

/// A numeric CSS length with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: Unit,
}

impl Length {
    /// Creates a length with an explicit unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a pixel length.
    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// The unitless zero width used by the base breakpoint.
    pub fn zero() -> Self {
        Self::new(0.0, Unit::None)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns a length with `amount` added, keeping this length's unit.
    pub fn offset(&self, amount: f64) -> Self {
        Self::new(self.value + amount, self.unit)
    }

    /// Orders lengths by magnitude.
    ///
    /// Units are not converted; breakpoints are expected to share one unit.
    pub fn cmp_magnitude(&self, other: &Length) -> Ordering {
        self.value.total_cmp(&other.value)
    }

    /// Parses a length from a YAML value.
    ///
    /// Supports:
    /// - Strings: `"12px"`, `"1.5rem"`, `"0"`
    /// - Numbers: pixel values, with `0` kept unitless
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let number = n
                    .as_f64()
                    .ok_or_else(|| format!("Invalid length: {}", n))?;
                if !number.is_finite() {
                    return Err(format!("Invalid length '{}': not a finite number", n));
                }
                Ok(Self::from_number(number))
            }
            _ => Err(format!("Invalid length value: {:?}", value)),
        }
    }

    /// Parses a length from a string such as `"12px"` or `"0.875rem"`.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty length".to_string());
        }

        let (number, unit) = Unit::split(s);
        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid length '{}': expected a number with a unit", s))?;

        if !value.is_finite() {
            return Err(format!("Invalid length '{}': not a finite number", s));
        }

        if s == number && value == 0.0 {
            return Ok(Self::zero());
        }
        Ok(Self::new(value, unit))
    }

    fn from_number(value: f64) -> Self {
        if value == 0.0 {
            Self::zero()
        } else {
            Self::px(value)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Formats a number the way CSS is usually written: no trailing zeros, a
/// leading zero before the decimal point, at most four decimal places.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_px() {
        assert_eq!(Length::parse_string("12px").unwrap(), Length::px(12.0));
    }

    #[test]
    fn test_parse_rem_not_confused_with_em() {
        let len = Length::parse_string("1.5rem").unwrap();
        assert_eq!(len.unit(), Unit::Rem);
        assert_eq!(len.value(), 1.5);

        let len = Length::parse_string("2em").unwrap();
        assert_eq!(len.unit(), Unit::Em);
    }

    #[test]
    fn test_parse_percent() {
        let len = Length::parse_string("150%").unwrap();
        assert_eq!(len.unit(), Unit::Percent);
        assert_eq!(len.to_string(), "150%");
    }

    #[test]
    fn test_parse_bare_number_string_is_px() {
        assert_eq!(Length::parse_string("600").unwrap(), Length::px(600.0));
    }

    #[test]
    fn test_parse_zero_is_unitless() {
        assert_eq!(Length::parse_string("0").unwrap(), Length::zero());
        assert_eq!(
            Length::parse_value(&serde_yaml::Value::Number(0.into())).unwrap(),
            Length::zero()
        );
    }

    #[test]
    fn test_parse_yaml_number_is_px() {
        let len = Length::parse_value(&serde_yaml::Value::Number(900.into())).unwrap();
        assert_eq!(len, Length::px(900.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Length::parse_string("").is_err());
        assert!(Length::parse_string("large").is_err());
        assert!(Length::parse_string("12pt").is_err());
        assert!(Length::parse_value(&serde_yaml::Value::Bool(true)).is_err());
        assert!(Length::parse_value(&serde_yaml::Value::Number(f64::INFINITY.into())).is_err());
        assert!(Length::parse_value(&serde_yaml::Value::Number(f64::NAN.into())).is_err());
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.875), "0.875");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_offset_keeps_unit() {
        let len = Length::parse_string("1rem").unwrap().offset(0.5);
        assert_eq!(len.to_string(), "1.5rem");
    }
}
