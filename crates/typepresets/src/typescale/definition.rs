//! Typescale definition types.
//!
//! A typescale pairs a font size with a line height, optionally varying per
//! breakpoint. Each value is either:
//!
//! - **Size**: a single font size; the line height is derived from it
//! - **Pair**: an explicit `(font-size, line-height)` pair
//!
//! # YAML Formats
//!
//! ```yaml
//! # Size - derived line height
//! 1: 12px
//!
//! # Pair - explicit line height
//! 2: [14px, 20px]
//!
//! # Responsive - base value plus per-breakpoint overrides
//! 3:
//!   base: 12px
//!   md: 14px
//!   xl: [16px, 32px]
//! ```

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::length::Length;

/// Value added to a font size to derive its line height when none is given.
pub const DEFAULT_LINE_HEIGHT_SCALE: f64 = 8.0;

/// Derives a line height from a font size.
///
/// The line height is the font size plus `scale`, in the font size's unit:
/// `12px` becomes `20px` with the default scale.
pub fn derive_line_height(font_size: Length, scale: f64) -> Length {
    font_size.offset(scale)
}

/// A font-size / line-height pair with both values concrete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metrics {
    pub font_size: Length,
    pub line_height: Length,
}

/// A typescale value as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleValue {
    /// Font size only; line height is derived.
    Size(Length),
    /// Explicit font size and line height.
    Pair {
        font_size: Length,
        line_height: Length,
    },
}

impl ScaleValue {
    /// Normalizes this value into concrete metrics.
    pub fn metrics(&self, line_height_scale: f64) -> Metrics {
        match *self {
            ScaleValue::Size(font_size) => Metrics {
                font_size,
                line_height: derive_line_height(font_size, line_height_scale),
            },
            ScaleValue::Pair {
                font_size,
                line_height,
            } => Metrics {
                font_size,
                line_height,
            },
        }
    }

    /// Parses a size (scalar) or pair (two-element sequence).
    pub fn parse_value(value: &serde_yaml::Value, context: &str) -> Result<Self> {
        let length = |v: &serde_yaml::Value| {
            Length::parse_value(v).map_err(|message| ConfigError::InvalidLength {
                context: context.to_string(),
                message,
            })
        };

        match value {
            serde_yaml::Value::Sequence(seq) => match seq.as_slice() {
                [font_size, line_height] => Ok(ScaleValue::Pair {
                    font_size: length(font_size)?,
                    line_height: length(line_height)?,
                }),
                _ => Err(ConfigError::invalid(
                    context,
                    format!(
                        "expected [font-size, line-height], got {} values",
                        seq.len()
                    ),
                )),
            },
            serde_yaml::Value::String(s) if s.split_whitespace().count() == 2 => {
                // "14px 20px" shorthand for a pair
                let mut parts = s.split_whitespace();
                let mut next = || {
                    let part = parts.next().unwrap_or_default();
                    Length::parse_string(part).map_err(|message| ConfigError::InvalidLength {
                        context: context.to_string(),
                        message,
                    })
                };
                Ok(ScaleValue::Pair {
                    font_size: next()?,
                    line_height: next()?,
                })
            }
            other => Ok(ScaleValue::Size(length(other)?)),
        }
    }
}

impl From<Length> for ScaleValue {
    fn from(font_size: Length) -> Self {
        ScaleValue::Size(font_size)
    }
}

impl From<(Length, Length)> for ScaleValue {
    fn from((font_size, line_height): (Length, Length)) -> Self {
        ScaleValue::Pair {
            font_size,
            line_height,
        }
    }
}

/// A typescale as declared: a base value plus sparse breakpoint overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct TypescaleDefinition {
    /// Identifier used in custom property names (`--typescale-{id}-*`).
    pub id: String,
    /// Value at the base breakpoint. Required; `None` fails resolution.
    pub base: Option<ScaleValue>,
    /// Overrides keyed by breakpoint name, in declaration order.
    pub overrides: Vec<(String, ScaleValue)>,
}

impl TypescaleDefinition {
    /// Creates a typescale with a base value and no overrides.
    pub fn new(id: impl Into<String>, base: impl Into<ScaleValue>) -> Self {
        Self {
            id: id.into(),
            base: Some(base.into()),
            overrides: Vec::new(),
        }
    }

    /// Adds an override taking effect at `breakpoint`.
    pub fn at(mut self, breakpoint: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.overrides.push((breakpoint.into(), value.into()));
        self
    }

    /// Parses a typescale from its YAML value.
    ///
    /// - Scalar or sequence → base value only
    /// - Mapping → `base` key plus breakpoint-name overrides
    pub fn parse(id: &str, value: &serde_yaml::Value) -> Result<Self> {
        let context = format!("typescales.{}", id);

        let serde_yaml::Value::Mapping(map) = value else {
            return Ok(Self {
                id: id.to_string(),
                base: Some(ScaleValue::parse_value(value, &context)?),
                overrides: Vec::new(),
            });
        };

        let mut base = None;
        let mut overrides = Vec::new();
        for (key, entry) in map {
            let breakpoint = key.as_str().ok_or_else(|| {
                ConfigError::invalid(
                    &context,
                    format!("breakpoint name must be a string, got {:?}", key),
                )
            })?;
            let entry_context = format!("{}.{}", context, breakpoint);
            let parsed = ScaleValue::parse_value(entry, &entry_context)?;
            if breakpoint == "base" {
                base = Some(parsed);
            } else {
                overrides.push((breakpoint.to_string(), parsed));
            }
        }

        Ok(Self {
            id: id.to_string(),
            base,
            overrides,
        })
    }
}
