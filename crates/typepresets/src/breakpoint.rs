//! Breakpoint registry: the ordered set of viewport widths.
//!
//! The registry always starts with an implicit `base` breakpoint of width
//! zero, followed by the declared breakpoints in ascending width. Widths that
//! tie keep their declaration order.
//!
//! ```rust
//! use typepresets::{BreakpointRegistry, Length};
//!
//! let registry = BreakpointRegistry::from_declared(vec![
//!     ("md".to_string(), Length::px(900.0)),
//!     ("sm".to_string(), Length::px(600.0)),
//! ])
//! .unwrap();
//!
//! let names: Vec<&str> = registry.iter().map(|bp| bp.name()).collect();
//! assert_eq!(names, ["base", "sm", "md"]);
//! assert!(registry.resolve("lg").is_none());
//! ```

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::length::Length;

/// Name of the implicit zero-width breakpoint.
pub const BASE_BREAKPOINT: &str = "base";

/// Breakpoints used when a configuration declares none.
pub const DEFAULT_BREAKPOINTS: &[(&str, f64)] =
    &[("sm", 600.0), ("md", 900.0), ("lg", 1200.0), ("xl", 1800.0)];

/// A named minimum viewport width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoint {
    name: String,
    #[serde(rename = "min-width")]
    min_width: Length,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: Length) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }

    /// The implicit base breakpoint.
    pub fn base() -> Self {
        Self::new(BASE_BREAKPOINT, Length::zero())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_width(&self) -> Length {
        self.min_width
    }

    pub fn is_base(&self) -> bool {
        self.name == BASE_BREAKPOINT
    }
}

/// Ordered breakpoints, base first.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointRegistry {
    entries: Vec<Breakpoint>,
}

impl BreakpointRegistry {
    /// Builds a registry from breakpoints in declaration order.
    ///
    /// A declared `base` entry replaces the implicit one and must have a zero
    /// width.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AmbiguousBreakpointOrder`] if a name appears twice
    /// - [`ConfigError::InvalidDefinition`] if `base` is given a non-zero width
    /// - [`ConfigError::InvalidLength`] if a width is negative
    pub fn from_declared(declared: Vec<(String, Length)>) -> Result<Self> {
        let mut entries = vec![Breakpoint::base()];

        for (name, min_width) in declared {
            if name == BASE_BREAKPOINT {
                if min_width.value() != 0.0 {
                    return Err(ConfigError::invalid(
                        format!("breakpoints.{}", name),
                        format!("the base breakpoint must have width 0, got {}", min_width),
                    ));
                }
                continue;
            }

            if min_width.value() < 0.0 {
                return Err(ConfigError::InvalidLength {
                    context: format!("breakpoints.{}", name),
                    message: format!("width must not be negative, got {}", min_width),
                });
            }

            if let Some(existing) = entries.iter().find(|bp| bp.name == name) {
                return Err(ConfigError::AmbiguousBreakpointOrder {
                    name,
                    first: existing.min_width.to_string(),
                    second: min_width.to_string(),
                });
            }
            entries.push(Breakpoint::new(name, min_width));
        }

        // Stable sort: equal widths keep declaration order, base stays first.
        entries[1..].sort_by(|a, b| a.min_width.cmp_magnitude(&b.min_width));

        tracing::debug!(count = entries.len(), "registered breakpoints");
        Ok(Self { entries })
    }

    /// The `sm`/`md`/`lg`/`xl` registry used when nothing is configured.
    pub fn defaults() -> Self {
        let entries = std::iter::once(Breakpoint::base())
            .chain(
                DEFAULT_BREAKPOINTS
                    .iter()
                    .map(|(name, width)| Breakpoint::new(*name, Length::px(*width))),
            )
            .collect();
        Self { entries }
    }

    /// Looks up a breakpoint by name.
    ///
    /// `None` means the name is not registered; typescale resolution reports
    /// it as [`ConfigError::UnknownBreakpoint`].
    pub fn resolve(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|bp| bp.name == name)
    }

    /// Returns the position of a breakpoint in ascending order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|bp| bp.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the base breakpoint is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BreakpointRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}
