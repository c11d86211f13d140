//! Type preset definitions.
//!
//! A preset bundles a typescale reference with literal typographic values:
//!
//! ```yaml
//! presets:
//!   body:
//!     scale: 1
//!   caption:
//!     scale: 1
//!     family: '"Inter", sans-serif'
//!     weight: 600
//!     transform: uppercase
//!     spacing: 0.5
//!     important: true
//! ```
//!
//! Only `scale` is required. Values are kept as written and emitted verbatim.

use crate::error::{ConfigError, Result};
use crate::util::scalar_text;

const PRESET_KEYS: &[&str] = &[
    "scale",
    "family",
    "weight",
    "transform",
    "spacing",
    "important",
];

/// A named bundle of typographic properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDefinition {
    pub id: String,
    /// Id of the typescale providing font-size and line-height.
    pub scale: String,
    pub family: Option<String>,
    pub weight: Option<String>,
    pub transform: Option<String>,
    pub spacing: Option<String>,
    /// Forces `!important` on every use of this preset.
    pub important: bool,
}

impl PresetDefinition {
    /// Creates a preset referencing a typescale, with every other value defaulted.
    pub fn new(id: impl Into<String>, scale: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scale: scale.into(),
            family: None,
            weight: None,
            transform: None,
            spacing: None,
            important: false,
        }
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Parses a preset from its YAML mapping.
    pub fn parse(id: &str, value: &serde_yaml::Value) -> Result<Self> {
        let context = format!("presets.{}", id);
        let map = value.as_mapping().ok_or_else(|| {
            ConfigError::invalid(&context, format!("expected a mapping, got {:?}", value))
        })?;

        for key in map.keys() {
            let known = key.as_str().is_some_and(|k| PRESET_KEYS.contains(&k));
            if !known {
                return Err(ConfigError::invalid(
                    &context,
                    format!("unknown key {:?}", key),
                ));
            }
        }

        let text = |key: &str| -> Result<Option<String>> {
            match map.get(key) {
                None | Some(serde_yaml::Value::Null) => Ok(None),
                Some(v) => scalar_text(v).map(Some).ok_or_else(|| {
                    ConfigError::invalid(
                        format!("{}.{}", context, key),
                        format!("expected a string or number, got {:?}", v),
                    )
                }),
            }
        };

        let scale = text("scale")?
            .ok_or_else(|| ConfigError::invalid(&context, "missing required key 'scale'"))?;

        let important = match map.get("important") {
            None | Some(serde_yaml::Value::Null) => false,
            Some(serde_yaml::Value::Bool(flag)) => *flag,
            Some(other) => {
                return Err(ConfigError::invalid(
                    format!("{}.important", context),
                    format!("expected true or false, got {:?}", other),
                ))
            }
        };

        Ok(Self {
            id: id.to_string(),
            scale,
            family: text("family")?,
            weight: text("weight")?,
            transform: text("transform")?,
            spacing: text("spacing")?,
            important,
        })
    }
}
