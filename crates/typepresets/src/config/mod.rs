//! Declarative configuration.
//!
//! A [`TypeConfig`] carries everything generation needs: breakpoints,
//! typescales, presets, defaults and output options. It can be built in code
//! or loaded from YAML.
//!
//! # YAML Schema
//!
//! ```yaml
//! breakpoints:            # optional, replaces sm/md/lg/xl
//!   sm: 600px
//!   md: 900px
//!
//! typescales:             # required
//!   1: 12px               # derived line height
//!   2: [14px, 20px]       # explicit line height
//!   3:
//!     base: 12px
//!     md: 14px            # in effect from md upward
//!
//! presets:
//!   body: { scale: 1, family: 'Georgia, serif', weight: 400 }
//!
//! default-family: 'Arial, sans-serif'
//! line-height-scale: 8
//! scope: root             # root | global
//! media-type: screen
//!
//! rules:                  # rendered after the custom properties
//!   - { selector: p, typescale: 1 }
//!   - { selector: .title, preset: body, important: true }
//!
//! utilities:
//!   namespace: app
//! ```
//!
//! # Example
//!
//! ```rust
//! use typepresets::{Length, PresetDefinition, TypeConfig, TypescaleDefinition};
//!
//! let from_yaml = TypeConfig::from_yaml(r#"
//! typescales:
//!   1: { base: 12px, md: 14px }
//! presets:
//!   body: { scale: 1 }
//! "#).unwrap();
//!
//! let in_code = TypeConfig::new()
//!     .typescale(TypescaleDefinition::new("1", Length::px(12.0)).at("md", Length::px(14.0)))
//!     .preset(PresetDefinition::new("body", "1"));
//!
//! assert_eq!(from_yaml, in_code);
//! ```

mod parser;

use std::path::Path;

use crate::css::{ScopeSelector, DEFAULT_MEDIA_TYPE};
use crate::error::{ConfigError, Result};
use crate::length::Length;
use crate::preset::PresetDefinition;
use crate::typescale::{TypescaleDefinition, DEFAULT_LINE_HEIGHT_SCALE};

pub use parser::parse_config;

/// What a configured rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    Typescale(String),
    Preset(String),
}

/// A rule rendered after the custom property blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub selector: String,
    pub include: Include,
    pub important: bool,
}

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeConfig {
    /// Declared breakpoints in declaration order; `None` uses the defaults.
    pub breakpoints: Option<Vec<(String, Length)>>,
    pub typescales: Vec<TypescaleDefinition>,
    pub presets: Vec<PresetDefinition>,
    pub default_family: Option<String>,
    pub line_height_scale: f64,
    pub scope: ScopeSelector,
    pub media_type: String,
    pub rules: Vec<RuleSpec>,
    /// Utility class namespace; `None` emits no utility classes.
    pub utilities: Option<String>,
}

impl TypeConfig {
    /// Creates an empty configuration with default options.
    pub fn new() -> Self {
        Self {
            breakpoints: None,
            typescales: Vec::new(),
            presets: Vec::new(),
            default_family: None,
            line_height_scale: DEFAULT_LINE_HEIGHT_SCALE,
            scope: ScopeSelector::default(),
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            rules: Vec::new(),
            utilities: None,
        }
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_config(yaml)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read, or any
    /// parse error with the path attached.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        tracing::debug!(path = %path.display(), "loading configuration");
        parse_config(&content).map_err(|e| e.with_path(path.to_path_buf()))
    }

    /// Declares a breakpoint. The first call replaces the default set.
    pub fn breakpoint(mut self, name: impl Into<String>, min_width: Length) -> Self {
        self.breakpoints
            .get_or_insert_with(Vec::new)
            .push((name.into(), min_width));
        self
    }

    /// Adds a typescale, replacing any typescale with the same id.
    pub fn typescale(mut self, definition: TypescaleDefinition) -> Self {
        match self.typescales.iter_mut().find(|t| t.id == definition.id) {
            Some(existing) => *existing = definition,
            None => self.typescales.push(definition),
        }
        self
    }

    /// Adds a preset, replacing any preset with the same id.
    pub fn preset(mut self, definition: PresetDefinition) -> Self {
        match self.presets.iter_mut().find(|p| p.id == definition.id) {
            Some(existing) => *existing = definition,
            None => self.presets.push(definition),
        }
        self
    }

    pub fn default_family(mut self, family: impl Into<String>) -> Self {
        self.default_family = Some(family.into());
        self
    }

    pub fn line_height_scale(mut self, scale: f64) -> Self {
        self.line_height_scale = scale;
        self
    }

    pub fn scope(mut self, scope: ScopeSelector) -> Self {
        self.scope = scope;
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Appends a rule applying a typescale or preset to `selector`.
    pub fn rule(mut self, selector: impl Into<String>, include: Include, important: bool) -> Self {
        self.rules.push(RuleSpec {
            selector: selector.into(),
            include,
            important,
        });
        self
    }

    /// Enables utility classes under `namespace` (empty for none).
    pub fn utilities(mut self, namespace: impl Into<String>) -> Self {
        self.utilities = Some(namespace.into());
        self
    }
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self::new()
    }
}
