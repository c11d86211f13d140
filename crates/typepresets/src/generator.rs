//! Resolved generator and stylesheet assembly.
//!
//! [`TypePresets`] resolves a [`TypeConfig`] once: breakpoints are ordered,
//! every typescale is filled in at every breakpoint, and every preset's
//! typescale reference is checked. An invalid configuration fails here, so no
//! partial stylesheet is ever produced.
//!
//! ```rust
//! use typepresets::{Length, TypeConfig, TypePresets, TypescaleDefinition};
//!
//! let config = TypeConfig::new()
//!     .typescale(TypescaleDefinition::new("1", Length::px(12.0)).at("md", Length::px(14.0)));
//! let presets = TypePresets::new(&config).unwrap();
//!
//! let css = presets
//!     .stylesheet()
//!     .typescale("p", "1", false)
//!     .unwrap()
//!     .render();
//!
//! assert!(css.starts_with("@media screen and (min-width: 0) {\n  :root {\n"));
//! assert!(css.ends_with("p {\n  font-size: var(--typescale-1-font-size);\n  line-height: var(--typescale-1-line-height);\n}\n"));
//! ```

use crate::breakpoint::BreakpointRegistry;
use crate::config::{Include, TypeConfig};
use crate::css::{render_stylesheet, Declaration, MediaBlock, Rule, ScopeSelector};
use crate::error::{ConfigError, Result};
use crate::preset::{
    font_size_property, line_height_property, preset_declarations, typescale_declarations,
    PresetDefinition,
};
use crate::typescale::{resolve_typescale, ResolvedTypescale};

/// A fully resolved configuration, ready to emit CSS.
#[derive(Debug, Clone)]
pub struct TypePresets {
    registry: BreakpointRegistry,
    typescales: Vec<ResolvedTypescale>,
    presets: Vec<PresetDefinition>,
    default_family: Option<String>,
    scope: ScopeSelector,
    media_type: String,
}

impl TypePresets {
    /// Resolves a configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AmbiguousBreakpointOrder`] for a repeated breakpoint name
    /// - [`ConfigError::MissingBaseValue`] for a typescale without a base
    /// - [`ConfigError::UnknownBreakpoint`] for an override at an undeclared breakpoint
    /// - [`ConfigError::UnknownTypescale`] for a preset referencing an undeclared typescale
    pub fn new(config: &TypeConfig) -> Result<Self> {
        let registry = match &config.breakpoints {
            Some(declared) => BreakpointRegistry::from_declared(declared.clone())?,
            None => BreakpointRegistry::defaults(),
        };

        let typescales = config
            .typescales
            .iter()
            .map(|definition| resolve_typescale(definition, &registry, config.line_height_scale))
            .collect::<Result<Vec<_>>>()?;

        for preset in &config.presets {
            if !typescales.iter().any(|t| t.id() == preset.scale) {
                return Err(ConfigError::UnknownTypescale {
                    typescale: preset.scale.clone(),
                    referrer: Some(preset.id.clone()),
                });
            }
        }

        tracing::debug!(
            breakpoints = registry.len(),
            typescales = typescales.len(),
            presets = config.presets.len(),
            "resolved configuration"
        );

        Ok(Self {
            registry,
            typescales,
            presets: config.presets.clone(),
            default_family: config.default_family.clone(),
            scope: config.scope,
            media_type: config.media_type.clone(),
        })
    }

    pub fn breakpoints(&self) -> &BreakpointRegistry {
        &self.registry
    }

    /// Resolved typescales in declaration order.
    pub fn typescales(&self) -> &[ResolvedTypescale] {
        &self.typescales
    }

    pub fn resolved_typescale(&self, id: &str) -> Option<&ResolvedTypescale> {
        self.typescales.iter().find(|t| t.id() == id)
    }

    pub fn presets(&self) -> &[PresetDefinition] {
        &self.presets
    }

    pub fn preset(&self, id: &str) -> Option<&PresetDefinition> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn scope(&self) -> ScopeSelector {
        self.scope
    }

    /// Overrides the configured scope selector.
    pub fn with_scope(mut self, scope: ScopeSelector) -> Self {
        self.scope = scope;
        self
    }

    /// One block per breakpoint declaring every typescale's custom properties.
    pub fn custom_properties(&self) -> Vec<MediaBlock> {
        self.registry
            .iter()
            .enumerate()
            .map(|(index, breakpoint)| {
                let declarations = self
                    .typescales
                    .iter()
                    .flat_map(|typescale| {
                        let metrics = typescale.steps()[index].metrics;
                        [
                            Declaration::new(
                                font_size_property(typescale.id()),
                                metrics.font_size.to_string(),
                            ),
                            Declaration::new(
                                line_height_property(typescale.id()),
                                metrics.line_height.to_string(),
                            ),
                        ]
                    })
                    .collect();
                MediaBlock {
                    min_width: breakpoint.min_width(),
                    declarations,
                }
            })
            .collect()
    }

    /// Declarations applying a typescale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTypescale`] if `id` is not declared.
    pub fn typescale(&self, id: &str, important: bool) -> Result<Vec<Declaration>> {
        if self.resolved_typescale(id).is_none() {
            return Err(ConfigError::UnknownTypescale {
                typescale: id.to_string(),
                referrer: None,
            });
        }
        Ok(typescale_declarations(id, important))
    }

    /// Declarations applying a preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if `id` is not declared.
    pub fn type_preset(&self, id: &str, important: bool) -> Result<Vec<Declaration>> {
        let preset = self
            .preset(id)
            .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))?;
        Ok(preset_declarations(
            preset,
            self.default_family.as_deref(),
            important,
        ))
    }

    /// Utility classes for every typescale, then every preset, all `!important`.
    ///
    /// Class names are `u-typescale-{id}` and `u-type-preset-{id}`, prefixed
    /// with `{namespace}-` when `namespace` is not empty.
    pub fn utility_classes(&self, namespace: &str) -> Vec<Rule> {
        let typescales = self.typescales.iter().map(|typescale| {
            Rule::new(
                format!(".{}", utility_class_name(namespace, "typescale", typescale.id())),
                typescale_declarations(typescale.id(), true),
            )
        });
        let presets = self.presets.iter().map(|preset| {
            Rule::new(
                format!(".{}", utility_class_name(namespace, "type-preset", &preset.id)),
                preset_declarations(preset, self.default_family.as_deref(), true),
            )
        });
        typescales.chain(presets).collect()
    }

    /// Starts a stylesheet with the custom property blocks.
    pub fn stylesheet(&self) -> Stylesheet<'_> {
        Stylesheet {
            presets: self,
            rules: Vec::new(),
        }
    }
}

/// Builds a utility class name (without the leading dot).
pub fn utility_class_name(namespace: &str, kind: &str, id: &str) -> String {
    if namespace.is_empty() {
        format!("u-{}-{}", kind, id)
    } else {
        format!("{}-u-{}-{}", namespace, kind, id)
    }
}

/// A stylesheet under construction: custom properties followed by rules in
/// the order they were added.
#[derive(Debug, Clone)]
pub struct Stylesheet<'a> {
    presets: &'a TypePresets,
    rules: Vec<Rule>,
}

impl Stylesheet<'_> {
    /// Adds a rule applying a typescale.
    pub fn typescale(mut self, selector: &str, id: &str, important: bool) -> Result<Self> {
        let declarations = self.presets.typescale(id, important)?;
        self.rules.push(Rule::new(selector, declarations));
        Ok(self)
    }

    /// Adds a rule applying a preset.
    pub fn type_preset(mut self, selector: &str, id: &str, important: bool) -> Result<Self> {
        let declarations = self.presets.type_preset(id, important)?;
        self.rules.push(Rule::new(selector, declarations));
        Ok(self)
    }

    /// Adds the utility classes.
    pub fn utility_classes(mut self, namespace: &str) -> Self {
        self.rules.extend(self.presets.utility_classes(namespace));
        self
    }

    /// Adds an arbitrary rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Renders the stylesheet text.
    pub fn render(&self) -> String {
        render_stylesheet(
            self.presets.scope,
            &self.presets.media_type,
            &self.presets.custom_properties(),
            &self.rules,
        )
    }
}

/// Generates the complete stylesheet a configuration describes: custom
/// properties, configured rules in order, then utility classes if enabled.
pub fn generate(config: &TypeConfig) -> Result<String> {
    let presets = TypePresets::new(config)?;
    let mut sheet = presets.stylesheet();

    for rule in &config.rules {
        sheet = match &rule.include {
            Include::Typescale(id) => sheet.typescale(&rule.selector, id, rule.important)?,
            Include::Preset(id) => sheet.type_preset(&rule.selector, id, rule.important)?,
        };
    }

    if let Some(namespace) = &config.utilities {
        sheet = sheet.utility_classes(namespace);
    }

    Ok(sheet.render())
}
