//! Expansion of typescales and presets into CSS declarations.
//!
//! Typescales are always emitted as `var()` references to the custom
//! properties declared in the breakpoint media blocks, so a single rule
//! follows the viewport without media queries of its own.
//!
//! Preset defaults are resolved by the `resolve_*` functions below rather
//! than at each use site.

use super::definition::PresetDefinition;
use crate::css::Declaration;

/// `font-weight` when a preset sets none.
pub const DEFAULT_WEIGHT: &str = "normal";
/// `text-transform` when a preset sets none.
pub const DEFAULT_TRANSFORM: &str = "none";
/// `letter-spacing` when a preset sets none.
pub const DEFAULT_SPACING: &str = "normal";

/// Name of the font-size custom property for a typescale.
pub fn font_size_property(id: &str) -> String {
    format!("--typescale-{}-font-size", id)
}

/// Name of the line-height custom property for a typescale.
pub fn line_height_property(id: &str) -> String {
    format!("--typescale-{}-line-height", id)
}

/// Resolves `font-family`: the preset's own family, then the configured
/// default, then nothing.
pub fn resolve_family<'a>(
    preset: &'a PresetDefinition,
    default_family: Option<&'a str>,
) -> Option<&'a str> {
    preset.family.as_deref().or(default_family)
}

pub fn resolve_weight(preset: &PresetDefinition) -> &str {
    preset.weight.as_deref().unwrap_or(DEFAULT_WEIGHT)
}

pub fn resolve_transform(preset: &PresetDefinition) -> &str {
    preset.transform.as_deref().unwrap_or(DEFAULT_TRANSFORM)
}

pub fn resolve_spacing(preset: &PresetDefinition) -> &str {
    preset.spacing.as_deref().unwrap_or(DEFAULT_SPACING)
}

/// Declarations applying a typescale: font-size and line-height.
pub fn typescale_declarations(id: &str, important: bool) -> Vec<Declaration> {
    vec![
        Declaration::new("font-size", format!("var({})", font_size_property(id)))
            .important(important),
        Declaration::new("line-height", format!("var({})", line_height_property(id)))
            .important(important),
    ]
}

/// Declarations applying a preset.
///
/// Emits the typescale declarations followed by font-family (when one
/// resolves), font-weight, text-transform and letter-spacing. Every
/// declaration shares one importance flag: the requested one, or the
/// preset's own `important` setting.
pub fn preset_declarations(
    preset: &PresetDefinition,
    default_family: Option<&str>,
    important: bool,
) -> Vec<Declaration> {
    let important = important || preset.important;

    let mut declarations = typescale_declarations(&preset.scale, important);
    if let Some(family) = resolve_family(preset, default_family) {
        declarations.push(Declaration::new("font-family", family).important(important));
    }
    declarations.push(Declaration::new("font-weight", resolve_weight(preset)).important(important));
    declarations
        .push(Declaration::new("text-transform", resolve_transform(preset)).important(important));
    declarations
        .push(Declaration::new("letter-spacing", resolve_spacing(preset)).important(important));
    declarations
}
