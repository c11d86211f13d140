//! Type presets: named bundles of typographic properties.
//!
//! A preset points at a typescale for its size and line height and adds
//! family, weight, transform and spacing. Anything left unset falls back to
//! a default (`normal`, `none`, `normal`, and the configured default family).

mod definition;
mod expand;

pub use definition::PresetDefinition;
pub use expand::{
    font_size_property, line_height_property, preset_declarations, resolve_family,
    resolve_spacing, resolve_transform, resolve_weight, typescale_declarations, DEFAULT_SPACING,
    DEFAULT_TRANSFORM, DEFAULT_WEIGHT,
};
