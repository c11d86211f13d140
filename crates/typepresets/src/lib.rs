//! # Typepresets - Responsive Typography for CSS
//!
//! `typepresets` generates CSS custom properties and utility classes from a
//! declarative description of breakpoints, typescales and type presets.
//!
//! ## Core Concepts
//!
//! - [`BreakpointRegistry`]: Named viewport widths, always starting at a zero-width `base`
//! - [`TypescaleDefinition`]: A font-size / line-height pair with sparse per-breakpoint overrides
//! - [`PresetDefinition`]: A typescale plus family, weight, transform and letter-spacing
//! - [`TypePresets`]: A resolved configuration that emits declarations and rules
//! - [`ScopeSelector`]: `:root` or `:global(:root)` as the custom property scope
//!
//! ## Quick Start
//!
//! ```rust
//! use typepresets::{generate, TypeConfig};
//!
//! let config = TypeConfig::from_yaml(r#"
//! breakpoints:
//!   md: 900px
//! typescales:
//!   1: { base: 12px, md: 14px }
//! presets:
//!   caption: { scale: 1, transform: uppercase }
//! rules:
//!   - { selector: .caption, preset: caption }
//! "#).unwrap();
//!
//! let css = generate(&config).unwrap();
//! assert_eq!(css, "\
//! @media screen and (min-width: 0) {
//!   :root {
//!     --typescale-1-font-size: 12px;
//!     --typescale-1-line-height: 20px;
//!   }
//! }
//! @media screen and (min-width: 900px) {
//!   :root {
//!     --typescale-1-font-size: 14px;
//!     --typescale-1-line-height: 22px;
//!   }
//! }
//!
//! .caption {
//!   font-size: var(--typescale-1-font-size);
//!   line-height: var(--typescale-1-line-height);
//!   font-weight: normal;
//!   text-transform: uppercase;
//!   letter-spacing: normal;
//! }
//! ");
//! ```
//!
//! ## Forward Fill
//!
//! Overrides are sparse: a value holds from its breakpoint upward until
//! another override replaces it. Every breakpoint gets a media block with
//! every typescale, so each block is complete on its own.
//!
//! ## Programmatic Use
//!
//! ```rust
//! use typepresets::{Length, PresetDefinition, TypeConfig, TypePresets, TypescaleDefinition};
//!
//! let config = TypeConfig::new()
//!     .typescale(TypescaleDefinition::new("1", Length::px(12.0)))
//!     .preset(PresetDefinition::new("1", "1").weight("800"));
//!
//! let presets = TypePresets::new(&config).unwrap();
//! let rules = presets.utility_classes("app");
//! assert_eq!(rules[0].selector, ".app-u-typescale-1");
//! assert_eq!(rules[1].selector, ".app-u-type-preset-1");
//! ```

pub mod breakpoint;
pub mod config;
pub mod css;
mod error;
mod generator;
mod length;
pub mod preset;
pub mod typescale;
mod util;

// Error type
pub use error::{ConfigError, Result};

pub use breakpoint::{Breakpoint, BreakpointRegistry, BASE_BREAKPOINT, DEFAULT_BREAKPOINTS};
pub use config::{parse_config, Include, RuleSpec, TypeConfig};
pub use css::{render_stylesheet, Declaration, MediaBlock, Rule, ScopeSelector};
pub use generator::{generate, utility_class_name, Stylesheet, TypePresets};
pub use length::{format_number, Length, Unit};
pub use preset::PresetDefinition;
pub use typescale::{
    resolve_typescale, Metrics, ResolvedStep, ResolvedTypescale, ScaleValue, TypescaleDefinition,
    DEFAULT_LINE_HEIGHT_SCALE,
};
