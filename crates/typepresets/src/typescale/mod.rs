//! Responsive typescales.
//!
//! A typescale is a font-size / line-height pair that can change at each
//! breakpoint. Definitions are sparse (a base value plus the breakpoints
//! where something changes); resolution fills in every other breakpoint.
//!
//! ## How Resolution Works
//!
//! For a typescale `12px` with overrides `md: 14px, xl: 16px` over the
//! default breakpoints:
//!
//! | breakpoint | font-size | line-height |
//! |------------|-----------|-------------|
//! | base       | 12px      | 20px        |
//! | sm         | 12px      | 20px        |
//! | md         | 14px      | 22px        |
//! | lg         | 14px      | 22px        |
//! | xl         | 16px      | 24px        |
//!
//! A value holds at every wider breakpoint until another override replaces
//! it. Line heights are derived from the font size unless given explicitly.

mod definition;
mod resolve;

pub use definition::{
    derive_line_height, Metrics, ScaleValue, TypescaleDefinition, DEFAULT_LINE_HEIGHT_SCALE,
};
pub use resolve::{resolve_typescale, ResolvedStep, ResolvedTypescale};
