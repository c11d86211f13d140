//! CSS building blocks and text output.
//!
//! Generation produces plain values ([`Declaration`], [`Rule`],
//! [`MediaBlock`]); only [`render_stylesheet`] turns them into text. The
//! scope that custom properties are declared under is a [`ScopeSelector`]
//! passed to the renderer.

mod render;
mod scope;

pub use render::{render_stylesheet, Declaration, MediaBlock, Rule};
pub use scope::{ScopeSelector, DEFAULT_MEDIA_TYPE};
