//! Stylesheet text output.
//!
//! Output is indented two spaces per level. Media blocks are written back to
//! back, and every rule after them is separated by a blank line:
//!
//! ```css
//! @media screen and (min-width: 0) {
//!   :root {
//!     --typescale-1-font-size: 12px;
//!   }
//! }
//! @media screen and (min-width: 600px) {
//!   :root {
//!     --typescale-1-font-size: 14px;
//!   }
//! }
//!
//! p {
//!   font-size: var(--typescale-1-font-size);
//! }
//! ```

use std::fmt::{self, Write};

use serde::Serialize;

use super::scope::ScopeSelector;
use crate::length::Length;

const INDENT: &str = "  ";

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Sets the `!important` flag.
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// Custom property declarations active from one breakpoint width upward.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaBlock {
    pub min_width: Length,
    pub declarations: Vec<Declaration>,
}

/// Renders media blocks followed by rules.
///
/// Each media block holds one `scope` rule. Blocks and rules without
/// declarations are skipped. Non-empty output ends with a newline.
pub fn render_stylesheet(
    scope: ScopeSelector,
    media_type: &str,
    blocks: &[MediaBlock],
    rules: &[Rule],
) -> String {
    let mut out = String::new();

    for block in blocks.iter().filter(|b| !b.declarations.is_empty()) {
        write_media_block(&mut out, scope, media_type, block);
    }

    for rule in rules.iter().filter(|r| !r.declarations.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        write_rule(&mut out, &rule.selector, &rule.declarations, 0);
    }

    out
}

fn media_query(media_type: &str, min_width: Length) -> String {
    if media_type.is_empty() {
        format!("(min-width: {})", min_width)
    } else {
        format!("{} and (min-width: {})", media_type, min_width)
    }
}

fn write_media_block(out: &mut String, scope: ScopeSelector, media_type: &str, block: &MediaBlock) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "@media {} {{", media_query(media_type, block.min_width));
    write_rule(out, scope.selector(), &block.declarations, 1);
    out.push_str("}\n");
}

fn write_rule(out: &mut String, selector: &str, declarations: &[Declaration], depth: usize) {
    let indent = INDENT.repeat(depth);
    let _ = writeln!(out, "{}{} {{", indent, selector);
    for declaration in declarations {
        let _ = writeln!(out, "{}{}{};", indent, INDENT, declaration);
    }
    let _ = writeln!(out, "{}}}", indent);
}
