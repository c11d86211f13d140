//! Selector scope for generated custom properties.

use std::fmt;
use std::str::FromStr;

/// Media type prefixed to every breakpoint query.
pub const DEFAULT_MEDIA_TYPE: &str = "screen";

/// Where custom properties are declared.
///
/// Plain stylesheets use `:root`. Stylesheets compiled as CSS modules need
/// the global marker so the properties are not scoped to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopeSelector {
    /// `:root`
    #[default]
    Root,
    /// `:global(:root)`
    Global,
}

impl ScopeSelector {
    /// Returns the selector text.
    pub fn selector(self) -> &'static str {
        match self {
            ScopeSelector::Root => ":root",
            ScopeSelector::Global => ":global(:root)",
        }
    }

    /// Returns the configuration keyword for this scope.
    pub fn keyword(self) -> &'static str {
        match self {
            ScopeSelector::Root => "root",
            ScopeSelector::Global => "global",
        }
    }
}

impl fmt::Display for ScopeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for ScopeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "root" | ":root" => Ok(ScopeSelector::Root),
            "global" | ":global" | ":global(:root)" => Ok(ScopeSelector::Global),
            other => Err(format!(
                "unknown scope '{}' (expected 'root' or 'global')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_text() {
        assert_eq!(ScopeSelector::Root.selector(), ":root");
        assert_eq!(ScopeSelector::Global.selector(), ":global(:root)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("root".parse::<ScopeSelector>(), Ok(ScopeSelector::Root));
        assert_eq!("Global".parse::<ScopeSelector>(), Ok(ScopeSelector::Global));
        assert_eq!(
            ":global(:root)".parse::<ScopeSelector>(),
            Ok(ScopeSelector::Global)
        );
        assert!("host".parse::<ScopeSelector>().is_err());
    }

    #[test]
    fn test_default_is_root() {
        assert_eq!(ScopeSelector::default(), ScopeSelector::Root);
    }
}
