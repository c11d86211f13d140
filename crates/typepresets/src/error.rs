//! Error types for configuration loading and stylesheet generation.
//!
//! Every failure is a configuration error: generation is a pure function of
//! the configuration, so an error always means the configuration needs fixing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a configuration or generating CSS from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An override or lookup names a breakpoint that was never declared.
    #[error("unknown breakpoint '{breakpoint}' in typescale override '{typescale}'")]
    UnknownBreakpoint {
        typescale: String,
        breakpoint: String,
    },

    /// A preset or invocation references an undeclared typescale.
    #[error("unknown typescale reference '{typescale}'{}", describe_referrer(.referrer))]
    UnknownTypescale {
        typescale: String,
        /// The preset holding the reference, when there is one.
        referrer: Option<String>,
    },

    /// An invocation references an undeclared preset.
    #[error("unknown type preset '{0}'")]
    UnknownPreset(String),

    /// A typescale was declared without a base value.
    #[error("typescale '{0}' requires a base value")]
    MissingBaseValue(String),

    /// The same breakpoint name was declared more than once.
    #[error("breakpoint '{name}' declared twice (min-width {first} and {second})")]
    AmbiguousBreakpointOrder {
        name: String,
        first: String,
        second: String,
    },

    /// A length could not be parsed.
    #[error("invalid length for '{context}': {message}")]
    InvalidLength { context: String, message: String },

    /// A configuration entry has the wrong shape.
    #[error("invalid definition for '{context}': {message}")]
    InvalidDefinition { context: String, message: String },

    /// YAML syntax error.
    #[error("failed to parse configuration{}: {message}", describe_path(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// The configuration file could not be read.
    #[error("failed to load configuration: {message}")]
    Load { message: String },
}

impl ConfigError {
    pub(crate) fn invalid(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidDefinition {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Attaches a source path to parse errors that lack one.
    pub(crate) fn with_path(self, source: PathBuf) -> Self {
        match self {
            ConfigError::Parse { path: None, message } => ConfigError::Parse {
                path: Some(source),
                message,
            },
            other => other,
        }
    }
}

fn describe_referrer(referrer: &Option<String>) -> String {
    referrer
        .as_ref()
        .map(|preset| format!(" in preset '{}'", preset))
        .unwrap_or_default()
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for typepresets operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
