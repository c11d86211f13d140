//! Command line front end for `typepresets`.
//!
//! ```text
//! typepresets build type.yaml -o typography.css
//! typepresets build type.yaml --scope global --utilities app
//! typepresets resolve type.yaml --format yaml
//! typepresets check type.yaml
//! ```
//!
//! Each command returns its output as a string; `main` decides where it goes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use typepresets::{generate, Breakpoint, ResolvedTypescale, ScopeSelector, TypeConfig, TypePresets};

/// Generate responsive typography CSS from a YAML configuration.
#[derive(Debug, Parser)]
#[command(name = "typepresets", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the stylesheet.
    Build(BuildArgs),
    /// Print the resolved per-breakpoint typescale table.
    Resolve(ResolveArgs),
    /// Validate a configuration without writing CSS.
    Check {
        /// Configuration file (YAML).
        config: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Configuration file (YAML).
    pub config: PathBuf,

    /// Write the stylesheet here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scope selector for custom properties, overriding the configuration.
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Emit utility classes, optionally under a namespace.
    #[arg(long, num_args = 0..=1, default_missing_value = "", value_name = "NAMESPACE")]
    pub utilities: Option<String>,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Configuration file (YAML).
    pub config: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

/// Command line spelling of [`ScopeSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// `:root`
    Root,
    /// `:global(:root)`
    Global,
}

impl From<ScopeArg> for ScopeSelector {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Root => ScopeSelector::Root,
            ScopeArg::Global => ScopeSelector::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct ResolvedReport<'a> {
    breakpoints: Vec<&'a Breakpoint>,
    typescales: &'a [ResolvedTypescale],
}

fn load(path: &Path) -> Result<TypeConfig> {
    TypeConfig::from_file(path).with_context(|| format!("could not load {}", path.display()))
}

/// Renders the stylesheet for `build`.
pub fn build(args: &BuildArgs) -> Result<String> {
    let mut config = load(&args.config)?;
    if let Some(scope) = args.scope {
        config.scope = scope.into();
    }
    if let Some(namespace) = &args.utilities {
        config.utilities = Some(namespace.clone());
    }

    let css = generate(&config)
        .with_context(|| format!("could not generate CSS from {}", args.config.display()))?;
    tracing::info!(bytes = css.len(), scope = config.scope.keyword(), "generated stylesheet");
    Ok(css)
}

/// Writes a rendered stylesheet to `path`.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    std::fs::write(path, css).with_context(|| format!("could not write {}", path.display()))
}

/// Serializes the resolved typescale table for `resolve`.
pub fn resolve(args: &ResolveArgs) -> Result<String> {
    let config = load(&args.config)?;
    let presets = TypePresets::new(&config)
        .with_context(|| format!("could not resolve {}", args.config.display()))?;

    let report = ResolvedReport {
        breakpoints: presets.breakpoints().iter().collect(),
        typescales: presets.typescales(),
    };

    let text = match args.format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        Format::Yaml => serde_yaml::to_string(&report)?,
    };
    Ok(text)
}

/// Validates a configuration and summarizes it for `check`.
pub fn check(path: &Path) -> Result<String> {
    let config = load(path)?;
    let presets = TypePresets::new(&config)
        .with_context(|| format!("invalid configuration {}", path.display()))?;

    Ok(format!(
        "{}: {} breakpoints, {} typescales, {} presets\n",
        path.display(),
        presets.breakpoints().len(),
        presets.typescales().len(),
        presets.presets().len()
    ))
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
