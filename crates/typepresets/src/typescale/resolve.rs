//! Forward-fill resolution of typescales across breakpoints.
//!
//! Overrides are sparse: a value declared at a breakpoint stays in effect at
//! every wider breakpoint until another override replaces it. Resolution is a
//! single pass over the sorted registry carrying the last known value.

use serde::Serialize;

use super::definition::{Metrics, TypescaleDefinition};
use crate::breakpoint::{Breakpoint, BreakpointRegistry};
use crate::error::{ConfigError, Result};

/// The metrics in effect at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStep {
    pub breakpoint: Breakpoint,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// A typescale with a value at every registered breakpoint.
///
/// Steps follow registry order, so there is exactly one per breakpoint and
/// the first step is always the base breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTypescale {
    id: String,
    steps: Vec<ResolvedStep>,
}

impl ResolvedTypescale {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn steps(&self) -> &[ResolvedStep] {
        &self.steps
    }

    /// Returns the metrics in effect at the named breakpoint.
    pub fn at(&self, breakpoint: &str) -> Option<&Metrics> {
        self.steps
            .iter()
            .find(|step| step.breakpoint.name() == breakpoint)
            .map(|step| &step.metrics)
    }
}

/// Resolves a typescale against a breakpoint registry.
///
/// # Errors
///
/// - [`ConfigError::MissingBaseValue`] if the typescale has no base value
/// - [`ConfigError::UnknownBreakpoint`] if an override names a breakpoint
///   that is not registered
pub fn resolve_typescale(
    definition: &TypescaleDefinition,
    registry: &BreakpointRegistry,
    line_height_scale: f64,
) -> Result<ResolvedTypescale> {
    let base = definition
        .base
        .as_ref()
        .ok_or_else(|| ConfigError::MissingBaseValue(definition.id.clone()))?;

    // Overrides placed at their breakpoint's position in the registry.
    let mut declared: Vec<Option<Metrics>> = vec![None; registry.len()];
    for (name, value) in &definition.overrides {
        let position =
            registry
                .position(name)
                .ok_or_else(|| ConfigError::UnknownBreakpoint {
                    typescale: definition.id.clone(),
                    breakpoint: name.clone(),
                })?;
        declared[position] = Some(value.metrics(line_height_scale));
    }

    let mut current = base.metrics(line_height_scale);
    let steps = registry
        .iter()
        .zip(declared)
        .map(|(breakpoint, value)| {
            if let Some(metrics) = value {
                current = metrics;
            }
            ResolvedStep {
                breakpoint: breakpoint.clone(),
                metrics: current,
            }
        })
        .collect();

    tracing::trace!(
        typescale = %definition.id,
        overrides = definition.overrides.len(),
        "resolved typescale"
    );

    Ok(ResolvedTypescale {
        id: definition.id.clone(),
        steps,
    })
}
