//! YAML configuration parser.
//!
//! The document is walked as a `serde_yaml::Value` rather than derived, so
//! errors can name the exact entry (`typescales.2.md`) that failed and so
//! typescale ids may be numbers or strings.

use super::{Include, RuleSpec, TypeConfig};
use crate::error::{ConfigError, Result};
use crate::length::Length;
use crate::preset::PresetDefinition;
use crate::typescale::TypescaleDefinition;
use crate::util::scalar_text;

const TOP_LEVEL_KEYS: &[&str] = &[
    "breakpoints",
    "typescales",
    "presets",
    "default-family",
    "line-height-scale",
    "scope",
    "media-type",
    "rules",
    "utilities",
];

/// Parses a YAML configuration document.
///
/// # Errors
///
/// Returns a [`ConfigError`] if:
/// - YAML parsing fails
/// - `typescales` is missing
/// - an entry has the wrong shape, an unknown key, or an invalid length
///
/// Reference errors (unknown breakpoints or typescales) are reported when
/// the configuration is resolved, not here.
pub fn parse_config(yaml: &str) -> Result<TypeConfig> {
    let root: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
        path: None,
        message: e.to_string(),
    })?;

    let mapping = root.as_mapping().ok_or_else(|| ConfigError::Parse {
        path: None,
        message: "Configuration must be a YAML mapping".to_string(),
    })?;

    for key in mapping.keys() {
        let known = key.as_str().is_some_and(|k| TOP_LEVEL_KEYS.contains(&k));
        if !known {
            return Err(ConfigError::invalid(
                "configuration",
                format!("unknown key {:?}", key),
            ));
        }
    }

    let mut config = TypeConfig::new();

    if let Some(value) = present(mapping.get("breakpoints")) {
        config.breakpoints = Some(parse_breakpoints(value)?);
    }

    let typescales = present(mapping.get("typescales")).ok_or_else(|| {
        ConfigError::invalid("configuration", "missing required key 'typescales'")
    })?;
    for (id, value) in unique_entries(typescales, "typescales")? {
        config.typescales.push(TypescaleDefinition::parse(&id, value)?);
    }

    if let Some(presets) = present(mapping.get("presets")) {
        for (id, value) in unique_entries(presets, "presets")? {
            config.presets.push(PresetDefinition::parse(&id, value)?);
        }
    }

    if let Some(value) = present(mapping.get("default-family")) {
        config.default_family = Some(text(value, "default-family")?);
    }

    if let Some(value) = present(mapping.get("line-height-scale")) {
        config.line_height_scale = value
            .as_f64()
            .filter(|scale| scale.is_finite())
            .ok_or_else(|| {
                ConfigError::invalid(
                    "line-height-scale",
                    format!("expected a number, got {:?}", value),
                )
            })?;
    }

    if let Some(value) = present(mapping.get("scope")) {
        config.scope = text(value, "scope")?
            .parse()
            .map_err(|message: String| ConfigError::invalid("scope", message))?;
    }

    if let Some(value) = present(mapping.get("media-type")) {
        config.media_type = text(value, "media-type")?;
    }

    if let Some(value) = present(mapping.get("rules")) {
        config.rules = parse_rules(value)?;
    }

    if let Some(value) = mapping.get("utilities") {
        config.utilities = parse_utilities(value)?;
    }

    tracing::debug!(
        typescales = config.typescales.len(),
        presets = config.presets.len(),
        rules = config.rules.len(),
        "parsed configuration"
    );

    Ok(config)
}

/// Treats an explicit `~` the same as an absent key.
fn present(value: Option<&serde_yaml::Value>) -> Option<&serde_yaml::Value> {
    value.filter(|v| !v.is_null())
}

fn text(value: &serde_yaml::Value, context: &str) -> Result<String> {
    scalar_text(value).ok_or_else(|| {
        ConfigError::invalid(context, format!("expected a string, got {:?}", value))
    })
}

/// Returns the `(id, value)` pairs of a mapping section in document order.
fn entries<'a>(
    value: &'a serde_yaml::Value,
    section: &str,
) -> Result<Vec<(String, &'a serde_yaml::Value)>> {
    let map = value.as_mapping().ok_or_else(|| {
        ConfigError::invalid(section, format!("expected a mapping, got {:?}", value))
    })?;

    map.iter()
        .map(|(key, entry)| {
            let id = scalar_text(key).ok_or_else(|| {
                ConfigError::invalid(section, format!("invalid id {:?}", key))
            })?;
            Ok((id, entry))
        })
        .collect()
}

/// Like [`entries`], but rejects ids that repeat once read as text (`1` and `'1'`).
fn unique_entries<'a>(
    value: &'a serde_yaml::Value,
    section: &str,
) -> Result<Vec<(String, &'a serde_yaml::Value)>> {
    let pairs = entries(value, section)?;
    for (index, (id, _)) in pairs.iter().enumerate() {
        if pairs[..index].iter().any(|(seen, _)| seen == id) {
            return Err(ConfigError::invalid(section, format!("duplicate id '{}'", id)));
        }
    }
    Ok(pairs)
}

fn parse_breakpoints(value: &serde_yaml::Value) -> Result<Vec<(String, Length)>> {
    entries(value, "breakpoints")?
        .into_iter()
        .map(|(name, width)| {
            let length = Length::parse_value(width).map_err(|message| {
                ConfigError::InvalidLength {
                    context: format!("breakpoints.{}", name),
                    message,
                }
            })?;
            Ok((name, length))
        })
        .collect()
}

fn parse_rules(value: &serde_yaml::Value) -> Result<Vec<RuleSpec>> {
    let seq = value.as_sequence().ok_or_else(|| {
        ConfigError::invalid("rules", format!("expected a list, got {:?}", value))
    })?;

    seq.iter()
        .enumerate()
        .map(|(index, entry)| parse_rule(entry, &format!("rules.{}", index)))
        .collect()
}

fn parse_rule(value: &serde_yaml::Value, context: &str) -> Result<RuleSpec> {
    let map = value.as_mapping().ok_or_else(|| {
        ConfigError::invalid(context, format!("expected a mapping, got {:?}", value))
    })?;

    for key in map.keys() {
        let known = key
            .as_str()
            .is_some_and(|k| ["selector", "typescale", "preset", "important"].contains(&k));
        if !known {
            return Err(ConfigError::invalid(context, format!("unknown key {:?}", key)));
        }
    }

    let selector = present(map.get("selector"))
        .ok_or_else(|| ConfigError::invalid(context, "missing required key 'selector'"))
        .and_then(|v| text(v, context))?;

    let typescale = present(map.get("typescale"))
        .map(|v| text(v, context))
        .transpose()?;
    let preset = present(map.get("preset"))
        .map(|v| text(v, context))
        .transpose()?;

    let include = match (typescale, preset) {
        (Some(id), None) => Include::Typescale(id),
        (None, Some(id)) => Include::Preset(id),
        _ => {
            return Err(ConfigError::invalid(
                context,
                "expected exactly one of 'typescale' or 'preset'",
            ))
        }
    };

    let important = match present(map.get("important")) {
        None => false,
        Some(serde_yaml::Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(ConfigError::invalid(
                context,
                format!("'important' must be true or false, got {:?}", other),
            ))
        }
    };

    Ok(RuleSpec {
        selector,
        include,
        important,
    })
}

/// `utilities` accepts `true`, a namespace string, or `{ namespace: ... }`.
fn parse_utilities(value: &serde_yaml::Value) -> Result<Option<String>> {
    match value {
        serde_yaml::Value::Null | serde_yaml::Value::Bool(false) => Ok(None),
        serde_yaml::Value::Bool(true) => Ok(Some(String::new())),
        serde_yaml::Value::String(namespace) => Ok(Some(namespace.clone())),
        serde_yaml::Value::Mapping(map) => {
            for key in map.keys() {
                if key.as_str() != Some("namespace") {
                    return Err(ConfigError::invalid(
                        "utilities",
                        format!("unknown key {:?}", key),
                    ));
                }
            }
            match present(map.get("namespace")) {
                None => Ok(Some(String::new())),
                Some(v) => text(v, "utilities.namespace").map(Some),
            }
        }
        other => Err(ConfigError::invalid(
            "utilities",
            format!("expected true, a namespace, or a mapping, got {:?}", other),
        )),
    }
}
