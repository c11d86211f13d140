//! End-to-end stylesheet output for complete configurations.

use typepresets::{generate, ConfigError, ScopeSelector, TypeConfig};

fn render(yaml: &str) -> String {
    let config = TypeConfig::from_yaml(yaml).unwrap();
    generate(&config).unwrap()
}

#[test]
fn test_defining_and_using_typescales() {
    let css = render(
        r#"
typescales:
  1: { base: 12px, md: 14px, xl: 16px }
  2: { base: [14px, 20px], lg: 20px }
  3: 16px
  4: [18px, 24px]
rules:
  - { selector: p, typescale: 1 }
  - { selector: .u-typescale-2, typescale: 2, important: true }
"#,
    );

    let expected = "\
@media screen and (min-width: 0) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 20px;
    --typescale-3-font-size: 16px;
    --typescale-3-line-height: 24px;
    --typescale-4-font-size: 18px;
    --typescale-4-line-height: 24px;
  }
}
@media screen and (min-width: 600px) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 20px;
    --typescale-3-font-size: 16px;
    --typescale-3-line-height: 24px;
    --typescale-4-font-size: 18px;
    --typescale-4-line-height: 24px;
  }
}
@media screen and (min-width: 900px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 20px;
    --typescale-3-font-size: 16px;
    --typescale-3-line-height: 24px;
    --typescale-4-font-size: 18px;
    --typescale-4-line-height: 24px;
  }
}
@media screen and (min-width: 1200px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
    --typescale-3-font-size: 16px;
    --typescale-3-line-height: 24px;
    --typescale-4-font-size: 18px;
    --typescale-4-line-height: 24px;
  }
}
@media screen and (min-width: 1800px) {
  :root {
    --typescale-1-font-size: 16px;
    --typescale-1-line-height: 24px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
    --typescale-3-font-size: 16px;
    --typescale-3-line-height: 24px;
    --typescale-4-font-size: 18px;
    --typescale-4-line-height: 24px;
  }
}

p {
  font-size: var(--typescale-1-font-size);
  line-height: var(--typescale-1-line-height);
}

.u-typescale-2 {
  font-size: var(--typescale-2-font-size) !important;
  line-height: var(--typescale-2-line-height) !important;
}
";
    assert_eq!(css, expected);
}

const PRESET_MEDIA_BLOCKS: &str = "\
@media screen and (min-width: 0) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 22px;
  }
}
@media screen and (min-width: 600px) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 22px;
  }
}
@media screen and (min-width: 900px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 22px;
  }
}
@media screen and (min-width: 1200px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
  }
}
@media screen and (min-width: 1800px) {
  :root {
    --typescale-1-font-size: 16px;
    --typescale-1-line-height: 24px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
  }
}
";

#[test]
fn test_defining_and_using_type_presets() {
    let css = render(
        r#"
default-family: 'Arial, sans-serif'
typescales:
  1: { base: 12px, md: 14px, xl: 16px }
  2: { base: 14px, lg: 20px }
presets:
  1: { scale: 1, spacing: 0.5 }
  2: { scale: 1, family: '"Comic Sans 1211"', transform: uppercase }
  3: { scale: 2, family: '"Comic Sans 1211"', weight: 800 }
rules:
  - { selector: .preset-1, preset: 1 }
  - { selector: .preset-2, preset: 2, important: true }
  - { selector: .preset-3, preset: 3 }
"#,
    );

    let rules = r#"
.preset-1 {
  font-size: var(--typescale-1-font-size);
  line-height: var(--typescale-1-line-height);
  font-family: Arial, sans-serif;
  font-weight: normal;
  text-transform: none;
  letter-spacing: 0.5;
}

.preset-2 {
  font-size: var(--typescale-1-font-size) !important;
  line-height: var(--typescale-1-line-height) !important;
  font-family: "Comic Sans 1211" !important;
  font-weight: normal !important;
  text-transform: uppercase !important;
  letter-spacing: normal !important;
}

.preset-3 {
  font-size: var(--typescale-2-font-size);
  line-height: var(--typescale-2-line-height);
  font-family: "Comic Sans 1211";
  font-weight: 800;
  text-transform: none;
  letter-spacing: normal;
}
"#;
    assert_eq!(css, format!("{}{}", PRESET_MEDIA_BLOCKS, rules));
}

#[test]
fn test_generating_utility_classes() {
    let css = render(
        r#"
default-family: 'Arial, sans-serif'
typescales:
  1: { base: 12px, md: 14px, xl: 16px }
  2: { base: 14px, lg: 20px }
presets:
  1: { scale: 1, spacing: 0.5 }
  2: { scale: 1, family: '"Comic Sans", sans-serif', transform: uppercase }
  3: { scale: 2, family: '"Comic Sans", sans-serif', weight: 800 }
utilities:
  namespace: test
"#,
    );

    let rules = r#"
.test-u-typescale-1 {
  font-size: var(--typescale-1-font-size) !important;
  line-height: var(--typescale-1-line-height) !important;
}

.test-u-typescale-2 {
  font-size: var(--typescale-2-font-size) !important;
  line-height: var(--typescale-2-line-height) !important;
}

.test-u-type-preset-1 {
  font-size: var(--typescale-1-font-size) !important;
  line-height: var(--typescale-1-line-height) !important;
  font-family: Arial, sans-serif !important;
  font-weight: normal !important;
  text-transform: none !important;
  letter-spacing: 0.5 !important;
}

.test-u-type-preset-2 {
  font-size: var(--typescale-1-font-size) !important;
  line-height: var(--typescale-1-line-height) !important;
  font-family: "Comic Sans", sans-serif !important;
  font-weight: normal !important;
  text-transform: uppercase !important;
  letter-spacing: normal !important;
}

.test-u-type-preset-3 {
  font-size: var(--typescale-2-font-size) !important;
  line-height: var(--typescale-2-line-height) !important;
  font-family: "Comic Sans", sans-serif !important;
  font-weight: 800 !important;
  text-transform: none !important;
  letter-spacing: normal !important;
}
"#;
    assert_eq!(css, format!("{}{}", PRESET_MEDIA_BLOCKS, rules));
}

#[test]
fn test_utility_classes_without_namespace() {
    let css = render(
        r#"
typescales:
  1: 12px
presets:
  1: { scale: 1 }
utilities: true
"#,
    );
    assert!(css.contains("\n.u-typescale-1 {\n"));
    assert!(css.contains("\n.u-type-preset-1 {\n"));
    assert!(!css.contains("-u-typescale-1"));
}

#[test]
fn test_custom_breakpoints() {
    let css = render(
        r#"
breakpoints:
  small: 400px
  med: 500px
  largo: 2000px
typescales:
  1: { base: 12px, med: 14px, largo: 16px }
  2: { base: 14px, small: 20px }
"#,
    );

    let expected = "\
@media screen and (min-width: 0) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 14px;
    --typescale-2-line-height: 22px;
  }
}
@media screen and (min-width: 400px) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
  }
}
@media screen and (min-width: 500px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
  }
}
@media screen and (min-width: 2000px) {
  :root {
    --typescale-1-font-size: 16px;
    --typescale-1-line-height: 24px;
    --typescale-2-font-size: 20px;
    --typescale-2-line-height: 28px;
  }
}
";
    assert_eq!(css, expected);
}

#[test]
fn test_customizing_line_heights() {
    let css = render(
        r#"
line-height-scale: 10
typescales:
  1: { base: 12px, md: 14px, xl: 16px }
  2: { base: 12px 20px, md: 13px, xl: 16px 32px }
"#,
    );

    let expected = "\
@media screen and (min-width: 0) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 12px;
    --typescale-2-line-height: 20px;
  }
}
@media screen and (min-width: 600px) {
  :root {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 22px;
    --typescale-2-font-size: 12px;
    --typescale-2-line-height: 20px;
  }
}
@media screen and (min-width: 900px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 24px;
    --typescale-2-font-size: 13px;
    --typescale-2-line-height: 23px;
  }
}
@media screen and (min-width: 1200px) {
  :root {
    --typescale-1-font-size: 14px;
    --typescale-1-line-height: 24px;
    --typescale-2-font-size: 13px;
    --typescale-2-line-height: 23px;
  }
}
@media screen and (min-width: 1800px) {
  :root {
    --typescale-1-font-size: 16px;
    --typescale-1-line-height: 26px;
    --typescale-2-font-size: 16px;
    --typescale-2-line-height: 32px;
  }
}
";
    assert_eq!(css, expected);
}

#[test]
fn test_global_scope_output() {
    let root = render("typescales:\n  1: 12px\n");
    let global = render("scope: global\ntypescales:\n  1: 12px\n");

    assert_eq!(
        global,
        "\
@media screen and (min-width: 0) {
  :global(:root) {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
  }
}
@media screen and (min-width: 600px) {
  :global(:root) {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
  }
}
@media screen and (min-width: 900px) {
  :global(:root) {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
  }
}
@media screen and (min-width: 1200px) {
  :global(:root) {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
  }
}
@media screen and (min-width: 1800px) {
  :global(:root) {
    --typescale-1-font-size: 12px;
    --typescale-1-line-height: 20px;
  }
}
"
    );
    assert_eq!(root.replace(":root", ":global(:root)"), global);
    assert_eq!(TypeConfig::from_yaml("scope: global\ntypescales: {}").unwrap().scope, ScopeSelector::Global);
}

#[test]
fn test_unknown_breakpoint_produces_no_output() {
    let config = TypeConfig::from_yaml(
        r#"
typescales:
  1: { base: 12px, xxl: 30px }
"#,
    )
    .unwrap();
    assert_eq!(
        generate(&config),
        Err(ConfigError::UnknownBreakpoint {
            typescale: "1".to_string(),
            breakpoint: "xxl".to_string(),
        })
    );
}

#[test]
fn test_missing_base_value() {
    let config = TypeConfig::from_yaml("typescales:\n  1: { md: 14px }\n").unwrap();
    assert_eq!(
        generate(&config),
        Err(ConfigError::MissingBaseValue("1".to_string()))
    );
}

#[test]
fn test_unknown_preset_scale() {
    let config = TypeConfig::from_yaml(
        r#"
typescales:
  1: 12px
presets:
  body: { scale: 2 }
"#,
    )
    .unwrap();
    assert!(matches!(
        generate(&config),
        Err(ConfigError::UnknownTypescale { .. })
    ));
}

#[test]
fn test_generation_is_idempotent() {
    let config = TypeConfig::from_yaml(
        r#"
default-family: Georgia
typescales:
  1: { base: 12px, md: 14px, xl: 16px }
  title: [24px, 28px]
presets:
  heading: { scale: title, weight: 700 }
rules:
  - { selector: h1, preset: heading }
utilities: { namespace: ns }
"#,
    )
    .unwrap();
    assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
}
