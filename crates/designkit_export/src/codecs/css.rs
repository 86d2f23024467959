//! CSS custom properties
//!
//! Light colors and every other token group go on `:root`, dark colors on
//! `.dark`. Selected components become `.dk-<category>` rules with their
//! resolved style records.

use std::fmt::Write as _;

use designkit_tokens::{ColorKey, ColorMode, DesignConfig, DesignTokens, ResolvedItem};

use super::GENERATED;
use crate::case::kebab;

/// Records rendered as pseudo-classes of the component root
const PSEUDO_RECORDS: [(&str, &str); 4] = [
    ("hover", "hover"),
    ("focus", "focus-visible"),
    ("active", "active"),
    ("disabled", "disabled"),
];

pub fn encode(config: &DesignConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* {GENERATED} */");
    out.push('\n');

    out.push_str(":root {\n");
    write_colors(&mut out, &config.tokens.colors.light);
    write_scales(&mut out, &config.tokens);
    out.push_str("}\n\n");

    out.push_str(".dark {\n");
    write_colors(&mut out, &config.tokens.colors.dark);
    out.push_str("}\n");

    out.push('\n');
    if config.components.is_empty() {
        out.push_str("/* No components selected */\n");
    }
    for (category, item) in &config.components {
        write_component(&mut out, category, item);
    }
    out
}

/// `--color-*` name of a key; semantic colors drop their prefix
pub fn color_var(key: ColorKey) -> String {
    format!("--color-{}", kebab(key.field_name()))
}

fn write_colors(out: &mut String, colors: &ColorMode) {
    for (key, value) in colors.iter() {
        let _ = writeln!(out, "  {}: {};", color_var(key), clean_value(value));
    }
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    let families = &typography.font_family;
    for (name, stack) in [
        ("sans", &families.sans),
        ("heading", &families.heading),
        ("mono", &families.mono),
    ] {
        let _ = writeln!(out, "  --font-{name}: {};", clean_value(stack));
    }
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "  --text-{name}: {size}px;");
    }
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(out, "  --font-weight-{name}: {weight};");
    }
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(out, "  --leading-{name}: {height};");
    }

    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(out, "  --spacing-{}: {value}px;", token.name());
    }

    match &tokens.radius {
        Some(radius) => {
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "  --radius-{}: {value}px;", token.name());
            }
        }
        None => out.push_str("  /* radius: not selected */\n"),
    }

    match &tokens.shadows {
        Some(shadows) => {
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(
                    out,
                    "  --shadow-{}: {};",
                    token.name(),
                    clean_value(&shadow.to_css())
                );
            }
        }
        None => out.push_str("  /* shadows: not selected */\n"),
    }
}

fn write_component(out: &mut String, category: &str, item: &ResolvedItem) {
    let _ = writeln!(
        out,
        "/* {}: {} */",
        comment(&item.category_name),
        comment(&item.name)
    );

    let styles = &item.data.styles;
    let root = styles.get("root").map(|props| ("root", props));
    let rest = styles
        .iter()
        .filter(|(record, _)| record.as_str() != "root")
        .map(|(record, props)| (record.as_str(), props));

    for (record, props) in root.into_iter().chain(rest) {
        let _ = writeln!(out, "{} {{", selector(category, record));
        for (prop, value) in props {
            let _ = writeln!(out, "  {}: {};", property(prop), clean_value(value));
        }
        out.push_str("}\n");
    }
    out.push('\n');
}

/// Component selector for a style record; also used by the Tailwind plugin
pub(crate) fn selector(category: &str, record: &str) -> String {
    let base = format!(".dk-{}", kebab(category));
    if record == "root" {
        return base;
    }
    match PSEUDO_RECORDS.iter().find(|(name, _)| *name == record) {
        Some((_, pseudo)) => format!("{base}:{pseudo}"),
        None => format!("{base}-{}", kebab(record)),
    }
}

/// Keep property names to characters CSS allows unescaped
fn property(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Drop characters that would end a declaration or block early
fn clean_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '\n' | '\r'))
        .collect()
}

fn comment(text: &str) -> String {
    text.replace("*/", "* /")
}
