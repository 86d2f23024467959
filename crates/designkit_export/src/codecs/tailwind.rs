//! `tailwind.config.js`
//!
//! Colors and font families point at the CSS custom properties so the
//! `.dark` class switches them; scales are inlined. Component styles are
//! registered through a small `addComponents` plugin.

use std::fmt::Write as _;

use designkit_tokens::{DesignConfig, DesignTokens, StyleRecord};

use super::css::{color_var, selector};
use super::GENERATED;
use crate::case::{camel, kebab};

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED}");
    out.push_str("// Pair with the CSS variables export, which defines every var() below.\n\n");
    out.push_str("/** @type {import('tailwindcss').Config} */\n");
    out.push_str("module.exports = {\n");
    out.push_str("  darkMode: 'class',\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");
    write_theme(&mut out, tokens);
    out.push_str("    },\n");
    out.push_str("  },\n");
    write_plugins(&mut out, config);
    out.push_str("};\n");
    out
}

fn write_theme(out: &mut String, tokens: &DesignTokens) {
    out.push_str("      colors: {\n");
    for (key, _) in tokens.colors.light.iter() {
        let _ = writeln!(
            out,
            "        {}: {},",
            key_name(&kebab(key.field_name())),
            string(&format!("var({})", color_var(key)))
        );
    }
    out.push_str("      },\n");

    out.push_str("      fontFamily: {\n");
    for name in ["sans", "heading", "mono"] {
        let _ = writeln!(out, "        {name}: {},", string(&format!("var(--font-{name})")));
    }
    out.push_str("      },\n");

    let typography = &tokens.typography;
    out.push_str("      fontSize: {\n");
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "        {}: {},", key_name(name), string(&format!("{size}px")));
    }
    out.push_str("      },\n");

    out.push_str("      fontWeight: {\n");
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(out, "        {name}: {},", string(&weight.to_string()));
    }
    out.push_str("      },\n");

    out.push_str("      lineHeight: {\n");
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(out, "        {name}: {},", string(&height.to_string()));
    }
    out.push_str("      },\n");

    out.push_str("      spacing: {\n");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(
            out,
            "        {}: {},",
            key_name(token.name()),
            string(&format!("{value}px"))
        );
    }
    out.push_str("      },\n");

    match &tokens.radius {
        Some(radius) => {
            out.push_str("      borderRadius: {\n");
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "        {}: {},", token.name(), string(&format!("{value}px")));
            }
            out.push_str("      },\n");
        }
        None => out.push_str("      // borderRadius: not selected\n"),
    }

    match &tokens.shadows {
        Some(shadows) => {
            out.push_str("      boxShadow: {\n");
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(out, "        {}: {},", token.name(), string(&shadow.to_css()));
            }
            out.push_str("      },\n");
        }
        None => out.push_str("      // boxShadow: not selected\n"),
    }
}

fn write_plugins(out: &mut String, config: &DesignConfig) {
    let styled: Vec<_> = config
        .components
        .iter()
        .filter(|(_, item)| !item.data.styles.is_empty())
        .collect();
    if styled.is_empty() {
        out.push_str("  plugins: [],\n");
        return;
    }

    out.push_str("  plugins: [\n");
    out.push_str("    function ({ addComponents }) {\n");
    out.push_str("      addComponents({\n");
    for (category, item) in styled {
        let _ = writeln!(out, "        // {}: {}", line(&item.category_name), line(&item.name));
        for (record, props) in &item.data.styles {
            let _ = writeln!(out, "        {}: {{", string(&selector(category, record)));
            write_record(out, props);
            out.push_str("        },\n");
        }
    }
    out.push_str("      });\n");
    out.push_str("    },\n");
    out.push_str("  ],\n");
}

fn write_record(out: &mut String, props: &StyleRecord) {
    for (prop, value) in props {
        let _ = writeln!(out, "          {}: {},", key_name(&camel(prop)), string(value));
    }
}

/// Single-quoted JS string literal
fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Bare object key when it is a valid identifier, quoted otherwise
fn key_name(name: &str) -> String {
    let mut chars = name.chars();
    let bare = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        string(name)
    }
}

/// Comment text on a single line
fn line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_tokens::{build_config, Catalog, DesignKitState};

    #[test]
    fn colors_reference_css_variables() {
        let js = encode(&build_config(&Catalog::builtin(), &DesignKitState::new()));
        assert!(js.contains("        'surface-alt': 'var(--color-surface-alt)',\n"));
        assert!(js.contains("        success: 'var(--color-success)',\n"));
        assert!(js.contains("        '2xl': '"));
        assert!(js.contains("// borderRadius: not selected"));
        assert!(js.contains("  plugins: [],\n"));
    }

    #[test]
    fn components_register_as_plugin() {
        let state = DesignKitState::new()
            .with_selection("inputs", "outlined")
            .with_selection("shadows", "soft");
        let js = encode(&build_config(&Catalog::builtin(), &state));
        assert!(js.contains("addComponents({"));
        assert!(js.contains("        '.dk-inputs': {\n"));
        assert!(js.contains("          boxShadow: '0 0 0 3px rgba(59,130,246,0.2)',\n"));
        assert!(js.contains("        md: '0px 4px 6px -1px rgba(0,0,0,0.1)',\n"));
    }

    #[test]
    fn interaction_records_match_css_selectors() {
        let state = DesignKitState::new().with_selection("buttons", "solid");
        let config = build_config(&Catalog::builtin(), &state);
        let js = encode(&config);
        let css = crate::codecs::css::encode(&config);
        assert!(css.contains(".dk-buttons:hover {"));
        assert!(js.contains("        '.dk-buttons:hover': {\n"));
        assert!(js.contains("        '.dk-buttons:focus-visible': {\n"));
        assert!(!js.contains("'.dk-buttons-hover'"));
        assert!(!js.contains("'.dk-buttons-focus'"));
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(string("it's a \\ test"), "'it\\'s a \\\\ test'");
        assert_eq!(key_name("borderRadius"), "borderRadius");
        assert_eq!(key_name("row-alt"), "'row-alt'");
    }
}
