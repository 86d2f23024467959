//! React Native theme module
//!
//! Plain ES module: numbers are unitless, font weights are strings, and
//! component style keys are camelCased for `StyleSheet.create`.

use std::fmt::Write as _;

use designkit_tokens::{ColorMode, DesignConfig, DesignTokens, Shadow};

use super::GENERATED;
use crate::case::camel;

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED}\n");

    out.push_str("export const colors = {\n");
    write_mode(&mut out, "light", &tokens.colors.light);
    write_mode(&mut out, "dark", &tokens.colors.dark);
    out.push_str("};\n\n");

    write_typography(&mut out, tokens);
    write_scales(&mut out, tokens);
    write_components(&mut out, config);

    out.push_str(
        "export default { colors, typography, spacing, radius, shadows, components };\n",
    );
    out
}

fn write_mode(out: &mut String, mode: &str, colors: &ColorMode) {
    let _ = writeln!(out, "  {mode}: {{");
    for (key, value) in colors.iter().filter(|(key, _)| !key.is_semantic()) {
        let _ = writeln!(out, "    {}: {},", key.as_str(), string(value));
    }
    out.push_str("    semantic: {\n");
    for (key, value) in colors.iter().filter(|(key, _)| key.is_semantic()) {
        let _ = writeln!(out, "      {}: {},", key.field_name(), string(value));
    }
    out.push_str("    },\n");
    out.push_str("  },\n");
}

fn write_typography(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    out.push_str("export const typography = {\n");
    let _ = writeln!(out, "  scale: {},", string(&typography.scale));
    out.push_str("  fontFamily: {\n");
    for (name, stack) in [
        ("sans", &typography.font_family.sans),
        ("heading", &typography.font_family.heading),
        ("mono", &typography.font_family.mono),
    ] {
        let _ = writeln!(out, "    {name}: {},", string(&native_family(stack)));
    }
    out.push_str("  },\n");

    out.push_str("  fontSize: {\n");
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "    {}: {size},", key_name(name));
    }
    out.push_str("  },\n");

    out.push_str("  fontWeight: {\n");
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(out, "    {name}: {},", string(&weight.to_string()));
    }
    out.push_str("  },\n");

    out.push_str("  // multiply by the font size for a lineHeight in points\n");
    out.push_str("  lineHeight: {\n");
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(out, "    {name}: {height},");
    }
    out.push_str("  },\n");
    out.push_str("};\n\n");
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    out.push_str("export const spacing = {\n");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(out, "  {}: {value},", key_name(token.name()));
    }
    out.push_str("};\n\n");

    match &tokens.radius {
        Some(radius) => {
            out.push_str("export const radius = {\n");
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "  {}: {value},", token.name());
            }
            out.push_str("};\n\n");
        }
        None => out.push_str("// radius: not selected\nexport const radius = null;\n\n"),
    }

    match &tokens.shadows {
        Some(shadows) => {
            out.push_str("export const shadows = {\n");
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(out, "  {}: {},", token.name(), shadow_style(shadow));
            }
            out.push_str("};\n\n");
        }
        None => out.push_str("// shadows: not selected\nexport const shadows = null;\n\n"),
    }
}

/// iOS shadow props plus an Android elevation
fn shadow_style(shadow: &Shadow) -> String {
    let rgba = shadow.rgba();
    format!(
        "{{ shadowColor: {}, shadowOffset: {{ width: {}, height: {} }}, shadowOpacity: {}, shadowRadius: {}, elevation: {} }}",
        string(&rgba.to_hex()),
        shadow.offset_x,
        shadow.offset_y,
        rgba.a,
        shadow.blur / 2.0,
        shadow.offset_y.max(0.0).round()
    )
}

fn write_components(out: &mut String, config: &DesignConfig) {
    if config.components.is_empty() {
        out.push_str("export const components = {};\n\n");
        return;
    }
    out.push_str("export const components = {\n");
    for (category, item) in &config.components {
        let _ = writeln!(out, "  // {}: {}", line(&item.name), line(&item.description));
        let _ = writeln!(out, "  {}: {{", key_name(category));
        for (record, props) in &item.data.styles {
            let _ = writeln!(out, "    {}: {{", key_name(&camel(record)));
            for (prop, value) in props {
                let _ = writeln!(out, "      {}: {},", key_name(&camel(prop)), string(value));
            }
            out.push_str("    },\n");
        }
        out.push_str("  },\n");
    }
    out.push_str("};\n\n");
}

/// First family of a CSS font stack, unquoted; generic stacks map to `System`
fn native_family(stack: &str) -> String {
    let first = stack
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');
    match first {
        "" | "system-ui" | "-apple-system" | "sans-serif" | "serif" => "System".to_string(),
        "ui-monospace" | "monospace" => "monospace".to_string(),
        family => family.to_string(),
    }
}

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

fn line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
