//! Flutter constants

use std::fmt::Write as _;

use designkit_tokens::{ColorMode, DesignConfig, DesignTokens, Rgba};

use super::GENERATED;
use crate::case::{camel, pascal};

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED}");
    out.push_str("\nimport 'package:flutter/material.dart';\n\n");

    write_colors(&mut out, "DesignColorsLight", &tokens.colors.light);
    write_colors(&mut out, "DesignColorsDark", &tokens.colors.dark);
    write_typography(&mut out, tokens);
    write_scales(&mut out, tokens);
    write_components(&mut out, config);
    out
}

fn open_class(out: &mut String, name: &str) {
    let _ = writeln!(out, "class {name} {{");
    let _ = writeln!(out, "  {name}._();\n");
}

fn write_colors(out: &mut String, class: &str, colors: &ColorMode) {
    open_class(out, class);
    for (key, value) in colors.iter() {
        let _ = writeln!(
            out,
            "  static const Color {} = {};",
            camel(key.field_name()),
            color(value)
        );
    }
    out.push_str("}\n\n");
}

fn write_typography(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    open_class(out, "DesignTypography");
    let _ = writeln!(out, "  static const String scale = {};", string(&typography.scale));
    for (name, stack) in [
        ("fontSans", &typography.font_family.sans),
        ("fontHeading", &typography.font_family.heading),
        ("fontMono", &typography.font_family.mono),
    ] {
        let _ = writeln!(out, "  static const String {name} = {};", string(stack));
    }
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(
            out,
            "  static const double size{} = {};",
            pascal(name),
            double(size)
        );
    }
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(
            out,
            "  static const FontWeight weight{} = FontWeight.w{};",
            pascal(name),
            weight_step(weight)
        );
    }
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(
            out,
            "  static const double lineHeight{} = {};",
            pascal(name),
            double(height)
        );
    }
    out.push_str("}\n\n");
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    open_class(out, "DesignSpacing");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(out, "  static const double {} = {};", camel(token.name()), double(value));
    }
    out.push_str("}\n\n");

    open_class(out, "DesignRadius");
    match &tokens.radius {
        Some(radius) => {
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "  static const double {} = {};", token.name(), double(value));
            }
        }
        None => out.push_str("  // not selected\n"),
    }
    out.push_str("}\n\n");

    open_class(out, "DesignShadows");
    match &tokens.shadows {
        Some(shadows) => {
            for (token, shadow) in shadows.iter() {
                if shadow.is_none() {
                    let _ = writeln!(out, "  static const List<BoxShadow> {} = [];", token.name());
                    continue;
                }
                let _ = writeln!(
                    out,
                    "  static const List<BoxShadow> {} = [\n    BoxShadow(color: {}, offset: Offset({}, {}), blurRadius: {}, spreadRadius: {}),\n  ];",
                    token.name(),
                    argb(shadow.rgba()),
                    double(shadow.offset_x),
                    double(shadow.offset_y),
                    double(shadow.blur),
                    double(shadow.spread)
                );
            }
        }
        None => out.push_str("  // not selected\n"),
    }
    out.push_str("}\n\n");
}

fn write_components(out: &mut String, config: &DesignConfig) {
    open_class(out, "DesignComponents");
    if config.components.is_empty() {
        out.push_str("  // none selected\n");
    }
    for (category, item) in &config.components {
        let _ = writeln!(out, "  /// {}: {}", line(&item.name), line(&item.description));
        let _ = writeln!(
            out,
            "  static const Map<String, Map<String, String>> {} = {{",
            camel(category)
        );
        for (record, props) in &item.data.styles {
            let _ = writeln!(out, "    {}: {{", string(record));
            for (prop, value) in props {
                let _ = writeln!(out, "      {}: {},", string(prop), string(value));
            }
            out.push_str("    },\n");
        }
        out.push_str("  };\n");
    }
    out.push_str("}\n");
}

fn color(value: &str) -> String {
    match Rgba::parse(value) {
        Some(c) => argb(c),
        None => format!("Color(0x00000000) /* unparsed: {} */", value.replace("*/", "* /")),
    }
}

fn argb(c: Rgba) -> String {
    format!("Color(0x{:08X})", c.to_argb())
}

/// Dart `double` literal; integral values keep a `.0`
fn double(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `FontWeight.w100` through `w900`
fn weight_step(weight: u16) -> u16 {
    (weight.saturating_add(50) / 100).clamp(1, 9) * 100
}

/// Single-quoted Dart string; `$` would start interpolation
fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_tokens::{build_config, Catalog, DesignKitState};

    #[test]
    fn classes_with_private_constructors() {
        let dart = encode(&build_config(&Catalog::builtin(), &DesignKitState::new()));
        assert!(dart.contains("class DesignColorsLight {\n  DesignColorsLight._();\n\n"));
        assert!(dart.contains("  static const Color surfaceAlt = Color(0xFFF1F5F9);\n"));
        assert!(dart.contains("  static const double sizeBase = 16.0;\n"));
        assert!(dart.contains("  static const FontWeight weightSemibold = FontWeight.w600;\n"));
        assert!(dart.contains("  static const double xxl = 48.0;\n"));
        assert!(dart.contains("class DesignRadius {\n  DesignRadius._();\n\n  // not selected\n}"));
        assert_eq!(dart.matches('{').count(), dart.matches('}').count());
    }

    #[test]
    fn shadows_and_component_maps() {
        let state = DesignKitState::new()
            .with_selection("shadows", "flat")
            .with_selection("sidebars", "minimal");
        let dart = encode(&build_config(&Catalog::builtin(), &state));
        assert!(dart.contains("  static const List<BoxShadow> md = [];\n"));
        assert!(dart.contains("  static const Map<String, Map<String, String>> sidebars = {\n"));
        assert!(dart.contains("    'item-active': {\n      'background': 'rgba(59,130,246,0.1)',\n"));
    }

    #[test]
    fn helpers() {
        assert_eq!(double(4.0), "4.0");
        assert_eq!(double(11.11), "11.11");
        assert_eq!(weight_step(450), 500);
        assert_eq!(weight_step(40), 100);
        assert_eq!(string("a'$b"), "'a\\'\\$b'");
    }
}
