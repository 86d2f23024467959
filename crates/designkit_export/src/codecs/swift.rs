//! SwiftUI constants
//!
//! Everything hangs off a caseless `DesignTokens` enum: PascalCase
//! namespaces, camelCase `static let` members.

use std::fmt::Write as _;

use designkit_tokens::{ColorMode, DesignConfig, DesignTokens, Rgba, Shadow};

use super::GENERATED;
use crate::case::{camel, pascal};

const KEYWORDS: [&str; 58] = [
    "Any", "Self", "as", "associatedtype", "await", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "precedencegroup", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try", "typealias", "var",
    "where", "while", "_", "async", "some",
];

/// Members every component enum declares before its records
const COMPONENT_MEMBERS: [&str; 2] = ["id", "name"];

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED}");
    out.push_str("\nimport SwiftUI\n\n");

    out.push_str("public struct ShadowStyle {\n");
    out.push_str("    public let color: Color\n");
    out.push_str("    public let radius: CGFloat\n");
    out.push_str("    public let x: CGFloat\n");
    out.push_str("    public let y: CGFloat\n");
    out.push_str("}\n\n");

    out.push_str("public enum DesignTokens {\n");
    out.push_str("    public enum Colors {\n");
    write_colors(&mut out, "Light", &tokens.colors.light);
    write_colors(&mut out, "Dark", &tokens.colors.dark);
    out.push_str("    }\n\n");
    write_typography(&mut out, tokens);
    write_scales(&mut out, tokens);
    write_components(&mut out, config);
    out.push_str("}\n");
    out
}

fn write_colors(out: &mut String, name: &str, colors: &ColorMode) {
    let _ = writeln!(out, "        public enum {name} {{");
    for (key, value) in colors.iter() {
        let _ = writeln!(
            out,
            "            public static let {} = {}",
            ident(&camel(key.field_name())),
            color(value)
        );
    }
    out.push_str("        }\n");
}

fn write_typography(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    out.push_str("    public enum FontFamily {\n");
    for (name, stack) in [
        ("sans", &typography.font_family.sans),
        ("heading", &typography.font_family.heading),
        ("mono", &typography.font_family.mono),
    ] {
        let _ = writeln!(out, "        public static let {name} = {}", string(stack));
    }
    out.push_str("    }\n\n");

    out.push_str("    public enum FontSize {\n");
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "        public static let {}: CGFloat = {size}", ident(&camel(name)));
    }
    out.push_str("    }\n\n");

    out.push_str("    public enum FontWeight {\n");
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(out, "        public static let {name}: Font.Weight = .{}", weight_name(weight));
    }
    out.push_str("    }\n\n");

    out.push_str("    public enum LineHeight {\n");
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(out, "        public static let {name}: CGFloat = {height}");
    }
    out.push_str("    }\n\n");
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    out.push_str("    public enum Spacing {\n");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(
            out,
            "        public static let {}: CGFloat = {value}",
            ident(&camel(token.name()))
        );
    }
    out.push_str("    }\n\n");

    out.push_str("    public enum Radius {\n");
    match &tokens.radius {
        Some(radius) => {
            for (token, value) in radius.iter() {
                let _ = writeln!(
                    out,
                    "        public static let {}: CGFloat = {value}",
                    ident(token.name())
                );
            }
        }
        None => out.push_str("        // not selected\n"),
    }
    out.push_str("    }\n\n");

    out.push_str("    public enum Shadows {\n");
    match &tokens.shadows {
        Some(shadows) => {
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(
                    out,
                    "        public static let {} = {}",
                    token.name(),
                    shadow_style(shadow)
                );
            }
        }
        None => out.push_str("        // not selected\n"),
    }
    out.push_str("    }\n\n");
}

fn write_components(out: &mut String, config: &DesignConfig) {
    out.push_str("    public enum Components {\n");
    if config.components.is_empty() {
        out.push_str("        // none selected\n");
    }
    for (category, item) in &config.components {
        let _ = writeln!(out, "        /// {}", line(&item.description));
        let _ = writeln!(out, "        public enum {} {{", pascal(category));
        let _ = writeln!(out, "            public static let id = {}", string(&item.id));
        let _ = writeln!(out, "            public static let name = {}", string(&item.name));
        for (record, props) in &item.data.styles {
            let _ = write!(
                out,
                "            public static let {}: [String: String] = [",
                record_member(record)
            );
            if props.is_empty() {
                out.push(':');
            }
            for (i, (prop, value)) in props.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: {}", string(prop), string(value));
            }
            out.push_str("]\n");
        }
        out.push_str("        }\n");
    }
    out.push_str("    }\n");
}

/// `Color(red:green:blue:opacity:)`, or `.clear` with the literal noted
fn color(value: &str) -> String {
    match Rgba::parse(value) {
        Some(c) => rgba_color(c),
        None => format!("Color.clear // unparsed: {}", line(value)),
    }
}

fn rgba_color(c: Rgba) -> String {
    format!(
        "Color(red: {:.3}, green: {:.3}, blue: {:.3}, opacity: {:.3})",
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
        c.a
    )
}

fn shadow_style(shadow: &Shadow) -> String {
    format!(
        "ShadowStyle(color: {}, radius: {}, x: {}, y: {})",
        rgba_color(shadow.rgba()),
        shadow.blur / 2.0,
        shadow.offset_x,
        shadow.offset_y
    )
}

fn weight_name(weight: u16) -> &'static str {
    match weight {
        0..=149 => "ultraLight",
        150..=249 => "thin",
        250..=349 => "light",
        350..=449 => "regular",
        450..=549 => "medium",
        550..=649 => "semibold",
        650..=749 => "bold",
        750..=849 => "heavy",
        _ => "black",
    }
}

fn ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Record name as a member; `Style` is appended where it would shadow `id` or `name`
fn record_member(record: &str) -> String {
    let name = camel(record);
    if COMPONENT_MEMBERS.contains(&name.as_str()) {
        format!("{name}Style")
    } else {
        ident(&name)
    }
}

/// Double-quoted Swift string literal
fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
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
    fn namespaces_are_pascal_members_camel() {
        let swift = encode(&build_config(&Catalog::builtin(), &DesignKitState::new()));
        assert!(swift.contains("    public enum Colors {\n        public enum Light {\n"));
        assert!(swift.contains(
            "            public static let primaryForeground = Color(red: 1.000, green: 1.000, blue: 1.000, opacity: 1.000)\n"
        ));
        assert!(swift.contains("        public static let xxl: CGFloat = "));
        assert!(swift.contains("        public static let semibold: Font.Weight = .semibold\n"));
        assert!(swift.contains("    public enum Radius {\n        // not selected\n    }"));
        assert!(swift.contains("    public enum Components {\n        // none selected\n    }"));
        assert_eq!(swift.matches('{').count(), swift.matches('}').count());
    }

    #[test]
    fn component_records_are_dictionaries() {
        let state = DesignKitState::new()
            .with_selection("navbars", "brand")
            .with_selection("shadows", "flat");
        let swift = encode(&build_config(&Catalog::builtin(), &state));
        assert!(swift.contains("        public enum Navbars {\n"));
        assert!(swift.contains(
            "            public static let linkActive: [String: String] = [\"background\": \"rgba(139,92,246,0.25)\", \"color\": \"#ffffff\"]\n"
        ));
        assert!(swift.contains(
            "        public static let sm = ShadowStyle(color: Color(red: 0.000, green: 0.000, blue: 0.000, opacity: 0.000), radius: 0, x: 0, y: 0)\n"
        ));
    }

    #[test]
    fn records_never_shadow_component_members() {
        let state = DesignKitState::new().with_selection("buttons", "solid");
        let mut config = build_config(&Catalog::builtin(), &state);
        let styles = &mut config.components["buttons"].data.styles;
        for record in ["id", "name", "static"] {
            styles.insert(record.into(), [("color".to_string(), "red".to_string())].into());
        }
        let swift = encode(&config);
        assert_eq!(swift.matches("public static let id ").count(), 1);
        assert_eq!(swift.matches("public static let name ").count(), 1);
        assert!(swift.contains("            public static let idStyle: [String: String] = ["));
        assert!(swift.contains("            public static let nameStyle: [String: String] = ["));
        assert!(swift.contains("            public static let `static`: [String: String] = ["));
    }

    #[test]
    fn escaping_and_fallbacks() {
        assert_eq!(string("say \"hi\"\\"), "\"say \\\"hi\\\"\\\\\"");
        assert_eq!(ident("default"), "`default`");
        for word in ["static", "public", "switch", "where", "while", "var", "true", "try"] {
            assert_eq!(ident(word), format!("`{word}`"));
        }
        for word in ["throw", "guard", "repeat", "protocol", "super"] {
            assert_eq!(ident(word), format!("`{word}`"));
        }
        assert_eq!(color("not-a-color"), "Color.clear // unparsed: not-a-color");
    }
}
