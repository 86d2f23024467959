//! Jetpack Compose constants
//!
//! One `DesignTokens` object with nested objects per group; members are
//! PascalCase `val`s as Compose theme files conventionally spell them.

use std::fmt::Write as _;

use designkit_tokens::{ColorMode, DesignConfig, DesignTokens, Rgba};

use super::GENERATED;
use crate::case::pascal;

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED}");
    out.push_str("\npackage designkit.tokens\n\n");
    out.push_str("import androidx.compose.ui.graphics.Color\n");
    out.push_str("import androidx.compose.ui.text.font.FontWeight\n");
    out.push_str("import androidx.compose.ui.unit.Dp\n");
    out.push_str("import androidx.compose.ui.unit.dp\n");
    out.push_str("import androidx.compose.ui.unit.sp\n\n");

    out.push_str("data class ShadowToken(\n");
    out.push_str("    val offsetX: Dp,\n");
    out.push_str("    val offsetY: Dp,\n");
    out.push_str("    val blur: Dp,\n");
    out.push_str("    val spread: Dp,\n");
    out.push_str("    val color: Color,\n");
    out.push_str(")\n\n");

    out.push_str("object DesignTokens {\n");
    write_colors(&mut out, "LightColors", &tokens.colors.light);
    write_colors(&mut out, "DarkColors", &tokens.colors.dark);
    write_typography(&mut out, tokens);
    write_scales(&mut out, tokens);
    write_components(&mut out, config);
    out.push_str("}\n");
    out
}

fn write_colors(out: &mut String, name: &str, colors: &ColorMode) {
    let _ = writeln!(out, "    object {name} {{");
    for (key, value) in colors.iter() {
        let _ = writeln!(out, "        val {} = {}", pascal(key.field_name()), color(value));
    }
    out.push_str("    }\n\n");
}

fn write_typography(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    out.push_str("    object FontFamilies {\n");
    for (name, stack) in [
        ("Sans", &typography.font_family.sans),
        ("Heading", &typography.font_family.heading),
        ("Mono", &typography.font_family.mono),
    ] {
        let _ = writeln!(out, "        const val {name} = {}", string(stack));
    }
    out.push_str("    }\n\n");

    out.push_str("    object FontSizes {\n");
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "        val {} = {size}.sp", pascal(name));
    }
    out.push_str("    }\n\n");

    out.push_str("    object FontWeights {\n");
    for (name, weight) in typography.font_weight.iter() {
        let _ = writeln!(out, "        val {} = FontWeight({weight})", pascal(name));
    }
    out.push_str("    }\n\n");

    out.push_str("    object LineHeights {\n");
    for (name, height) in typography.line_height.iter() {
        let _ = writeln!(out, "        const val {} = {}f", pascal(name), height);
    }
    out.push_str("    }\n\n");
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    out.push_str("    object Spacing {\n");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(out, "        val {} = {value}.dp", pascal(token.name()));
    }
    out.push_str("    }\n\n");

    out.push_str("    object Radius {\n");
    match &tokens.radius {
        Some(radius) => {
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "        val {} = {value}.dp", pascal(token.name()));
            }
        }
        None => out.push_str("        // not selected\n"),
    }
    out.push_str("    }\n\n");

    out.push_str("    object Shadows {\n");
    match &tokens.shadows {
        Some(shadows) => {
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(
                    out,
                    "        val {} = ShadowToken({}.dp, {}.dp, {}.dp, {}.dp, {})",
                    pascal(token.name()),
                    shadow.offset_x,
                    shadow.offset_y,
                    shadow.blur,
                    shadow.spread,
                    argb(shadow.rgba())
                );
            }
        }
        None => out.push_str("        // not selected\n"),
    }
    out.push_str("    }\n\n");
}

fn write_components(out: &mut String, config: &DesignConfig) {
    out.push_str("    object Components {\n");
    if config.components.is_empty() {
        out.push_str("        // none selected\n");
    }
    for (category, item) in &config.components {
        let _ = writeln!(out, "        /** {} */", doc(&item.description));
        let _ = writeln!(out, "        object {} {{", pascal(category));
        let _ = writeln!(out, "            const val Id = {}", string(&item.id));
        let _ = writeln!(out, "            const val Name = {}", string(&item.name));
        for (record, props) in &item.data.styles {
            if props.is_empty() {
                let _ = writeln!(
                    out,
                    "            val {} = emptyMap<String, String>()",
                    record_member(record)
                );
                continue;
            }
            let _ = writeln!(out, "            val {} = mapOf(", record_member(record));
            for (prop, value) in props {
                let _ = writeln!(out, "                {} to {},", string(prop), string(value));
            }
            out.push_str("            )\n");
        }
        out.push_str("        }\n");
    }
    out.push_str("    }\n");
}

/// Record name as a member; `Style` is appended where it would shadow `Id` or `Name`
fn record_member(record: &str) -> String {
    let name = pascal(record);
    if matches!(name.as_str(), "Id" | "Name") {
        format!("{name}Style")
    } else {
        name
    }
}

/// `Color(0xAARRGGBB)`, transparent with a note when unparsable
fn color(value: &str) -> String {
    match Rgba::parse(value) {
        Some(c) => argb(c),
        None => format!("Color(0x00000000) // unparsed: {}", value.replace(['\n', '\r'], " ")),
    }
}

fn argb(c: Rgba) -> String {
    format!("Color(0x{:08X})", c.to_argb())
}

/// Double-quoted Kotlin string; `$` would start a template
fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn doc(text: &str) -> String {
    text.replace("*/", "* /").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_tokens::{build_config, Catalog, DesignKitState};

    #[test]
    fn colors_are_argb_literals() {
        let kotlin = encode(&build_config(&Catalog::builtin(), &DesignKitState::new()));
        assert!(kotlin.contains("    object LightColors {\n        val Background = Color(0xFFFFFFFF)\n"));
        assert!(kotlin.contains("        val Primary = Color(0xFF3B82F6)\n"));
        assert!(kotlin.contains("        val Success = Color(0xFF16A34A)\n"));
        assert!(kotlin.contains("        val Xxl = "));
        assert!(kotlin.contains("    object Radius {\n        // not selected\n    }"));
        assert_eq!(kotlin.matches('{').count(), kotlin.matches('}').count());
    }

    #[test]
    fn shadows_and_components() {
        let state = DesignKitState::new()
            .with_selection("shadows", "soft")
            .with_selection("cards", "elevated");
        let kotlin = encode(&build_config(&Catalog::builtin(), &state));
        assert!(kotlin.contains("        val Md = ShadowToken(0.dp, 4.dp, 6.dp, -1.dp, Color(0x1A000000))\n"));
        assert!(kotlin.contains("        object Cards {\n"));
        assert!(kotlin.contains("                \"box-shadow\" to \"0 4px 12px -2px rgba(0,0,0,0.08)\",\n"));
    }

    #[test]
    fn records_never_shadow_component_members() {
        let state = DesignKitState::new().with_selection("cards", "bordered");
        let mut config = build_config(&Catalog::builtin(), &state);
        let styles = &mut config.components["cards"].data.styles;
        styles.insert("id".into(), [("color".to_string(), "red".to_string())].into());
        styles.insert("name".into(), Default::default());
        let kotlin = encode(&config);
        assert_eq!(kotlin.matches("const val Id = ").count(), 1);
        assert_eq!(kotlin.matches("const val Name = ").count(), 1);
        assert!(kotlin.contains("            val IdStyle = mapOf(\n"));
        assert!(kotlin.contains("            val NameStyle = emptyMap<String, String>()\n"));
    }

    #[test]
    fn dollar_signs_are_escaped() {
        assert_eq!(string("$var \"x\""), "\"\\$var \\\"x\\\"\"");
    }
}
