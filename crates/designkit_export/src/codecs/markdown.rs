//! Markdown brief for coding assistants
//!
//! Meant to be dropped into a project as `CLAUDE.md` (or pasted into a
//! prompt): every token in a table, and for each selected category its
//! human name, what the category is for, and the resolved styles.

use std::fmt::Write as _;

use designkit_tokens::{DesignConfig, DesignTokens, ResolvedItem};

pub fn encode(config: &DesignConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::new();
    out.push_str("# Design System\n\n");
    out.push_str(
        "Generated by designkit. Use these tokens instead of hard-coded values \
         when writing UI code for this project.\n\n",
    );

    write_colors(&mut out, tokens);
    write_typography(&mut out, tokens);
    write_scales(&mut out, tokens);
    write_components(&mut out, config);
    write_guidelines(&mut out, tokens);
    out
}

fn write_colors(out: &mut String, tokens: &DesignTokens) {
    out.push_str("## Colors\n\n");
    out.push_str("| Token | Light | Dark |\n");
    out.push_str("|---|---|---|\n");
    let dark = &tokens.colors.dark;
    for (key, light) in tokens.colors.light.iter() {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            code(key.as_str()),
            code(light),
            code(dark.get(key))
        );
    }
    out.push('\n');
}

fn write_typography(out: &mut String, tokens: &DesignTokens) {
    let typography = &tokens.typography;
    out.push_str("## Typography\n\n");
    let _ = writeln!(
        out,
        "- Scale: {} (base {}px)",
        code(&typography.scale),
        typography.font_size.base
    );
    let _ = writeln!(out, "- Body: {}", code(&typography.font_family.sans));
    let _ = writeln!(out, "- Headings: {}", code(&typography.font_family.heading));
    let _ = writeln!(out, "- Code: {}", code(&typography.font_family.mono));
    out.push('\n');

    out.push_str("| Size | px |\n");
    out.push_str("|---|---|\n");
    for (name, size) in typography.font_size.iter() {
        let _ = writeln!(out, "| {} | {size} |", code(name));
    }
    out.push('\n');

    let weights: Vec<String> = typography
        .font_weight
        .iter()
        .map(|(name, weight)| format!("{name} {weight}"))
        .collect();
    let _ = writeln!(out, "Weights: {}.", weights.join(", "));
    let heights: Vec<String> = typography
        .line_height
        .iter()
        .map(|(name, height)| format!("{name} {height}"))
        .collect();
    let _ = writeln!(out, "Line heights: {}.\n", heights.join(", "));
}

fn write_scales(out: &mut String, tokens: &DesignTokens) {
    out.push_str("## Spacing\n\n");
    out.push_str("| Token | px |\n");
    out.push_str("|---|---|\n");
    for (token, value) in tokens.spacing.iter() {
        let _ = writeln!(out, "| {} | {value} |", code(token.name()));
    }
    out.push('\n');

    out.push_str("## Radius\n\n");
    match &tokens.radius {
        Some(radius) => {
            out.push_str("| Token | px |\n");
            out.push_str("|---|---|\n");
            for (token, value) in radius.iter() {
                let _ = writeln!(out, "| {} | {value} |", code(token.name()));
            }
        }
        None => out.push_str("_Not selected. Keep whatever corner radii the project already uses._\n"),
    }
    out.push('\n');

    out.push_str("## Shadows\n\n");
    match &tokens.shadows {
        Some(shadows) => {
            out.push_str("| Token | CSS |\n");
            out.push_str("|---|---|\n");
            for (token, shadow) in shadows.iter() {
                let _ = writeln!(out, "| {} | {} |", code(token.name()), code(&shadow.to_css()));
            }
        }
        None => out.push_str("_Not selected. Keep whatever elevation the project already uses._\n"),
    }
    out.push('\n');
}

fn write_components(out: &mut String, config: &DesignConfig) {
    out.push_str("## Components\n\n");
    if config.components.is_empty() {
        out.push_str(
            "_No selections yet. Make a selection in designkit first, then export again._\n\n",
        );
        return;
    }
    for item in config.components.values() {
        write_component(out, item);
    }
}

fn write_component(out: &mut String, item: &ResolvedItem) {
    let _ = writeln!(out, "### {}\n", inline(&item.category_name));
    let _ = writeln!(out, "{}\n", inline(&item.category_description));
    let _ = writeln!(
        out,
        "**{}**: {}\n",
        inline(&item.name),
        inline(&item.description)
    );
    if item.data.styles.is_empty() {
        return;
    }
    let mut block = String::new();
    for (record, props) in &item.data.styles {
        let _ = writeln!(block, "{record} {{");
        for (prop, value) in props {
            let _ = writeln!(block, "  {prop}: {value};");
        }
        block.push_str("}\n");
    }
    let fence = fence_for(&block);
    let _ = write!(out, "{fence}css\n{block}{fence}\n\n");
}

/// Backtick fence longer than any backtick run inside `content`
fn fence_for(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

fn write_guidelines(out: &mut String, tokens: &DesignTokens) {
    out.push_str("## Guidelines\n\n");
    out.push_str("- Reference color tokens by name; never introduce new hex values.\n");
    out.push_str("- Support both modes: every color above has a light and a dark value.\n");
    let _ = writeln!(
        out,
        "- Use {} for primary actions and {} for text placed on it.",
        code("primary"),
        code("primaryForeground")
    );
    out.push_str("- Keep padding and gaps on the spacing scale.\n");
    if tokens.radius.is_some() {
        out.push_str("- Round corners with the radius tokens only.\n");
    }
    if tokens.shadows.is_some() {
        out.push_str("- Express elevation with the shadow tokens only.\n");
    }
}

/// Inline code span that survives backticks and table pipes
fn code(text: &str) -> String {
    let text = text.replace('|', "\\|");
    if text.contains('`') {
        format!("`` {text} ``")
    } else {
        format!("`{text}`")
    }
}

/// Single-line text
fn inline(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_tokens::{build_config, Catalog, DesignKitState};

    #[test]
    fn lists_every_selected_category_with_its_description() {
        let catalog = Catalog::builtin();
        let state = DesignKitState::new()
            .with_selection("palette", "catppuccin")
            .with_selection("buttons", "outline")
            .with_selection("navbars", "glass");
        let md = encode(&build_config(&catalog, &state));

        for (category, id) in &state.selections {
            let cat = catalog.category(category).unwrap();
            let item = catalog.item(category, id).unwrap();
            assert!(md.contains(&format!("### {}\n\n{}\n", cat.name, cat.description)));
            assert!(md.contains(&format!("**{}**: {}", item.name, item.description)));
        }
        assert!(md.contains("```css\nfocus {\n  box-shadow: 0 0 0 3px rgba(30,102,245,0.2);\n}\n"));
    }

    #[test]
    fn empty_config_explains_next_step() {
        let md = encode(&build_config(&Catalog::builtin(), &DesignKitState::new()));
        assert!(md.starts_with("# Design System\n"));
        assert!(md.contains("| `primary` | `#3b82f6` | `#60a5fa` |\n"));
        assert!(md.contains("| `semantic.info` | `#0ea5e9` | `#38bdf8` |\n"));
        assert!(md.contains("Make a selection in designkit first"));
        assert!(md.contains("## Radius\n\n_Not selected."));
    }

    #[test]
    fn style_values_cannot_close_the_fence() {
        let state = DesignKitState::new().with_selection("cards", "bordered");
        let mut config = build_config(&Catalog::builtin(), &state);
        config.components["cards"]
            .data
            .styles
            .insert("note".into(), [("content".to_string(), "'```'".to_string())].into());
        let md = encode(&config);
        assert!(md.contains("````css\n"));
        assert!(md.contains("  content: '```';\n"));
        assert!(md.contains("}\n````\n\n"));
        assert_eq!(md.matches("````").count(), 2);
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("a ```` b"), "`````");
    }

    #[test]
    fn code_spans_escape_pipes_and_backticks() {
        assert_eq!(code("a|b"), "`a\\|b`");
        assert_eq!(code("x`y"), "`` x`y ``");
    }
}
