//! The catalog shipped with designkit

use super::categories::*;
use super::palettes;
use super::{CatalogItem, Category, ItemData, StyleSheet};
use crate::tokens::{FontFamilies, RadiusTokens, ShadowTokens, SpacingTokens};

/// Bumped whenever items are added, removed or restyled
pub(super) const VERSION: u32 = 3;

type Records<'a> = &'a [(&'a str, &'a [(&'a str, &'a str)])];

fn styles(records: Records<'_>) -> StyleSheet {
    records
        .iter()
        .map(|(record, props)| {
            let props = props
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (record.to_string(), props)
        })
        .collect()
}

fn item(category: &str, id: &str, name: &str, description: &str, data: ItemData) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        category: category.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        data,
    }
}

fn styled(records: Records<'_>) -> ItemData {
    ItemData {
        styles: styles(records),
        ..Default::default()
    }
}

fn category(id: &str, name: &str, description: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        category(PALETTE, "Color Palette", "Base colors for light and dark mode"),
        category(TYPOGRAPHY, "Typography", "Font families for body, headings and code"),
        category(SPACING, "Spacing", "Spacing scale for padding, gaps and margins"),
        category(RADIUS, "Corner Radius", "How rounded controls and surfaces are"),
        category(SHADOWS, "Shadows", "Elevation scale for layered surfaces"),
        category(BUTTONS, "Buttons", "Primary action button treatment"),
        category(CARDS, "Cards", "Container style for grouped content"),
        category(INPUTS, "Inputs", "Text field and select styling"),
        category(SIDEBARS, "Sidebars", "Navigation sidebar layout and emphasis"),
        category(TABLES, "Tables", "Data table density and row treatment"),
        category(NAVBARS, "Navigation Bars", "Top bar surface and active link style"),
    ]
}

pub(super) fn items() -> Vec<CatalogItem> {
    let mut items = Vec::new();
    items.extend(palette_items());
    items.extend(typography_items());
    items.extend(spacing_items());
    items.extend(radius_items());
    items.extend(shadow_items());
    items.extend(button_items());
    items.extend(card_items());
    items.extend(input_items());
    items.extend(sidebar_items());
    items.extend(table_items());
    items.extend(navbar_items());
    items
}

fn palette_items() -> Vec<CatalogItem> {
    let palette = |p| ItemData {
        palette: Some(p),
        ..Default::default()
    };
    vec![
        item(PALETTE, "neutral", "Neutral", "True grays with a near-black primary", palette(palettes::neutral())),
        item(PALETTE, "slate", "Slate", "Cool blue-tinted grays", palette(palettes::slate())),
        item(PALETTE, "zinc", "Zinc", "Slightly warm grays with crisp contrast", palette(palettes::zinc())),
        item(PALETTE, "catppuccin", "Catppuccin", "Pastel Latte for light mode, Mocha for dark", palette(palettes::catppuccin())),
        item(PALETTE, "ocean", "Ocean", "Sky-blue brand with a teal accent over the default neutrals", palette(palettes::ocean())),
    ]
}

fn typography_items() -> Vec<CatalogItem> {
    let fonts = |sans: &str, heading: &str, mono: &str| ItemData {
        typography: Some(FontFamilies {
            sans: sans.to_string(),
            heading: heading.to_string(),
            mono: mono.to_string(),
        }),
        ..Default::default()
    };
    vec![
        item(
            TYPOGRAPHY,
            "system",
            "System",
            "Native platform fonts, zero download cost",
            ItemData {
                typography: Some(FontFamilies::default()),
                ..Default::default()
            },
        ),
        item(
            TYPOGRAPHY,
            "inter",
            "Inter",
            "Inter for everything, tuned for dense interfaces",
            fonts(
                "\"Inter\", system-ui, sans-serif",
                "\"Inter\", system-ui, sans-serif",
                "\"JetBrains Mono\", ui-monospace, monospace",
            ),
        ),
        item(
            TYPOGRAPHY,
            "editorial",
            "Editorial",
            "Serif headings over a humanist sans body",
            fonts(
                "\"Source Sans 3\", system-ui, sans-serif",
                "\"Fraunces\", Georgia, serif",
                "\"IBM Plex Mono\", ui-monospace, monospace",
            ),
        ),
        item(
            TYPOGRAPHY,
            "geometric",
            "Geometric",
            "Rounded geometric sans for friendly products",
            fonts(
                "\"Plus Jakarta Sans\", system-ui, sans-serif",
                "\"Outfit\", system-ui, sans-serif",
                "\"Fira Code\", ui-monospace, monospace",
            ),
        ),
    ]
}

fn spacing_items() -> Vec<CatalogItem> {
    let spacing = |unit| ItemData {
        spacing: Some(SpacingTokens::from_unit(unit)),
        ..Default::default()
    };
    vec![
        item(SPACING, "compact", "Compact", "3px rhythm for data-heavy screens", spacing(3.0)),
        item(SPACING, "comfortable", "Comfortable", "The standard 4px rhythm", spacing(4.0)),
        item(SPACING, "spacious", "Spacious", "6px rhythm for marketing and reading layouts", spacing(6.0)),
    ]
}

fn radius_items() -> Vec<CatalogItem> {
    let radius = |tokens: RadiusTokens, control: &str| ItemData {
        radius: Some(tokens),
        styles: styles(&[
            ("control", &[("border-radius", control)]),
            ("focus", &[("outline", "2px solid __primary-50"), ("outline-offset", "2px")]),
        ]),
        ..Default::default()
    };
    vec![
        item(RADIUS, "sharp", "Sharp", "Square corners everywhere", radius(RadiusTokens::new(0.0, 0.0, 0.0, 0.0), "0px")),
        item(RADIUS, "subtle", "Subtle", "Barely softened corners", radius(RadiusTokens::new(2.0, 4.0, 6.0, 8.0), "4px")),
        item(RADIUS, "rounded", "Rounded", "Friendly medium rounding", radius(RadiusTokens::default(), "8px")),
        item(RADIUS, "pill", "Pill", "Fully rounded controls, generous surfaces", radius(RadiusTokens::new(8.0, 12.0, 16.0, 24.0), "9999px")),
    ]
}

fn shadow_items() -> Vec<CatalogItem> {
    let shadows = |tokens| ItemData {
        shadows: Some(tokens),
        ..Default::default()
    };
    vec![
        item(SHADOWS, "flat", "Flat", "No elevation; separation through borders", shadows(ShadowTokens::flat())),
        item(SHADOWS, "soft", "Soft", "Gentle, diffuse elevation", shadows(ShadowTokens::soft())),
        item(SHADOWS, "dramatic", "Dramatic", "Deep shadows for strong layering", shadows(ShadowTokens::dramatic())),
    ]
}

fn button_items() -> Vec<CatalogItem> {
    vec![
        item(
            BUTTONS,
            "solid",
            "Solid",
            "Filled primary buttons with a soft focus ring",
            styled(&[
                ("root", &[("background", "__primary"), ("color", "__primaryForeground"), ("border", "1px solid __primary")]),
                ("hover", &[("background", "__primary-90")]),
                ("focus", &[("box-shadow", "0 0 0 3px __primary-30")]),
            ]),
        ),
        item(
            BUTTONS,
            "outline",
            "Outline",
            "Transparent buttons with a primary border",
            styled(&[
                ("root", &[("background", "transparent"), ("color", "__primary"), ("border", "1px solid __primary")]),
                ("hover", &[("background", "__primary-10")]),
                ("focus", &[("box-shadow", "0 0 0 3px __primary-20")]),
            ]),
        ),
        item(
            BUTTONS,
            "soft",
            "Soft",
            "Tinted background with primary text",
            styled(&[
                ("root", &[("background", "__primary-15"), ("color", "__primary"), ("border", "1px solid transparent")]),
                ("hover", &[("background", "__primary-25")]),
            ]),
        ),
        item(
            BUTTONS,
            "gradient",
            "Gradient",
            "Primary to accent gradient for hero actions",
            styled(&[
                ("root", &[("background", "linear-gradient(135deg, __primary, __accent)"), ("color", "__primaryForeground"), ("border", "none")]),
                ("hover", &[("box-shadow", "0 8px 24px -8px __accent-60")]),
            ]),
        ),
    ]
}

fn card_items() -> Vec<CatalogItem> {
    vec![
        item(
            CARDS,
            "bordered",
            "Bordered",
            "Flat surface outlined by the border color",
            styled(&[("root", &[("background", "__surface"), ("border", "1px solid __border"), ("color", "__text")])]),
        ),
        item(
            CARDS,
            "elevated",
            "Elevated",
            "Borderless surface lifted with a shadow",
            styled(&[("root", &[("background", "__surface"), ("border", "none"), ("box-shadow", "0 4px 12px -2px rgba(0,0,0,0.08)")])]),
        ),
        item(
            CARDS,
            "tinted",
            "Tinted",
            "Alternate surface with a faint primary edge",
            styled(&[
                ("root", &[("background", "__surfaceAlt"), ("border", "1px solid __primary-15"), ("color", "__text")]),
                ("header", &[("color", "__textSecondary"), ("border-bottom", "1px solid __border")]),
            ]),
        ),
    ]
}

fn input_items() -> Vec<CatalogItem> {
    vec![
        item(
            INPUTS,
            "outlined",
            "Outlined",
            "Bordered fields with a primary focus ring",
            styled(&[
                ("root", &[("background", "__background"), ("border", "1px solid __border"), ("color", "__text")]),
                ("placeholder", &[("color", "__textMuted")]),
                ("focus", &[("border-color", "__primary"), ("box-shadow", "0 0 0 3px __primary-20")]),
            ]),
        ),
        item(
            INPUTS,
            "filled",
            "Filled",
            "Tinted fields without a resting border",
            styled(&[
                ("root", &[("background", "__surfaceAlt"), ("border", "1px solid transparent"), ("color", "__text")]),
                ("placeholder", &[("color", "__textMuted")]),
                ("focus", &[("background", "__background"), ("border-color", "__primary")]),
            ]),
        ),
        item(
            INPUTS,
            "underline",
            "Underline",
            "Minimal fields with only a bottom rule",
            styled(&[
                ("root", &[("background", "transparent"), ("border", "none"), ("border-bottom", "1px solid __border"), ("color", "__text")]),
                ("focus", &[("border-bottom", "2px solid __primary")]),
            ]),
        ),
    ]
}

fn sidebar_items() -> Vec<CatalogItem> {
    vec![
        item(
            SIDEBARS,
            "minimal",
            "Minimal",
            "Sidebar blends with the page, active item tinted",
            styled(&[
                ("root", &[("background", "__background"), ("border-right", "1px solid __border"), ("width", "240px")]),
                ("item", &[("color", "__textSecondary"), ("padding", "6px 12px")]),
                ("item-active", &[("background", "__primary-10"), ("color", "__primary")]),
            ]),
        ),
        item(
            SIDEBARS,
            "surface",
            "Surface",
            "Sidebar on the surface color with a strong active pill",
            styled(&[
                ("root", &[("background", "__surface"), ("border-right", "1px solid __border"), ("width", "256px")]),
                ("item", &[("color", "__text"), ("padding", "8px 12px")]),
                ("item-active", &[("background", "__primary"), ("color", "__primaryForeground")]),
            ]),
        ),
        item(
            SIDEBARS,
            "rail",
            "Icon Rail",
            "Narrow icon-only rail with an accent indicator",
            styled(&[
                ("root", &[("background", "__surfaceAlt"), ("width", "64px")]),
                ("item", &[("color", "__textMuted"), ("padding", "12px")]),
                ("item-active", &[("color", "__accent"), ("box-shadow", "inset 3px 0 0 __accent")]),
            ]),
        ),
    ]
}

fn table_items() -> Vec<CatalogItem> {
    vec![
        item(
            TABLES,
            "striped",
            "Striped",
            "Alternating row backgrounds for scanning",
            styled(&[
                ("header", &[("background", "__surfaceAlt"), ("color", "__textSecondary"), ("font-weight", "600")]),
                ("row", &[("border-bottom", "1px solid __border")]),
                ("row-alt", &[("background", "__surface")]),
                ("row-hover", &[("background", "__primary-5")]),
            ]),
        ),
        item(
            TABLES,
            "bordered",
            "Bordered",
            "Full grid lines around every cell",
            styled(&[
                ("header", &[("background", "__surface"), ("color", "__text"), ("border", "1px solid __border")]),
                ("cell", &[("border", "1px solid __border"), ("padding", "8px 12px")]),
            ]),
        ),
        item(
            TABLES,
            "minimal",
            "Minimal",
            "Header rule only, relaxed row height",
            styled(&[
                ("header", &[("color", "__textMuted"), ("border-bottom", "1px solid __border"), ("text-transform", "uppercase")]),
                ("cell", &[("padding", "12px 16px")]),
                ("row-hover", &[("background", "__surfaceAlt")]),
            ]),
        ),
    ]
}

fn navbar_items() -> Vec<CatalogItem> {
    vec![
        item(
            NAVBARS,
            "solid",
            "Solid",
            "Opaque bar on the surface color",
            styled(&[
                ("root", &[("background", "__surface"), ("border-bottom", "1px solid __border"), ("height", "56px")]),
                ("link", &[("color", "__textSecondary")]),
                ("link-active", &[("color", "__primary")]),
            ]),
        ),
        item(
            NAVBARS,
            "glass",
            "Glass",
            "Translucent blurred bar over scrolling content",
            styled(&[
                ("root", &[("background", "rgba(255,255,255,0.7)"), ("backdrop-filter", "blur(12px)"), ("border-bottom", "1px solid __border")]),
                ("link", &[("color", "__text")]),
                ("link-active", &[("color", "__primary"), ("box-shadow", "inset 0 -2px 0 __primary")]),
            ]),
        ),
        item(
            NAVBARS,
            "brand",
            "Brand",
            "Primary-colored bar with inverted text",
            styled(&[
                ("root", &[("background", "__primary"), ("height", "60px")]),
                ("link", &[("color", "__primaryForeground")]),
                ("link-active", &[("background", "__accent-25"), ("color", "__primaryForeground")]),
            ]),
        ),
    ]
}
