//! Color model merging
//!
//! A resolved [`ColorMode`] is layered per field, highest precedence first:
//!
//! 1. the user's pick for that key in that mode
//! 2. the selected palette's value for that key in that mode
//! 3. the built-in default for that mode
//!
//! Semantic colors use `semantic.<name>` as their pick key and fall back to
//! the palette's nested `semantic` table.

use std::collections::BTreeMap;

use crate::tokens::{ColorKey, ColorMode, ColorSchemes, Mode, PaletteData, SemanticColors};

/// Built-in colors used when neither a pick nor a palette defines a key
pub fn default_color_mode(mode: Mode) -> ColorMode {
    match mode {
        Mode::Light => ColorMode {
            background: "#ffffff".into(),
            surface: "#f8fafc".into(),
            surface_alt: "#f1f5f9".into(),
            border: "#e2e8f0".into(),
            text: "#0f172a".into(),
            text_secondary: "#475569".into(),
            text_muted: "#94a3b8".into(),
            primary: "#3b82f6".into(),
            primary_foreground: "#ffffff".into(),
            secondary: "#64748b".into(),
            secondary_foreground: "#ffffff".into(),
            accent: "#8b5cf6".into(),
            accent_foreground: "#ffffff".into(),
            semantic: SemanticColors {
                success: "#16a34a".into(),
                warning: "#d97706".into(),
                error: "#dc2626".into(),
                info: "#0ea5e9".into(),
            },
        },
        Mode::Dark => ColorMode {
            background: "#0f172a".into(),
            surface: "#1e293b".into(),
            surface_alt: "#273549".into(),
            border: "#334155".into(),
            text: "#f8fafc".into(),
            text_secondary: "#cbd5e1".into(),
            text_muted: "#64748b".into(),
            primary: "#60a5fa".into(),
            primary_foreground: "#0f172a".into(),
            secondary: "#94a3b8".into(),
            secondary_foreground: "#0f172a".into(),
            accent: "#a78bfa".into(),
            accent_foreground: "#0f172a".into(),
            semantic: SemanticColors {
                success: "#22c55e".into(),
                warning: "#f59e0b".into(),
                error: "#f87171".into(),
                info: "#38bdf8".into(),
            },
        },
    }
}

/// Resolve one mode's colors from defaults, an optional palette, and picks
///
/// Blank values (empty or whitespace) are treated as unset at every layer,
/// so the result never carries an empty field.
pub fn merge_color_mode(
    mode: Mode,
    palette: Option<&PaletteData>,
    picks: &BTreeMap<String, String>,
) -> ColorMode {
    let base = palette.map(|p| p.for_mode(mode));
    let mut colors = default_color_mode(mode);

    for key in ColorKey::ALL {
        let picked = picks.get(key.as_str()).map(String::as_str);
        let from_palette = base.and_then(|b| b.get(key));
        if let Some(value) = [picked, from_palette]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
        {
            colors.set(key, value);
        }
    }

    colors
}

/// Resolve both modes at once
pub fn merge_color_schemes(
    palette: Option<&PaletteData>,
    light_picks: &BTreeMap<String, String>,
    dark_picks: &BTreeMap<String, String>,
) -> ColorSchemes {
    ColorSchemes {
        light: merge_color_mode(Mode::Light, palette, light_picks),
        dark: merge_color_mode(Mode::Dark, palette, dark_picks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{PartialColorMode, PartialSemantic, SemanticKey};
    use pretty_assertions::assert_eq;

    fn palette_with_primary(hex: &str) -> PaletteData {
        PaletteData {
            light: PartialColorMode {
                primary: Some(hex.to_string()),
                ..Default::default()
            },
            dark: PartialColorMode::default(),
        }
    }

    fn picks(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_inputs_yield_defaults() {
        for mode in Mode::ALL {
            assert_eq!(
                merge_color_mode(mode, None, &BTreeMap::new()),
                default_color_mode(mode)
            );
        }
    }

    #[test]
    fn every_field_is_populated() {
        let partial = palette_with_primary("#111111");
        let cases = [
            (None, picks(&[])),
            (Some(&partial), picks(&[])),
            (None, picks(&[("accent", "#abcdef")])),
            (Some(&partial), picks(&[("semantic.info", "#123456")])),
        ];
        for (palette, picks) in cases {
            for mode in Mode::ALL {
                let colors = merge_color_mode(mode, palette, &picks);
                for (key, value) in colors.iter() {
                    assert!(!value.is_empty(), "{mode} {key} is empty");
                }
            }
        }
    }

    #[test]
    fn pick_beats_palette_and_unpick_reverts() {
        let palette = palette_with_primary("#111111");
        let mut picked = picks(&[("primary", "#222222")]);

        let colors = merge_color_mode(Mode::Light, Some(&palette), &picked);
        assert_eq!(colors.primary, "#222222");

        picked.remove("primary");
        let colors = merge_color_mode(Mode::Light, Some(&palette), &picked);
        assert_eq!(colors.primary, "#111111");
    }

    #[test]
    fn picks_are_per_mode() {
        let palette = palette_with_primary("#111111");
        let light_picks = picks(&[("primary", "#222222")]);
        let schemes = merge_color_schemes(Some(&palette), &light_picks, &BTreeMap::new());
        assert_eq!(schemes.light.primary, "#222222");
        assert_eq!(schemes.dark.primary, default_color_mode(Mode::Dark).primary);
    }

    #[test]
    fn semantic_layers() {
        let palette = PaletteData {
            light: PartialColorMode {
                semantic: Some(PartialSemantic {
                    success: Some("#00aa00".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            dark: PartialColorMode::default(),
        };
        let colors = merge_color_mode(
            Mode::Light,
            Some(&palette),
            &picks(&[("semantic.error", "#ff0000")]),
        );
        assert_eq!(colors.semantic.get(SemanticKey::Success), "#00aa00");
        assert_eq!(colors.semantic.error, "#ff0000");
        assert_eq!(
            colors.semantic.warning,
            default_color_mode(Mode::Light).semantic.warning
        );
    }

    #[test]
    fn blank_and_unknown_picks_are_ignored() {
        let colors = merge_color_mode(
            Mode::Light,
            None,
            &picks(&[("primary", "  "), ("brand", "#000000")]),
        );
        assert_eq!(colors, default_color_mode(Mode::Light));
    }
}
