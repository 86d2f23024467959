//! Built-in palettes
//!
//! The neutral, slate and zinc palettes follow the shadcn base color presets;
//! catppuccin pairs Latte (light) with Mocha (dark).

use crate::tokens::{PaletteData, PartialColorMode, PartialSemantic};

#[derive(Clone, Copy)]
struct BasePalette {
    background: &'static str,
    surface: &'static str,
    surface_alt: &'static str,
    border: &'static str,
    text: &'static str,
    text_secondary: &'static str,
    text_muted: &'static str,
    primary: &'static str,
    primary_foreground: &'static str,
    secondary: &'static str,
    secondary_foreground: &'static str,
    accent: &'static str,
    accent_foreground: &'static str,
    success: &'static str,
    warning: &'static str,
    error: &'static str,
    info: &'static str,
}

impl BasePalette {
    fn to_partial(self) -> PartialColorMode {
        let s = |v: &str| Some(v.to_string());
        PartialColorMode {
            background: s(self.background),
            surface: s(self.surface),
            surface_alt: s(self.surface_alt),
            border: s(self.border),
            text: s(self.text),
            text_secondary: s(self.text_secondary),
            text_muted: s(self.text_muted),
            primary: s(self.primary),
            primary_foreground: s(self.primary_foreground),
            secondary: s(self.secondary),
            secondary_foreground: s(self.secondary_foreground),
            accent: s(self.accent),
            accent_foreground: s(self.accent_foreground),
            semantic: Some(PartialSemantic {
                success: s(self.success),
                warning: s(self.warning),
                error: s(self.error),
                info: s(self.info),
            }),
        }
    }
}

fn palette(light: BasePalette, dark: BasePalette) -> PaletteData {
    PaletteData {
        light: light.to_partial(),
        dark: dark.to_partial(),
    }
}

pub(super) fn neutral() -> PaletteData {
    palette(
        BasePalette {
            background: "#ffffff",
            surface: "#ffffff",
            surface_alt: "#f5f5f5",
            border: "#e5e5e5",
            text: "#0a0a0a",
            text_secondary: "#525252",
            text_muted: "#737373",
            primary: "#171717",
            primary_foreground: "#fafafa",
            secondary: "#f5f5f5",
            secondary_foreground: "#171717",
            accent: "#f5f5f5",
            accent_foreground: "#171717",
            success: "#16a34a",
            warning: "#d97706",
            error: "#ef4444",
            info: "#0ea5e9",
        },
        BasePalette {
            background: "#0a0a0a",
            surface: "#0a0a0a",
            surface_alt: "#262626",
            border: "#262626",
            text: "#fafafa",
            text_secondary: "#d4d4d4",
            text_muted: "#a3a3a3",
            primary: "#fafafa",
            primary_foreground: "#171717",
            secondary: "#262626",
            secondary_foreground: "#fafafa",
            accent: "#262626",
            accent_foreground: "#fafafa",
            success: "#22c55e",
            warning: "#f59e0b",
            error: "#7f1d1d",
            info: "#38bdf8",
        },
    )
}

pub(super) fn slate() -> PaletteData {
    palette(
        BasePalette {
            background: "#ffffff",
            surface: "#ffffff",
            surface_alt: "#f1f5f9",
            border: "#e2e8f0",
            text: "#020817",
            text_secondary: "#334155",
            text_muted: "#64748b",
            primary: "#0f172a",
            primary_foreground: "#f8fafc",
            secondary: "#f1f5f9",
            secondary_foreground: "#0f172a",
            accent: "#f1f5f9",
            accent_foreground: "#0f172a",
            success: "#16a34a",
            warning: "#d97706",
            error: "#ef4444",
            info: "#0ea5e9",
        },
        BasePalette {
            background: "#020817",
            surface: "#020817",
            surface_alt: "#1e293b",
            border: "#1e293b",
            text: "#f8fafc",
            text_secondary: "#cbd5e1",
            text_muted: "#94a3b8",
            primary: "#f8fafc",
            primary_foreground: "#0f172a",
            secondary: "#1e293b",
            secondary_foreground: "#f8fafc",
            accent: "#1e293b",
            accent_foreground: "#f8fafc",
            success: "#22c55e",
            warning: "#f59e0b",
            error: "#7f1d1d",
            info: "#38bdf8",
        },
    )
}

pub(super) fn zinc() -> PaletteData {
    palette(
        BasePalette {
            background: "#ffffff",
            surface: "#ffffff",
            surface_alt: "#f4f4f5",
            border: "#e4e4e7",
            text: "#09090b",
            text_secondary: "#3f3f46",
            text_muted: "#71717a",
            primary: "#18181b",
            primary_foreground: "#fafafa",
            secondary: "#f4f4f5",
            secondary_foreground: "#18181b",
            accent: "#f4f4f5",
            accent_foreground: "#18181b",
            success: "#16a34a",
            warning: "#d97706",
            error: "#ef4444",
            info: "#0ea5e9",
        },
        BasePalette {
            background: "#09090b",
            surface: "#09090b",
            surface_alt: "#27272a",
            border: "#27272a",
            text: "#fafafa",
            text_secondary: "#d4d4d8",
            text_muted: "#a1a1aa",
            primary: "#fafafa",
            primary_foreground: "#18181b",
            secondary: "#27272a",
            secondary_foreground: "#fafafa",
            accent: "#27272a",
            accent_foreground: "#fafafa",
            success: "#22c55e",
            warning: "#f59e0b",
            error: "#7f1d1d",
            info: "#38bdf8",
        },
    )
}

pub(super) fn catppuccin() -> PaletteData {
    palette(
        // Latte
        BasePalette {
            background: "#eff1f5",
            surface: "#ffffff",
            surface_alt: "#e6e9ef",
            border: "#ccd0da",
            text: "#4c4f69",
            text_secondary: "#5c5f77",
            text_muted: "#9ca0b0",
            primary: "#1e66f5",
            primary_foreground: "#ffffff",
            secondary: "#8839ef",
            secondary_foreground: "#ffffff",
            accent: "#fe640b",
            accent_foreground: "#ffffff",
            success: "#40a02b",
            warning: "#df8e1d",
            error: "#d20f39",
            info: "#04a5e5",
        },
        // Mocha
        BasePalette {
            background: "#1e1e2e",
            surface: "#313244",
            surface_alt: "#181825",
            border: "#45475a",
            text: "#cdd6f4",
            text_secondary: "#bac2de",
            text_muted: "#6c7086",
            primary: "#89b4fa",
            primary_foreground: "#11111b",
            secondary: "#cba6f7",
            secondary_foreground: "#11111b",
            accent: "#fab387",
            accent_foreground: "#11111b",
            success: "#a6e3a1",
            warning: "#f9e2af",
            error: "#f38ba8",
            info: "#89dceb",
        },
    )
}

/// Brand-only palette: sets primary and accent, everything else falls through
pub(super) fn ocean() -> PaletteData {
    PaletteData {
        light: PartialColorMode {
            primary: Some("#0369a1".into()),
            primary_foreground: Some("#f0f9ff".into()),
            accent: Some("#0d9488".into()),
            accent_foreground: Some("#f0fdfa".into()),
            ..Default::default()
        },
        dark: PartialColorMode {
            primary: Some("#38bdf8".into()),
            primary_foreground: Some("#082f49".into()),
            accent: Some("#2dd4bf".into()),
            accent_foreground: Some("#042f2e".into()),
            ..Default::default()
        },
    }
}
