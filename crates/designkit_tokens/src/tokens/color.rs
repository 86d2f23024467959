//! Color tokens for theming

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokensError;

/// Light or dark color mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TokensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(TokensError::UnknownMode(other.to_string())),
        }
    }
}

/// Semantic (status) color keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticKey {
    Success,
    Warning,
    Error,
    Info,
}

impl SemanticKey {
    pub const ALL: [SemanticKey; 4] = [
        SemanticKey::Success,
        SemanticKey::Warning,
        SemanticKey::Error,
        SemanticKey::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SemanticKey::Success => "success",
            SemanticKey::Warning => "warning",
            SemanticKey::Error => "error",
            SemanticKey::Info => "info",
        }
    }
}

/// Color token keys for dynamic access
///
/// The wire spelling (see [`ColorKey::as_str`]) is the key used in color
/// picks: camelCase for base colors, `semantic.<name>` for status colors.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorKey {
    // Surfaces
    Background,
    Surface,
    SurfaceAlt,
    Border,

    // Text
    Text,
    TextSecondary,
    TextMuted,

    // Brand
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,

    // Status
    Semantic(SemanticKey),
}

impl ColorKey {
    /// Every key in canonical declaration order
    pub const ALL: [ColorKey; 17] = [
        ColorKey::Background,
        ColorKey::Surface,
        ColorKey::SurfaceAlt,
        ColorKey::Border,
        ColorKey::Text,
        ColorKey::TextSecondary,
        ColorKey::TextMuted,
        ColorKey::Primary,
        ColorKey::PrimaryForeground,
        ColorKey::Secondary,
        ColorKey::SecondaryForeground,
        ColorKey::Accent,
        ColorKey::AccentForeground,
        ColorKey::Semantic(SemanticKey::Success),
        ColorKey::Semantic(SemanticKey::Warning),
        ColorKey::Semantic(SemanticKey::Error),
        ColorKey::Semantic(SemanticKey::Info),
    ];

    /// The 13 base keys, without semantic colors
    pub const BASE: [ColorKey; 13] = [
        ColorKey::Background,
        ColorKey::Surface,
        ColorKey::SurfaceAlt,
        ColorKey::Border,
        ColorKey::Text,
        ColorKey::TextSecondary,
        ColorKey::TextMuted,
        ColorKey::Primary,
        ColorKey::PrimaryForeground,
        ColorKey::Secondary,
        ColorKey::SecondaryForeground,
        ColorKey::Accent,
        ColorKey::AccentForeground,
    ];

    /// Wire spelling used by color picks
    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Background => "background",
            ColorKey::Surface => "surface",
            ColorKey::SurfaceAlt => "surfaceAlt",
            ColorKey::Border => "border",
            ColorKey::Text => "text",
            ColorKey::TextSecondary => "textSecondary",
            ColorKey::TextMuted => "textMuted",
            ColorKey::Primary => "primary",
            ColorKey::PrimaryForeground => "primaryForeground",
            ColorKey::Secondary => "secondary",
            ColorKey::SecondaryForeground => "secondaryForeground",
            ColorKey::Accent => "accent",
            ColorKey::AccentForeground => "accentForeground",
            ColorKey::Semantic(SemanticKey::Success) => "semantic.success",
            ColorKey::Semantic(SemanticKey::Warning) => "semantic.warning",
            ColorKey::Semantic(SemanticKey::Error) => "semantic.error",
            ColorKey::Semantic(SemanticKey::Info) => "semantic.info",
        }
    }

    /// Field name without the `semantic.` prefix
    pub fn field_name(self) -> &'static str {
        match self {
            ColorKey::Semantic(key) => key.name(),
            other => other.as_str(),
        }
    }

    pub fn is_semantic(self) -> bool {
        matches!(self, ColorKey::Semantic(_))
    }
}

impl Display for ColorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = TokensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TokensError::UnknownColorKey(s.to_string()))
    }
}

/// Resolved status colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl SemanticColors {
    pub fn get(&self, key: SemanticKey) -> &str {
        match key {
            SemanticKey::Success => &self.success,
            SemanticKey::Warning => &self.warning,
            SemanticKey::Error => &self.error,
            SemanticKey::Info => &self.info,
        }
    }

    fn slot(&mut self, key: SemanticKey) -> &mut String {
        match key {
            SemanticKey::Success => &mut self.success,
            SemanticKey::Warning => &mut self.warning,
            SemanticKey::Error => &mut self.error,
            SemanticKey::Info => &mut self.info,
        }
    }
}

/// Fully resolved color set for one mode
///
/// Every field is populated; see [`crate::merge_color_mode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMode {
    pub background: String,
    pub surface: String,
    pub surface_alt: String,
    pub border: String,
    pub text: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub semantic: SemanticColors,
}

impl ColorMode {
    /// Get a color by token key
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Background => &self.background,
            ColorKey::Surface => &self.surface,
            ColorKey::SurfaceAlt => &self.surface_alt,
            ColorKey::Border => &self.border,
            ColorKey::Text => &self.text,
            ColorKey::TextSecondary => &self.text_secondary,
            ColorKey::TextMuted => &self.text_muted,
            ColorKey::Primary => &self.primary,
            ColorKey::PrimaryForeground => &self.primary_foreground,
            ColorKey::Secondary => &self.secondary,
            ColorKey::SecondaryForeground => &self.secondary_foreground,
            ColorKey::Accent => &self.accent,
            ColorKey::AccentForeground => &self.accent_foreground,
            ColorKey::Semantic(key) => self.semantic.get(key),
        }
    }

    /// Replace a color by token key
    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::Background => &mut self.background,
            ColorKey::Surface => &mut self.surface,
            ColorKey::SurfaceAlt => &mut self.surface_alt,
            ColorKey::Border => &mut self.border,
            ColorKey::Text => &mut self.text,
            ColorKey::TextSecondary => &mut self.text_secondary,
            ColorKey::TextMuted => &mut self.text_muted,
            ColorKey::Primary => &mut self.primary,
            ColorKey::PrimaryForeground => &mut self.primary_foreground,
            ColorKey::Secondary => &mut self.secondary,
            ColorKey::SecondaryForeground => &mut self.secondary_foreground,
            ColorKey::Accent => &mut self.accent,
            ColorKey::AccentForeground => &mut self.accent_foreground,
            ColorKey::Semantic(key) => self.semantic.slot(key),
        };
        *slot = value.into();
    }

    /// Iterate `(key, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &str)> + '_ {
        ColorKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Light and dark color sets side by side
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSchemes {
    pub light: ColorMode,
    pub dark: ColorMode,
}

impl ColorSchemes {
    pub fn for_mode(&self, mode: Mode) -> &ColorMode {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Status colors a palette may leave undefined
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSemantic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl PartialSemantic {
    pub fn get(&self, key: SemanticKey) -> Option<&str> {
        match key {
            SemanticKey::Success => self.success.as_deref(),
            SemanticKey::Warning => self.warning.as_deref(),
            SemanticKey::Error => self.error.as_deref(),
            SemanticKey::Info => self.info.as_deref(),
        }
    }
}

/// A color set where any field may be missing (palette payloads)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialColorMode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<PartialSemantic>,
}

impl PartialColorMode {
    pub fn get(&self, key: ColorKey) -> Option<&str> {
        match key {
            ColorKey::Background => self.background.as_deref(),
            ColorKey::Surface => self.surface.as_deref(),
            ColorKey::SurfaceAlt => self.surface_alt.as_deref(),
            ColorKey::Border => self.border.as_deref(),
            ColorKey::Text => self.text.as_deref(),
            ColorKey::TextSecondary => self.text_secondary.as_deref(),
            ColorKey::TextMuted => self.text_muted.as_deref(),
            ColorKey::Primary => self.primary.as_deref(),
            ColorKey::PrimaryForeground => self.primary_foreground.as_deref(),
            ColorKey::Secondary => self.secondary.as_deref(),
            ColorKey::SecondaryForeground => self.secondary_foreground.as_deref(),
            ColorKey::Accent => self.accent.as_deref(),
            ColorKey::AccentForeground => self.accent_foreground.as_deref(),
            ColorKey::Semantic(key) => self.semantic.as_ref().and_then(|s| s.get(key)),
        }
    }
}

/// Palette payload: partial color sets per mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteData {
    pub light: PartialColorMode,
    pub dark: PartialColorMode,
}

impl PaletteData {
    pub fn for_mode(&self, mode: Mode) -> &PartialColorMode {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// A parsed color literal with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(...)` or `rgba(...)`
    pub fn parse(value: &str) -> Option<Rgba> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let lower = value.to_ascii_lowercase();
        let inner = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let number = |s: &str| s.parse::<f32>().ok().filter(|v| v.is_finite());
        let channel = |s: &str| number(s).map(|v| v.round().clamp(0.0, 255.0) as u8);
        match parts.as_slice() {
            [r, g, b] => Some(Rgba {
                r: channel(r)?,
                g: channel(g)?,
                b: channel(b)?,
                a: 1.0,
            }),
            [r, g, b, a] => Some(Rgba {
                r: channel(r)?,
                g: channel(g)?,
                b: channel(b)?,
                a: number(a)?.clamp(0.0, 1.0),
            }),
            _ => None,
        }
    }

    fn parse_hex(hex: &str) -> Option<Rgba> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
        match hex.len() {
            3 => Some(Rgba {
                r: nibble(0)?,
                g: nibble(1)?,
                b: nibble(2)?,
                a: 1.0,
            }),
            6 => Some(Rgba {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 1.0,
            }),
            8 => Some(Rgba {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: f32::from(byte(6)?) / 255.0,
            }),
            _ => None,
        }
    }

    /// Alpha as an 8-bit channel
    pub fn alpha_u8(&self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// `0xAARRGGBB`, the layout used by Android and Flutter
    pub fn to_argb(&self) -> u32 {
        (u32::from(self.alpha_u8()) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }

    /// Lowercase `#rrggbb`, dropping alpha
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
