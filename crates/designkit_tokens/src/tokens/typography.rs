//! Typography tokens for theming

use serde::{Deserialize, Serialize};

use super::round2;

/// Named modular type scales, selected by `typeScale` in the state
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TypeScale {
    Compact,
    #[default]
    Default,
    Comfortable,
    Large,
}

impl TypeScale {
    pub const ALL: [TypeScale; 4] = [
        TypeScale::Compact,
        TypeScale::Default,
        TypeScale::Comfortable,
        TypeScale::Large,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TypeScale::Compact => "compact",
            TypeScale::Default => "default",
            TypeScale::Comfortable => "comfortable",
            TypeScale::Large => "large",
        }
    }

    /// Look up a scale by id, falling back to [`TypeScale::Default`]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|scale| scale.id() == name)
            .unwrap_or_default()
    }

    /// Base font size in pixels
    pub fn base_size(self) -> f32 {
        match self {
            TypeScale::Compact => 14.0,
            TypeScale::Default | TypeScale::Comfortable => 16.0,
            TypeScale::Large => 18.0,
        }
    }

    /// Ratio between adjacent steps
    pub fn ratio(self) -> f32 {
        match self {
            TypeScale::Compact => 1.125,
            TypeScale::Default => 1.2,
            TypeScale::Comfortable | TypeScale::Large => 1.25,
        }
    }
}

/// Font family stacks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub sans: String,
    pub heading: String,
    pub mono: String,
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            sans: "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif".to_string(),
            heading: "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif".to_string(),
            mono: "ui-monospace, SFMono-Regular, Menlo, monospace".to_string(),
        }
    }
}

/// Font sizes in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xxl: f32,
    #[serde(rename = "3xl")]
    pub xxxl: f32,
    #[serde(rename = "4xl")]
    pub xxxxl: f32,
}

impl FontSizes {
    /// `base * ratio^k` for k in -2..=5
    pub fn modular(base: f32, ratio: f32) -> Self {
        let step = |k: i32| round2(base * ratio.powi(k));
        Self {
            xs: step(-2),
            sm: step(-1),
            base: round2(base),
            lg: step(1),
            xl: step(2),
            xxl: step(3),
            xxxl: step(4),
            xxxxl: step(5),
        }
    }

    /// `(name, size)` pairs, smallest first
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("base", self.base),
            ("lg", self.lg),
            ("xl", self.xl),
            ("2xl", self.xxl),
            ("3xl", self.xxxl),
            ("4xl", self.xxxxl),
        ]
        .into_iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u16)> {
        [
            ("normal", self.normal),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
        ]
        .into_iter()
    }
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

impl LineHeights {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("tight", self.tight),
            ("normal", self.normal),
            ("relaxed", self.relaxed),
        ]
        .into_iter()
    }
}

impl Default for LineHeights {
    fn default() -> Self {
        Self {
            tight: 1.25,
            normal: 1.5,
            relaxed: 1.75,
        }
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub scale: String,
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

impl TypographyTokens {
    pub fn new(families: FontFamilies, scale: TypeScale) -> Self {
        Self {
            scale: scale.id().to_string(),
            font_family: families,
            font_size: FontSizes::modular(scale.base_size(), scale.ratio()),
            font_weight: FontWeights::default(),
            line_height: LineHeights::default(),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::new(FontFamilies::default(), TypeScale::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scale_falls_back_to_default() {
        assert_eq!(TypeScale::from_name("huge"), TypeScale::Default);
        assert_eq!(TypeScale::from_name("compact"), TypeScale::Compact);
    }

    #[test]
    fn default_scale_sizes() {
        let sizes = FontSizes::modular(16.0, 1.2);
        assert_eq!(sizes.base, 16.0);
        assert_eq!(sizes.lg, 19.2);
        assert_eq!(sizes.sm, 13.33);
        assert!(sizes.iter().map(|(_, s)| s).collect::<Vec<_>>().windows(2).all(|w| w[0] < w[1]));
    }
}
