//! Shadow tokens for theming

use serde::{Deserialize, Serialize};

use super::Rgba;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 4] = [
        ShadowToken::Sm,
        ShadowToken::Md,
        ShadowToken::Lg,
        ShadowToken::Xl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShadowToken::Sm => "sm",
            ShadowToken::Md => "md",
            ShadowToken::Lg => "lg",
            ShadowToken::Xl => "xl",
        }
    }
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: String,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: impl Into<String>) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.into(),
        }
    }

    /// Black shadow at the given opacity
    pub fn black(offset_y: f32, blur: f32, spread: f32, alpha: f32) -> Self {
        Self::new(0.0, offset_y, blur, spread, format!("rgba(0,0,0,{alpha})"))
    }

    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, "rgba(0,0,0,0)")
    }

    pub fn is_none(&self) -> bool {
        self.blur == 0.0
            && self.spread == 0.0
            && self.offset_x == 0.0
            && self.offset_y == 0.0
    }

    /// Parsed shadow color, transparent when the literal is not understood
    pub fn rgba(&self) -> Rgba {
        Rgba::parse(&self.color).unwrap_or(Rgba::TRANSPARENT)
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if self.is_none() {
            return "none".to_string();
        }
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadowToken, &Shadow)> + '_ {
        ShadowToken::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// No elevation at all
    pub fn flat() -> Self {
        Self {
            sm: Shadow::none(),
            md: Shadow::none(),
            lg: Shadow::none(),
            xl: Shadow::none(),
        }
    }

    /// Low-contrast shadows tuned for light surfaces
    pub fn soft() -> Self {
        Self {
            sm: Shadow::black(1.0, 2.0, 0.0, 0.05),
            md: Shadow::black(4.0, 6.0, -1.0, 0.1),
            lg: Shadow::black(10.0, 15.0, -3.0, 0.1),
            xl: Shadow::black(20.0, 25.0, -5.0, 0.1),
        }
    }

    /// Deep shadows that read on dark surfaces too
    pub fn dramatic() -> Self {
        Self {
            sm: Shadow::black(1.0, 3.0, 0.0, 0.2),
            md: Shadow::black(6.0, 12.0, -2.0, 0.3),
            lg: Shadow::black(16.0, 32.0, -4.0, 0.35),
            xl: Shadow::black(25.0, 50.0, -12.0, 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_value() {
        assert_eq!(
            Shadow::black(4.0, 6.0, -1.0, 0.1).to_css(),
            "0px 4px 6px -1px rgba(0,0,0,0.1)"
        );
        assert_eq!(Shadow::none().to_css(), "none");
    }

    #[test]
    fn shadow_color_parses() {
        let c = ShadowTokens::soft().md.rgba();
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
        assert!((c.a - 0.1).abs() < 1e-6);
    }
}
