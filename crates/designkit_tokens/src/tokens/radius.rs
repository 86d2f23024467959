//! Radius tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 6] = [
        RadiusToken::None,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Full => "full",
        }
    }
}

/// Complete set of radius tokens, in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub full: f32,
}

impl RadiusTokens {
    pub const fn new(sm: f32, md: f32, lg: f32, xl: f32) -> Self {
        Self {
            none: 0.0,
            sm,
            md,
            lg,
            xl,
            full: 9999.0,
        }
    }

    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Full => self.full,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RadiusToken, f32)> + '_ {
        RadiusToken::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::new(4.0, 8.0, 12.0, 16.0)
    }
}
