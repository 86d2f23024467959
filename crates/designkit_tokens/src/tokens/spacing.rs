//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
            SpacingToken::Xxl => "2xl",
        }
    }
}

/// Spacing scale in pixels, built on a base unit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub unit: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xxl: f32,
}

impl SpacingTokens {
    /// Build a scale from a base unit using the 1/2/4/6/8/12 multipliers
    pub fn from_unit(unit: f32) -> Self {
        Self {
            unit,
            xs: unit,
            sm: unit * 2.0,
            md: unit * 4.0,
            lg: unit * 6.0,
            xl: unit * 8.0,
            xxl: unit * 12.0,
        }
    }

    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpacingToken, f32)> + '_ {
        SpacingToken::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::from_unit(4.0)
    }
}
