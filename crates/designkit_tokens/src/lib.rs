//! designkit token model
//!
//! Everything needed to turn a user's raw choices into one canonical design
//! token document.
//!
//! # Overview
//!
//! - **Catalog**: immutable table of pre-authored items grouped by category
//!   (palettes, typography, radii, shadows, component styles)
//! - **State**: what the user picked, per category, plus per-mode color picks
//! - **Merging**: defaults, palette and picks layered into a complete color set
//! - **Placeholders**: `__primary`, `__accent-20` and friends inside style
//!   values, rendered against the active color set
//! - **Config**: the resolved [`DesignConfig`], rebuilt on every read
//!
//! # Quick Start
//!
//! ```rust
//! use designkit_tokens::{build_config, Catalog, ColorKey, DesignKitState, Mode};
//!
//! let catalog = Catalog::builtin();
//! let mut state = DesignKitState::new().with_selection("radius", "pill");
//! state.color_picks.pick(Mode::Light, ColorKey::Primary, "#ff0000");
//!
//! let config = build_config(&catalog, &state);
//! assert_eq!(config.tokens.colors.light.primary, "#ff0000");
//! assert!(config.tokens.radius.is_some());
//! ```
//!
//! # Determinism
//!
//! Maps are ordered (`BTreeMap` for style records, catalog order for
//! components) and numbers are rounded where they are derived, so two builds
//! from equal inputs serialize to identical bytes.

pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod placeholder;
pub mod state;
pub mod tokens;

// Re-export commonly used types
pub use catalog::{categories, Catalog, CatalogItem, Category, ItemData, StyleRecord, StyleSheet};
pub use config::{build_config, ConfigBuilder, DesignConfig, DesignTokens, ResolvedItem};
pub use error::{Result, TokensError};
pub use lookup::{lookup_path, TokenLookup};
pub use merge::{default_color_mode, merge_color_mode, merge_color_schemes};
pub use placeholder::{resolve, Segment, Template};
pub use state::{missing_state_fields, ColorPicks, DesignKitState, REQUIRED_STATE_FIELDS};
pub use tokens::{
    ColorKey, ColorMode, ColorSchemes, FontFamilies, FontSizes, FontWeights, LineHeights, Mode,
    PaletteData, PartialColorMode, PartialSemantic, RadiusToken, RadiusTokens, Rgba,
    SemanticColors, SemanticKey, Shadow, ShadowToken, ShadowTokens, SpacingToken, SpacingTokens,
    TypeScale, TypographyTokens,
};
