//! Design tokens
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (per mode, with semantic status colors)
//! - Typography (families, modular size scale, weights, line heights)
//! - Spacing
//! - Border radii
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// Round to two decimals so derived sizes serialize the same everywhere
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
