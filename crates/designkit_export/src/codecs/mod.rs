//! One codec per export format
//!
//! Every codec is a pure function of the [`designkit_tokens::DesignConfig`].
//! Colors are emitted in `ColorKey::ALL` order and every other group in its
//! declaration order, so output never depends on map iteration. Quoting and
//! escaping rules live with the codec that needs them.

pub mod css;
pub mod flutter;
pub mod json;
pub mod kotlin;
pub mod markdown;
pub mod react_native;
pub mod swift;
pub mod tailwind;

/// First line of every generated source file
pub(crate) const GENERATED: &str = "Generated by designkit. Do not edit by hand.";
