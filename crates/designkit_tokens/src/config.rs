//! Resolved design configuration
//!
//! [`ConfigBuilder`] turns a [`DesignKitState`] into a [`DesignConfig`]: both
//! color modes are merged, each selected item is looked up in the injected
//! [`Catalog`] and its style records are rendered against the active mode.
//!
//! Building is pure. The same state and catalog always produce the same
//! config, down to the serialized bytes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{categories, Catalog, CatalogItem, ItemData};
use crate::lookup::{lookup_path, TokenLookup};
use crate::merge::merge_color_schemes;
use crate::state::DesignKitState;
use crate::tokens::{
    ColorSchemes, FontFamilies, RadiusTokens, ShadowTokens, SpacingTokens, TypographyTokens,
};

/// Token groups of a resolved config
///
/// `radius` and `shadows` stay `None` until an item of that category is
/// selected; typography and spacing always carry a scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub colors: ColorSchemes,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radius: Option<RadiusTokens>,
    pub shadows: Option<ShadowTokens>,
}

impl DesignTokens {
    /// Dot-path lookup such as `colors.light.primary`
    pub fn lookup(&self, path: &str) -> TokenLookup {
        let root = serde_json::to_value(self).unwrap_or_default();
        lookup_path(&root, path)
    }
}

/// A selected catalog item with its style records resolved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub category_description: String,
    pub data: ItemData,
}

/// The canonical token document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub tokens: DesignTokens,
    /// Category id to resolved item, in catalog category order
    pub components: IndexMap<String, ResolvedItem>,
}

impl DesignConfig {
    pub fn component(&self, category: &str) -> Option<&ResolvedItem> {
        self.components.get(category)
    }
}

/// Builds [`DesignConfig`]s against a fixed catalog
#[derive(Clone, Copy, Debug)]
pub struct ConfigBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve a state into a config
    ///
    /// Never fails: selections naming a category or item the catalog does
    /// not know are dropped as if unselected.
    pub fn build(&self, state: &DesignKitState) -> DesignConfig {
        for (category, id) in &state.selections {
            if self.catalog.item(category, id).is_none() {
                warn!(%category, %id, "dropping stale selection");
            }
        }

        let palette = self
            .selected(state, categories::PALETTE)
            .and_then(|item| item.data.palette.as_ref());
        let colors = merge_color_schemes(
            palette,
            &state.color_picks.light,
            &state.color_picks.dark,
        );

        let families = self
            .selected(state, categories::TYPOGRAPHY)
            .and_then(|item| item.data.typography.clone())
            .unwrap_or_else(FontFamilies::default);
        let typography = TypographyTokens::new(families, state.type_scale());

        let spacing = self
            .selected(state, categories::SPACING)
            .and_then(|item| item.data.spacing.clone())
            .unwrap_or_default();
        let radius = self
            .selected(state, categories::RADIUS)
            .and_then(|item| item.data.radius.clone());
        let shadows = self
            .selected(state, categories::SHADOWS)
            .and_then(|item| item.data.shadows.clone());

        let active = colors.for_mode(state.color_mode);
        let mut components = IndexMap::new();
        for category in self.catalog.categories() {
            let Some(item) = self.selected(state, &category.id) else {
                continue;
            };
            let Some(data) = self.catalog.render_item(&category.id, &item.id, active) else {
                continue;
            };
            components.insert(
                category.id.clone(),
                ResolvedItem {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    description: item.description.clone(),
                    category_name: category.name.clone(),
                    category_description: category.description.clone(),
                    data,
                },
            );
        }

        debug!(
            mode = %state.color_mode,
            components = components.len(),
            "built design config"
        );

        DesignConfig {
            tokens: DesignTokens {
                colors,
                typography,
                spacing,
                radius,
                shadows,
            },
            components,
        }
    }

    fn selected(&self, state: &DesignKitState, category: &str) -> Option<&'a CatalogItem> {
        let id = state.selection(category)?;
        self.catalog.item(category, id)
    }
}

/// Resolve a state against a catalog in one call
pub fn build_config(catalog: &Catalog, state: &DesignKitState) -> DesignConfig {
    ConfigBuilder::new(catalog).build(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::default_color_mode;
    use crate::tokens::{ColorKey, Mode, TypeScale};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_state_is_all_defaults() {
        let catalog = Catalog::builtin();
        let config = build_config(&catalog, &DesignKitState::new());
        assert_eq!(config.tokens.colors.light, default_color_mode(Mode::Light));
        assert_eq!(config.tokens.colors.dark, default_color_mode(Mode::Dark));
        assert_eq!(config.tokens.typography, TypographyTokens::default());
        assert_eq!(config.tokens.spacing, SpacingTokens::default());
        assert!(config.tokens.radius.is_none());
        assert!(config.tokens.shadows.is_none());
        assert!(config.components.is_empty());
    }

    #[test]
    fn components_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let state = DesignKitState::new()
            .with_selection("navbars", "glass")
            .with_selection("buttons", "solid")
            .with_selection("palette", "slate");
        let config = build_config(&catalog, &state);
        let order: Vec<&str> = config.components.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["palette", "buttons", "navbars"]);
        assert_eq!(config.components["buttons"].category_name, "Buttons");
    }

    #[test]
    fn palette_selection_feeds_colors() {
        let catalog = Catalog::builtin();
        let state = DesignKitState::new().with_selection("palette", "ocean");
        let config = build_config(&catalog, &state);
        assert_eq!(config.tokens.colors.light.primary, "#0369a1");
        assert_eq!(config.tokens.colors.dark.accent, "#2dd4bf");
        // ocean leaves the neutrals to the defaults
        assert_eq!(
            config.tokens.colors.light.background,
            default_color_mode(Mode::Light).background
        );
    }

    #[test]
    fn components_render_against_active_mode() {
        let catalog = Catalog::builtin();
        let mut state = DesignKitState::new().with_selection("buttons", "solid");
        state.color_mode = Mode::Dark;
        state
            .color_picks
            .pick(Mode::Dark, ColorKey::Primary, "#102030");
        let config = build_config(&catalog, &state);
        let root = &config.components["buttons"].data.styles["root"];
        assert_eq!(root["background"], "#102030");
        assert_eq!(
            config.components["buttons"].data.styles["focus"]["box-shadow"],
            "0 0 0 3px rgba(16,32,48,0.3)"
        );
    }

    #[test]
    fn typography_uses_selection_and_scale() {
        let catalog = Catalog::builtin();
        let mut state = DesignKitState::new().with_selection("typography", "inter");
        state.type_scale = TypeScale::Large.id().to_string();
        let config = build_config(&catalog, &state);
        assert!(config.tokens.typography.font_family.sans.starts_with("\"Inter\""));
        assert_eq!(config.tokens.typography.scale, "large");
        assert_eq!(config.tokens.typography.font_size.base, 18.0);
    }

    #[test]
    fn stale_and_unknown_selections_are_dropped() {
        let catalog = Catalog::builtin();
        let state = DesignKitState::new()
            .with_selection("radius", "removed-long-ago")
            .with_selection("widgets", "fancy")
            .with_selection("cards", "bordered");
        let config = build_config(&catalog, &state);
        assert!(config.tokens.radius.is_none());
        assert_eq!(config.components.len(), 1);
        assert!(config.component("cards").is_some());
    }

    #[test]
    fn token_lookup_walks_nested_keys() {
        let catalog = Catalog::builtin();
        let config = build_config(&catalog, &DesignKitState::new());
        assert_eq!(
            config.tokens.lookup("colors.light.primary"),
            TokenLookup::Found(serde_json::json!("#3b82f6"))
        );
        match config.tokens.lookup("colors.sepia.primary") {
            TokenLookup::NotFound { missing, available, .. } => {
                assert_eq!(missing, "sepia");
                assert_eq!(
                    available,
                    vec!["colors", "radius", "shadows", "spacing", "typography"]
                );
            }
            found => panic!("expected a miss, got {found:?}"),
        }
    }
}
