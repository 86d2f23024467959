//! Item catalog
//!
//! The catalog is the immutable table of pre-authored items the user picks
//! among, one category at a time. It is built once, either from the shipped
//! table ([`Catalog::builtin`]) or from a TOML file of the same shape
//! ([`Catalog::from_toml_str`]), and handed to [`crate::ConfigBuilder`].
//!
//! Style values are parsed into [`Template`]s when the catalog is built, so
//! resolving a selection only renders.

mod builtin;
mod palettes;

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokensError};
use crate::placeholder::Template;
use crate::tokens::{
    ColorMode, FontFamilies, PaletteData, RadiusTokens, ShadowTokens, SpacingTokens,
};

/// Category ids of the shipped catalog
pub mod categories {
    pub const PALETTE: &str = "palette";
    pub const TYPOGRAPHY: &str = "typography";
    pub const SPACING: &str = "spacing";
    pub const RADIUS: &str = "radius";
    pub const SHADOWS: &str = "shadows";
    pub const BUTTONS: &str = "buttons";
    pub const CARDS: &str = "cards";
    pub const INPUTS: &str = "inputs";
    pub const SIDEBARS: &str = "sidebars";
    pub const TABLES: &str = "tables";
    pub const NAVBARS: &str = "navbars";
}

/// CSS-property-like key to value; values may contain color markers
pub type StyleRecord = BTreeMap<String, String>;

/// Named style records of one item (`"root"`, `"hover"`, `"header"`, ...)
pub type StyleSheet = BTreeMap<String, StyleRecord>;

/// A group of mutually exclusive items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Payload of a catalog item
///
/// Token categories carry one of the typed groups; every item may carry
/// style records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<FontFamilies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<RadiusTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowTokens>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: StyleSheet,
}

/// A named, described, pre-authored variant in one category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem<T = ItemData> {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub data: T,
}

/// An item with its style values parsed once
#[derive(Clone, Debug)]
struct CompiledItem {
    item: CatalogItem,
    styles: BTreeMap<String, BTreeMap<String, Template>>,
}

impl CompiledItem {
    fn compile(item: CatalogItem) -> Self {
        let styles = item
            .data
            .styles
            .iter()
            .map(|(record, props)| {
                let props = props
                    .iter()
                    .map(|(prop, value)| (prop.clone(), Template::parse(value)))
                    .collect();
                (record.clone(), props)
            })
            .collect();
        Self { item, styles }
    }

    fn render(&self, colors: &ColorMode) -> ItemData {
        let styles = self
            .styles
            .iter()
            .map(|(record, props)| {
                let props = props
                    .iter()
                    .map(|(prop, template)| (prop.clone(), template.render(colors)))
                    .collect();
                (record.clone(), props)
            })
            .collect();
        ItemData {
            styles,
            ..self.item.data.clone()
        }
    }
}

/// On-disk shape of a catalog
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_version")]
    version: u32,
    categories: Vec<Category>,
    #[serde(default)]
    items: Vec<CatalogItem>,
}

fn default_version() -> u32 {
    1
}

/// Immutable table of categories and items
#[derive(Clone, Debug)]
pub struct Catalog {
    version: u32,
    categories: Vec<Category>,
    items: Vec<CompiledItem>,
    /// category id -> item id -> index into `items`
    index: FxHashMap<String, FxHashMap<String, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicates and undeclared categories
    pub fn new(version: u32, categories: Vec<Category>, items: Vec<CatalogItem>) -> Result<Self> {
        let mut index: FxHashMap<String, FxHashMap<String, usize>> = FxHashMap::default();
        for category in &categories {
            if index
                .insert(category.id.clone(), FxHashMap::default())
                .is_some()
            {
                return Err(TokensError::DuplicateCategory(category.id.clone()));
            }
        }

        for (i, item) in items.iter().enumerate() {
            let Some(slot) = index.get_mut(&item.category) else {
                return Err(TokensError::UnknownCategory {
                    category: item.category.clone(),
                    id: item.id.clone(),
                });
            };
            if slot.insert(item.id.clone(), i).is_some() {
                return Err(TokensError::DuplicateItem {
                    category: item.category.clone(),
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self {
            version,
            categories,
            items: items.into_iter().map(CompiledItem::compile).collect(),
            index,
        })
    }

    /// The table shipped with designkit
    pub fn builtin() -> Self {
        Self::new(builtin::VERSION, builtin::categories(), builtin::items())
            .expect("built-in catalog declares every category it uses, once per id")
    }

    /// Load a catalog from TOML
    ///
    /// ```toml
    /// version = 2
    ///
    /// [[categories]]
    /// id = "radius"
    /// name = "Radius"
    /// description = "Corner rounding"
    ///
    /// [[items]]
    /// id = "pill"
    /// category = "radius"
    /// name = "Pill"
    /// description = "Fully rounded controls"
    ///
    /// [items.data.radius]
    /// none = 0.0
    /// sm = 8.0
    /// md = 12.0
    /// lg = 16.0
    /// xl = 24.0
    /// full = 9999.0
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src)?;
        tracing::debug!(
            version = file.version,
            categories = file.categories.len(),
            items = file.items.len(),
            "loaded catalog"
        );
        Self::new(file.version, file.categories, file.items)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Categories in canonical declaration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All items in declaration order
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.items.iter().map(|c| &c.item)
    }

    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items().filter(move |item| item.category == category)
    }

    pub fn item(&self, category: &str, id: &str) -> Option<&CatalogItem> {
        self.compiled(category, id).map(|c| &c.item)
    }

    /// Render an item's style records against a color set
    pub fn render_item(&self, category: &str, id: &str, colors: &ColorMode) -> Option<ItemData> {
        self.compiled(category, id).map(|c| c.render(colors))
    }

    fn compiled(&self, category: &str, id: &str) -> Option<&CompiledItem> {
        let i = *self.index.get(category)?.get(id)?;
        self.items.get(i)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::default_color_mode;
    use crate::tokens::Mode;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r##"
version = 7

[[categories]]
id = "radius"
name = "Radius"
description = "Corner rounding"

[[categories]]
id = "buttons"
name = "Buttons"
description = "Button styles"

[[items]]
id = "pill"
category = "radius"
name = "Pill"
description = "Fully rounded"

[items.data.radius]
none = 0.0
sm = 8.0
md = 12.0
lg = 16.0
xl = 24.0
full = 9999.0

[[items]]
id = "solid"
category = "buttons"
name = "Solid"
description = "Filled buttons"

[items.data.styles.root]
background = "__primary"
color = "__primaryForeground"
box-shadow = "0 0 0 3px __primary-25"
"##;

    #[test]
    fn loads_toml_fixture() {
        let catalog = Catalog::from_toml_str(FIXTURE).unwrap();
        assert_eq!(catalog.version(), 7);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.item("radius", "pill").unwrap().name, "Pill");
        assert_eq!(
            catalog
                .item("radius", "pill")
                .and_then(|i| i.data.radius.as_ref())
                .map(|r| r.xl),
            Some(24.0)
        );
        assert!(catalog.item("radius", "solid").is_none());
    }

    #[test]
    fn render_resolves_markers() {
        let catalog = Catalog::from_toml_str(FIXTURE).unwrap();
        let colors = default_color_mode(Mode::Light);
        let data = catalog.render_item("buttons", "solid", &colors).unwrap();
        let root = &data.styles["root"];
        assert_eq!(root["background"], colors.primary);
        assert_eq!(root["color"], colors.primary_foreground);
        assert_eq!(root["box-shadow"], "0 0 0 3px rgba(59,130,246,0.25)");
    }

    #[test]
    fn rejects_undeclared_category() {
        let err = Catalog::new(
            1,
            vec![],
            vec![CatalogItem {
                id: "x".into(),
                category: "ghost".into(),
                name: "X".into(),
                description: String::new(),
                data: ItemData::default(),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, TokensError::UnknownCategory { .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let category = Category {
            id: "radius".into(),
            name: "Radius".into(),
            description: String::new(),
        };
        let item = CatalogItem {
            id: "pill".into(),
            category: "radius".into(),
            name: "Pill".into(),
            description: String::new(),
            data: ItemData::default(),
        };
        let err = Catalog::new(1, vec![category], vec![item.clone(), item]).unwrap_err();
        assert!(matches!(err, TokensError::DuplicateItem { .. }));
    }

    #[test]
    fn rejects_duplicate_categories() {
        let category = Category {
            id: "radius".into(),
            name: "Radius".into(),
            description: String::new(),
        };
        let err = Catalog::new(1, vec![category.clone(), category], Vec::new()).unwrap_err();
        assert!(matches!(err, TokensError::DuplicateCategory(ref id) if id == "radius"));
        assert_eq!(err.to_string(), "catalog category `radius` is declared more than once");
    }

    #[test]
    fn builtin_items_belong_to_declared_categories() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            assert!(
                catalog.items_in(&category.id).count() >= 2,
                "category {} has fewer than two items",
                category.id
            );
        }
    }
}
