//! Raw selection state
//!
//! [`DesignKitState`] is the unit of persistence and transfer. It records
//! what the user chose; resolving it into tokens is the job of
//! [`crate::ConfigBuilder`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tokens::{ColorKey, Mode, PaletteData, TypeScale};

/// Fields a state document must carry to be accepted as a write
pub const REQUIRED_STATE_FIELDS: [&str; 3] = ["selections", "colorPicks", "typeScale"];

/// Required fields absent from a JSON document, in declaration order
///
/// Non-object documents are missing every field.
pub fn missing_state_fields(doc: &serde_json::Value) -> Vec<&'static str> {
    REQUIRED_STATE_FIELDS
        .into_iter()
        .filter(|field| doc.get(field).is_none())
        .collect()
}

/// Per-mode color overrides keyed by color key wire spelling
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPicks {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

impl ColorPicks {
    pub fn for_mode(&self, mode: Mode) -> &BTreeMap<String, String> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    fn for_mode_mut(&mut self, mode: Mode) -> &mut BTreeMap<String, String> {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn get(&self, mode: Mode, key: ColorKey) -> Option<&str> {
        self.for_mode(mode).get(key.as_str()).map(String::as_str)
    }

    pub fn pick(&mut self, mode: Mode, key: ColorKey, value: impl Into<String>) {
        self.for_mode_mut(mode)
            .insert(key.as_str().to_string(), value.into());
    }

    /// Drop a single pick; the key falls back to the palette or default
    pub fn unpick(&mut self, mode: Mode, key: ColorKey) -> Option<String> {
        self.for_mode_mut(mode).remove(key.as_str())
    }

    /// Copy every color the palette defines into the picks of both modes
    pub fn apply_palette(&mut self, palette: &PaletteData) {
        for mode in Mode::ALL {
            let source = palette.for_mode(mode);
            for key in ColorKey::ALL {
                if let Some(value) = source.get(key) {
                    self.pick(mode, key, value);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

fn default_type_scale() -> String {
    TypeScale::Default.id().to_string()
}

/// Everything the user has chosen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignKitState {
    /// Category id to chosen item id
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub color_picks: ColorPicks,
    /// Mode used when resolving component styles
    #[serde(default)]
    pub color_mode: Mode,
    #[serde(default = "default_type_scale")]
    pub type_scale: String,
}

impl Default for DesignKitState {
    fn default() -> Self {
        Self {
            selections: BTreeMap::new(),
            color_picks: ColorPicks::default(),
            color_mode: Mode::default(),
            type_scale: default_type_scale(),
        }
    }
}

impl DesignKitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection, handy for fixtures
    pub fn with_selection(mut self, category: &str, item_id: &str) -> Self {
        self.select(category, item_id);
        self
    }

    /// Select an item, replacing any previous choice in that category
    pub fn select(&mut self, category: &str, item_id: &str) -> Option<String> {
        self.selections
            .insert(category.to_string(), item_id.to_string())
    }

    pub fn deselect(&mut self, category: &str) -> Option<String> {
        self.selections.remove(category)
    }

    pub fn selection(&self, category: &str) -> Option<&str> {
        self.selections.get(category).map(String::as_str)
    }

    pub fn type_scale(&self) -> TypeScale {
        TypeScale::from_name(&self.type_scale)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.color_picks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::PartialColorMode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn wire_shape_is_camel_case() {
        let mut state = DesignKitState::new().with_selection("radius", "pill");
        state
            .color_picks
            .pick(Mode::Light, ColorKey::Primary, "#ff0000");
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "selections": { "radius": "pill" },
                "colorPicks": { "light": { "primary": "#ff0000" }, "dark": {} },
                "colorMode": "light",
                "typeScale": "default"
            })
        );
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(
            missing_state_fields(&json!({ "colorPicks": {} })),
            vec!["selections", "typeScale"]
        );
        assert!(missing_state_fields(&json!({
            "selections": {}, "colorPicks": {}, "typeScale": "default"
        }))
        .is_empty());
        assert_eq!(missing_state_fields(&json!([1, 2])).len(), 3);
    }

    #[test]
    fn optional_fields_default_on_decode() {
        let state: DesignKitState = serde_json::from_value(json!({
            "selections": {}, "colorPicks": { "dark": { "accent": "#123456" } }, "typeScale": "large"
        }))
        .unwrap();
        assert_eq!(state.color_mode, Mode::Light);
        assert_eq!(state.type_scale(), TypeScale::Large);
        assert_eq!(state.color_picks.get(Mode::Dark, ColorKey::Accent), Some("#123456"));
        assert!(state.color_picks.light.is_empty());
    }

    #[test]
    fn apply_palette_then_unpick_single_key() {
        let palette = PaletteData {
            light: PartialColorMode {
                primary: Some("#111111".into()),
                accent: Some("#333333".into()),
                ..Default::default()
            },
            dark: PartialColorMode {
                primary: Some("#eeeeee".into()),
                ..Default::default()
            },
        };
        let mut picks = ColorPicks::default();
        picks.apply_palette(&palette);
        assert_eq!(picks.light.len(), 2);
        assert_eq!(picks.get(Mode::Dark, ColorKey::Primary), Some("#eeeeee"));

        assert_eq!(
            picks.unpick(Mode::Light, ColorKey::Primary).as_deref(),
            Some("#111111")
        );
        assert_eq!(picks.get(Mode::Light, ColorKey::Accent), Some("#333333"));
    }
}
