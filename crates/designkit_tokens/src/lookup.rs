//! Dot-path lookup over serialized tokens

use serde_json::Value;

/// Outcome of a dot-path lookup
#[derive(Clone, Debug, PartialEq)]
pub enum TokenLookup {
    Found(Value),
    NotFound {
        path: String,
        /// First segment that could not be followed
        missing: String,
        /// Top-level keys of the document, sorted
        available: Vec<String>,
    },
}

impl TokenLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, TokenLookup::Found(_))
    }

    pub fn found(self) -> Option<Value> {
        match self {
            TokenLookup::Found(value) => Some(value),
            TokenLookup::NotFound { .. } => None,
        }
    }
}

/// Follow `path` (`a.b.c`) through nested objects
///
/// Numeric segments index into arrays. An empty path selects the whole
/// document.
pub fn lookup_path(root: &Value, path: &str) -> TokenLookup {
    let path = path.trim();
    if path.is_empty() {
        return TokenLookup::Found(root.clone());
    }

    let mut current = root;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => {
                return TokenLookup::NotFound {
                    path: path.to_string(),
                    missing: segment.to_string(),
                    available: top_level_keys(root),
                }
            }
        }
    }

    TokenLookup::Found(current.clone())
}

fn top_level_keys(root: &Value) -> Vec<String> {
    let mut keys: Vec<String> = root
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "colors": { "light": { "primary": "#3b82f6" } },
            "radius": null,
            "stack": [10, 20]
        })
    }

    #[test]
    fn finds_nested_values() {
        assert_eq!(
            lookup_path(&doc(), "colors.light.primary"),
            TokenLookup::Found(json!("#3b82f6"))
        );
        assert_eq!(lookup_path(&doc(), "stack.1"), TokenLookup::Found(json!(20)));
        assert_eq!(lookup_path(&doc(), "radius"), TokenLookup::Found(Value::Null));
        assert_eq!(lookup_path(&doc(), ""), TokenLookup::Found(doc()));
    }

    #[test]
    fn reports_missing_segment_and_top_level_keys() {
        assert_eq!(
            lookup_path(&doc(), "colors.light.nope"),
            TokenLookup::NotFound {
                path: "colors.light.nope".into(),
                missing: "nope".into(),
                available: vec!["colors".into(), "radius".into(), "stack".into()],
            }
        );
        // cannot descend into a null group
        assert!(!lookup_path(&doc(), "radius.sm").is_found());
        assert!(!lookup_path(&doc(), "colors..light").is_found());
    }
}
