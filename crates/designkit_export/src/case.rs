//! Identifier case conversion
//!
//! Token and style names arrive as `surfaceAlt`, `row-hover`, `2xl` or
//! `semantic.success`. Each codec picks the convention its target expects.

/// Split a name into lowercase words at separators and lower-to-upper
/// transitions
pub fn words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `surface-alt`
pub fn kebab(name: &str) -> String {
    words(name).join("-")
}

/// `surface_alt`
pub fn snake(name: &str) -> String {
    words(name).join("_")
}

/// `surfaceAlt`
pub fn camel(name: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(&identifier_source(name)).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `SurfaceAlt`
pub fn pascal(name: &str) -> String {
    words(&identifier_source(name))
        .iter()
        .map(|w| capitalize(w))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Rewrite names that cannot start an identifier
///
/// Size steps such as `2xl` become `xxl`; any other leading digit is
/// prefixed with `n`.
fn identifier_source(name: &str) -> String {
    let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return name.to_string();
    }
    let rest = &name[digits.len()..];
    match (digits.parse::<usize>(), rest) {
        (Ok(n), "xl") if n <= 9 => format!("{}l", "x".repeat(n)),
        _ => format!("n{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_camel_and_separators() {
        assert_eq!(words("surfaceAlt"), vec!["surface", "alt"]);
        assert_eq!(words("semantic.success"), vec!["semantic", "success"]);
        assert_eq!(words("row-hover"), vec!["row", "hover"]);
        assert_eq!(words("2xl"), vec!["2xl"]);
    }

    #[test]
    fn conversions() {
        assert_eq!(kebab("textSecondary"), "text-secondary");
        assert_eq!(snake("primaryForeground"), "primary_foreground");
        assert_eq!(camel("item-active"), "itemActive");
        assert_eq!(camel("border-radius"), "borderRadius");
        assert_eq!(pascal("surfaceAlt"), "SurfaceAlt");
        assert_eq!(pascal("semantic.info"), "SemanticInfo");
    }

    #[test]
    fn leading_digits_become_identifiers() {
        assert_eq!(camel("2xl"), "xxl");
        assert_eq!(pascal("4xl"), "Xxxxl");
        assert_eq!(camel("3d-effect"), "n3dEffect");
        assert_eq!(kebab("2xl"), "2xl");
    }
}
