//! Placeholder markers embedded in style values
//!
//! Catalog style values may reference the active color set with `__`-prefixed
//! markers:
//!
//! - `__primary-NN` / `__accent-NN` (1-3 digits) render as
//!   `rgba(r,g,b,NN/100)` using the channels of that color's hex value.
//! - `__primaryForeground`, `__textSecondary`, `__textMuted`, `__surfaceAlt`,
//!   `__primary`, `__accent`, `__surface`, `__border`, `__background` and
//!   `__text` render as the color itself. Longer names are tried first.
//!
//! Anything else is kept verbatim. Values are parsed once into a [`Template`]
//! and can then be rendered against any [`ColorMode`].

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::tokens::{ColorKey, ColorMode};

const MARKER: &str = "__";

/// Markers accepting an alpha suffix, tried before the named markers
const SCALED_MARKERS: [(&str, ColorKey); 2] =
    [("primary", ColorKey::Primary), ("accent", ColorKey::Accent)];

/// Named markers, longest first so `primaryForeground` wins over `primary`
const NAMED_MARKERS: [(&str, ColorKey); 10] = [
    ("primaryForeground", ColorKey::PrimaryForeground),
    ("textSecondary", ColorKey::TextSecondary),
    ("textMuted", ColorKey::TextMuted),
    ("surfaceAlt", ColorKey::SurfaceAlt),
    ("primary", ColorKey::Primary),
    ("accent", ColorKey::Accent),
    ("surface", ColorKey::Surface),
    ("border", ColorKey::Border),
    ("background", ColorKey::Background),
    ("text", ColorKey::Text),
];

/// One piece of a parsed style value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    NamedToken(ColorKey),
    ScaledToken { key: ColorKey, percent: u16 },
}

/// A style value split into literal text and color markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(src: &str) -> Self {
        if !src.contains(MARKER) {
            return Self {
                segments: vec![Segment::Literal(src.to_string())],
            };
        }

        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while let Some(found) = src[pos..].find(MARKER) {
            let at = pos + found;
            match match_marker(&src[at + MARKER.len()..]) {
                Some((segment, consumed)) => {
                    if literal_start < at {
                        segments.push(Segment::Literal(src[literal_start..at].to_string()));
                    }
                    segments.push(segment);
                    pos = at + MARKER.len() + consumed;
                    literal_start = pos;
                }
                // `_` is one byte, so stepping a single byte stays on a char boundary
                None => pos = at + 1,
            }
        }

        if literal_start < src.len() {
            segments.push(Segment::Literal(src[literal_start..].to_string()));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the value contains no markers
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    pub fn render(&self, colors: &ColorMode) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::NamedToken(key) => out.push_str(colors.get(*key)),
                Segment::ScaledToken { key, percent } => {
                    write_scaled(&mut out, colors.get(*key), *percent)
                }
            }
        }
        out
    }
}

/// Resolve every marker in `value` against `colors`
///
/// Values without `__` are returned borrowed, without a parse pass.
pub fn resolve<'a>(value: &'a str, colors: &ColorMode) -> Cow<'a, str> {
    if !value.contains(MARKER) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(Template::parse(value).render(colors))
}

/// Match a marker body (text after `__`), returning the segment and bytes consumed
fn match_marker(rest: &str) -> Option<(Segment, usize)> {
    for (name, key) in SCALED_MARKERS {
        let Some(after) = rest.strip_prefix(name).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };
        let digits = after
            .bytes()
            .take(3)
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            continue;
        }
        if let Ok(percent) = after[..digits].parse::<u16>() {
            return Some((
                Segment::ScaledToken { key, percent },
                name.len() + 1 + digits,
            ));
        }
    }

    NAMED_MARKERS
        .into_iter()
        .find(|(name, _)| rest.starts_with(name))
        .map(|(name, key)| (Segment::NamedToken(key), name.len()))
}

/// `rgba(r,g,b,alpha)` from a `#RRGGBB` value; unparsable channels render as `NaN`
fn write_scaled(out: &mut String, hex: &str, percent: u16) {
    let [r, g, b] = hex_channels(hex);
    let channel = |c: Option<u8>| c.map_or_else(|| "NaN".to_string(), |v| v.to_string());
    let alpha = f64::from(percent) / 100.0;
    let _ = write!(
        out,
        "rgba({},{},{},{})",
        channel(r),
        channel(g),
        channel(b),
        alpha
    );
}

/// Decode the three byte pairs of a hex color
///
/// Each pair is read up to its first non-hex digit, so `"3g"` reads as `3`
/// and an empty or non-hex pair yields `None`.
fn hex_channels(hex: &str) -> [Option<u8>; 3] {
    let digits: Vec<char> = hex.replacen('#', "", 1).chars().collect();
    let mut out = [None; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let pair: String = digits
            .iter()
            .skip(i * 2)
            .take(2)
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        *slot = u8::from_str_radix(&pair, 16).ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::default_color_mode;
    use crate::tokens::Mode;
    use pretty_assertions::assert_eq;

    fn colors() -> ColorMode {
        let mut colors = default_color_mode(Mode::Light);
        colors.primary = "#3b82f6".to_string();
        colors.primary_foreground = "#ffffff".to_string();
        colors.accent = "#8b5cf6".to_string();
        colors.text = "#0f172a".to_string();
        colors
    }

    #[test]
    fn plain_values_are_borrowed() {
        let value = "1px solid red";
        assert!(matches!(resolve(value, &colors()), Cow::Borrowed(v) if v == value));
        assert!(Template::parse(value).is_literal());
    }

    #[test]
    fn single_underscores_are_not_markers() {
        assert_eq!(resolve("_primary", &colors()), "_primary");
        assert_eq!(resolve("snake_case_name", &colors()), "snake_case_name");
    }

    #[test]
    fn scaled_marker_renders_rgba() {
        assert_eq!(resolve("__primary-40", &colors()), "rgba(59,130,246,0.4)");
        assert_eq!(resolve("__accent-5", &colors()), "rgba(139,92,246,0.05)");
        assert_eq!(resolve("__primary-100", &colors()), "rgba(59,130,246,1)");
    }

    #[test]
    fn scaled_marker_is_not_clamped() {
        assert_eq!(resolve("__primary-150", &colors()), "rgba(59,130,246,1.5)");
    }

    #[test]
    fn scaled_marker_reads_at_most_three_digits() {
        assert_eq!(resolve("__primary-1234", &colors()), "rgba(59,130,246,1.23)4");
    }

    #[test]
    fn longer_names_win() {
        assert_eq!(resolve("__primaryForeground", &colors()), "#ffffff");
        assert_eq!(resolve("__primary", &colors()), "#3b82f6");
        assert_eq!(
            resolve("__text on __textSecondary", &colors()),
            format!("#0f172a on {}", colors().text_secondary)
        );
    }

    #[test]
    fn markers_inside_larger_values() {
        assert_eq!(
            resolve("0 0 0 3px __primary-20, inset 0 1px __border", &colors()),
            format!("0 0 0 3px rgba(59,130,246,0.2), inset 0 1px {}", colors().border)
        );
    }

    #[test]
    fn unknown_markers_are_inert() {
        assert_eq!(resolve("__secondary", &colors()), "__secondary");
        assert_eq!(resolve("__primary-", &colors()), "#3b82f6-");
        assert_eq!(resolve("a__b__", &colors()), "a__b__");
    }

    #[test]
    fn underscore_runs_before_marker() {
        assert_eq!(resolve("___primary", &colors()), "_#3b82f6");
    }

    #[test]
    fn malformed_hex_yields_nan_channels() {
        let mut c = colors();
        c.primary = "tomato".to_string();
        assert_eq!(resolve("__primary-40", &c), "rgba(NaN,NaN,NaN,0.4)");
        c.primary = "#3b8".to_string();
        assert_eq!(resolve("__primary-40", &c), "rgba(59,8,NaN,0.4)");
    }

    #[test]
    fn parse_once_render_many() {
        let template = Template::parse("__primary-10");
        assert_eq!(
            template.segments(),
            &[Segment::ScaledToken {
                key: ColorKey::Primary,
                percent: 10
            }]
        );
        let dark = default_color_mode(Mode::Dark);
        assert_ne!(template.render(&colors()), template.render(&dark));
    }
}
