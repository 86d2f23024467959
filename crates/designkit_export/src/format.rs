//! The export format registry

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use designkit_tokens::DesignConfig;

use crate::codecs;
use crate::error::{ExportError, Result};

/// Target formats a [`DesignConfig`] can be exported to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ExportFormat {
    /// The config itself, pretty-printed
    Json,
    /// CSS custom properties plus component classes
    Css,
    /// `tailwind.config.js` wired to the CSS variables
    Tailwind,
    /// SwiftUI constants
    Swift,
    /// Jetpack Compose constants
    Kotlin,
    /// Flutter constants
    Flutter,
    /// React Native style objects
    ReactNative,
    /// Markdown brief for LLM coding assistants
    ClaudeMd,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 8] = [
        ExportFormat::Json,
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Swift,
        ExportFormat::Kotlin,
        ExportFormat::Flutter,
        ExportFormat::ReactNative,
        ExportFormat::ClaudeMd,
    ];

    /// Identifier used in URLs and on the command line
    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Swift => "swift",
            ExportFormat::Kotlin => "kotlin",
            ExportFormat::Flutter => "flutter",
            ExportFormat::ReactNative => "react-native",
            ExportFormat::ClaudeMd => "claude-md",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Css => "CSS Variables",
            ExportFormat::Tailwind => "Tailwind Config",
            ExportFormat::Swift => "SwiftUI",
            ExportFormat::Kotlin => "Jetpack Compose",
            ExportFormat::Flutter => "Flutter",
            ExportFormat::ReactNative => "React Native",
            ExportFormat::ClaudeMd => "CLAUDE.md",
        }
    }

    /// HTTP `Content-Type` of the artifact
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Css => "text/css; charset=utf-8",
            ExportFormat::Tailwind | ExportFormat::ReactNative => {
                "text/javascript; charset=utf-8"
            }
            ExportFormat::Swift => "text/x-swift; charset=utf-8",
            ExportFormat::Kotlin => "text/x-kotlin; charset=utf-8",
            ExportFormat::Flutter => "text/x-dart; charset=utf-8",
            ExportFormat::ClaudeMd => "text/markdown; charset=utf-8",
        }
    }

    /// Conventional file name for the artifact
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "design-tokens.json",
            ExportFormat::Css => "design-tokens.css",
            ExportFormat::Tailwind => "tailwind.config.js",
            ExportFormat::Swift => "DesignTokens.swift",
            ExportFormat::Kotlin => "DesignTokens.kt",
            ExportFormat::Flutter => "design_tokens.dart",
            ExportFormat::ReactNative => "theme.js",
            ExportFormat::ClaudeMd => "CLAUDE.md",
        }
    }

    /// Comma-separated list of every format id, in registry order
    pub fn known_ids() -> String {
        Self::ALL
            .iter()
            .map(|f| f.id())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Run the codec for this format
    pub fn export(self, config: &DesignConfig) -> Result<String> {
        let text = match self {
            ExportFormat::Json => codecs::json::encode(config)?,
            ExportFormat::Css => codecs::css::encode(config),
            ExportFormat::Tailwind => codecs::tailwind::encode(config),
            ExportFormat::Swift => codecs::swift::encode(config),
            ExportFormat::Kotlin => codecs::kotlin::encode(config),
            ExportFormat::Flutter => codecs::flutter::encode(config),
            ExportFormat::ReactNative => codecs::react_native::encode(config),
            ExportFormat::ClaudeMd => codecs::markdown::encode(config),
        };
        tracing::debug!(format = self.id(), bytes = text.len(), "exported config");
        Ok(text)
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ExportError::unknown_format(s))
    }
}
