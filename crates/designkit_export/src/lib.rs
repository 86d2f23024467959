//! designkit export codecs
//!
//! Projects a resolved [`DesignConfig`] into the text formats a project
//! consumes.
//!
//! | id | output |
//! |---|---|
//! | `json` | the config itself |
//! | `css` | custom properties on `:root` / `.dark` plus component rules |
//! | `tailwind` | `tailwind.config.js` extending the theme |
//! | `swift` | SwiftUI `DesignTokens` namespace |
//! | `kotlin` | Jetpack Compose `DesignTokens` object |
//! | `flutter` | Dart constant classes |
//! | `react-native` | ES module of style objects |
//! | `claude-md` | Markdown brief for coding assistants |
//!
//! # Example
//!
//! ```rust
//! use designkit_export::{export, ExportFormat};
//! use designkit_tokens::{build_config, Catalog, DesignKitState};
//!
//! let config = build_config(&Catalog::builtin(), &DesignKitState::new());
//! let format: ExportFormat = "css".parse().unwrap();
//! let css = export(format, &config).unwrap();
//! assert!(css.contains(":root {"));
//! ```

pub mod case;
pub mod codecs;
pub mod error;
pub mod format;

pub use error::{ExportError, Result};
pub use format::ExportFormat;

use designkit_tokens::DesignConfig;

/// Run the codec for `format`
pub fn export(format: ExportFormat, config: &DesignConfig) -> Result<String> {
    format.export(config)
}
