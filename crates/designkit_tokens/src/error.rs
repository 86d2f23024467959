//! Token and catalog error types

use thiserror::Error;

/// Errors raised while loading catalogs or parsing token identifiers
#[derive(Error, Debug)]
pub enum TokensError {
    /// Catalog source is not valid TOML or does not match the catalog shape
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Two categories share the same id
    #[error("catalog category `{0}` is declared more than once")]
    DuplicateCategory(String),

    /// Two items share the same category and id
    #[error("catalog item `{category}/{id}` is declared more than once")]
    DuplicateItem { category: String, id: String },

    /// An item points at a category the catalog does not declare
    #[error("catalog item `{id}` references undeclared category `{category}`")]
    UnknownCategory { category: String, id: String },

    /// Color key is neither a base key nor `semantic.<name>`
    #[error("unknown color key `{0}`")]
    UnknownColorKey(String),

    /// Mode is neither `light` nor `dark`
    #[error("unknown color mode `{0}` (expected `light` or `dark`)")]
    UnknownMode(String),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokensError>;
