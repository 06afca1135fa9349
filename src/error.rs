//! Error types for treemenu
//!
//! Library errors use `thiserror`; ports and the binary use `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::ValidationError;

/// Result type alias for treemenu operations
pub type TreeMenuResult<T> = Result<T, TreeMenuError>;

/// Main error type for treemenu operations
#[derive(Error, Debug)]
pub enum TreeMenuError {
    /// No items are stored under the requested menu name
    #[error("menu \"{menu_name}\" not found")]
    MenuNotFound { menu_name: String },

    /// No item with the requested id exists
    #[error("menu item {id} not found")]
    ItemNotFound { id: u64 },

    /// Menu store file could not be parsed
    #[error("invalid menu store {file}: {message}")]
    InvalidStore { file: PathBuf, message: String },

    /// Menu store parsed but violates the tree invariants
    #[error("menu store {file} failed validation: {source}")]
    InvalidItems {
        file: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// Configuration file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Template referenced a tag nobody registered
    #[error("unknown template tag '{name}'")]
    UnknownTemplateTag { name: String },

    /// Template tag could not be parsed
    #[error("template syntax error: {message}")]
    TemplateSyntax { message: String },

    /// Storage collaborator failed to deliver items
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
