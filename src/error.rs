use thiserror::Error;

/// Errors that can occur while loading or validating a recipe catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Recipe #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Recipe '{0}' is defined more than once in the catalog")]
    DuplicateRecipe(String),
}

/// Errors raised by the pantry state container when an operation targets
/// something that does not exist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PantryError {
    #[error("Inventory entry '{0}' not found")]
    ItemNotFound(String),

    #[error("Shopping row '{0}' not found")]
    RowNotFound(String),

    #[error("Recipe '{0}' is not part of the catalog")]
    UnknownRecipe(String),
}

/// Errors that can occur when reading or writing a pantry snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Could not access snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
