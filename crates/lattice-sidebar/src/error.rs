//! Error types for the sidebar panel crate.
//!
//! Panel interactions never fail; errors only come from loading configuration
//! and menu data supplied as text.

use lattice_sidebar_core::StateError;

/// Result type alias for sidebar configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading sidebar configuration or menu data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML parsing error.
    #[error("Invalid TOML sidebar configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("Invalid JSON sidebar data: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown width name.
    #[error("Invalid sidebar width '{0}', expected 'small', 'medium' or 'large'")]
    InvalidWidth(String),

    /// Malformed color string.
    #[error("Invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// Invalid core value, such as an unknown position.
    #[error(transparent)]
    State(#[from] StateError),
}
