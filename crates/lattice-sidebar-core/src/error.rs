//! Error types for Lattice Sidebar core.
//!
//! The registry and signal operations are infallible. Errors only arise when
//! converting external text into the core's value types.

use std::fmt;

/// Errors produced when parsing core value types from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The string does not name a sidebar position.
    InvalidPosition(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(value) => {
                write!(f, "Invalid sidebar position '{value}', expected 'left' or 'right'")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// A specialized Result type for Lattice Sidebar core operations.
pub type Result<T> = std::result::Result<T, StateError>;
