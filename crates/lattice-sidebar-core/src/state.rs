//! Sidebar display state shared through the registry.
//!
//! [`SidebarState`] is the externally observable display mode of one logical
//! sidebar. It is never mutated in place by readers; writers describe the
//! fields they want to change with a [`SidebarStatePatch`] and the registry
//! merges it into the current state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// The screen edge a sidebar is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Docked to the left edge.
    #[default]
    Left,
    /// Docked to the right edge.
    Right,
}

impl Position {
    /// The lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(StateError::InvalidPosition(other.to_string())),
        }
    }
}

/// The display state of one logical sidebar.
///
/// Unseen keys start from [`SidebarState::default`]: expanded, docked left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SidebarState {
    /// Whether the sidebar is collapsed to its icon rail.
    pub is_collapsed: bool,
    /// The screen edge the sidebar is docked to.
    pub position: Position,
}

impl SidebarState {
    /// Create a state from its fields.
    pub const fn new(is_collapsed: bool, position: Position) -> Self {
        Self {
            is_collapsed,
            position,
        }
    }

    /// Return this state with the patch's present fields applied.
    ///
    /// Fields the patch leaves as `None` keep their current value.
    #[must_use]
    pub fn merged(self, patch: &SidebarStatePatch) -> Self {
        Self {
            is_collapsed: patch.is_collapsed.unwrap_or(self.is_collapsed),
            position: patch.position.unwrap_or(self.position),
        }
    }
}

/// A partial [`SidebarState`] used as the argument of a registry write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarStatePatch {
    /// New collapsed flag, if it should change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
    /// New position, if it should change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl SidebarStatePatch {
    /// A patch that changes nothing.
    pub const fn empty() -> Self {
        Self {
            is_collapsed: None,
            position: None,
        }
    }

    /// A patch that only sets the collapsed flag.
    pub const fn collapsed(is_collapsed: bool) -> Self {
        Self {
            is_collapsed: Some(is_collapsed),
            position: None,
        }
    }

    /// A patch that only sets the position.
    pub const fn position(position: Position) -> Self {
        Self {
            is_collapsed: None,
            position: Some(position),
        }
    }

    /// Also set the collapsed flag.
    #[must_use]
    pub const fn with_collapsed(mut self, is_collapsed: bool) -> Self {
        self.is_collapsed = Some(is_collapsed);
        self
    }

    /// Also set the position.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Check whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.is_collapsed.is_none() && self.position.is_none()
    }
}

impl From<SidebarState> for SidebarStatePatch {
    fn from(state: SidebarState) -> Self {
        Self::collapsed(state.is_collapsed).with_position(state.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SidebarState::default();
        assert!(!state.is_collapsed);
        assert_eq!(state.position, Position::Left);
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let state = SidebarState::new(false, Position::Right);

        let collapsed = state.merged(&SidebarStatePatch::collapsed(true));
        assert_eq!(collapsed, SidebarState::new(true, Position::Right));

        let moved = collapsed.merged(&SidebarStatePatch::position(Position::Left));
        assert_eq!(moved, SidebarState::new(true, Position::Left));

        assert_eq!(moved.merged(&SidebarStatePatch::empty()), moved);
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("left".parse::<Position>(), Ok(Position::Left));
        assert_eq!(" right ".parse::<Position>(), Ok(Position::Right));
        assert_eq!(
            "top".parse::<Position>(),
            Err(StateError::InvalidPosition("top".to_string()))
        );
        assert_eq!(Position::Right.to_string(), "right");
    }

    #[test]
    fn test_patch_from_state() {
        let patch = SidebarStatePatch::from(SidebarState::new(true, Position::Right));
        assert_eq!(patch.is_collapsed, Some(true));
        assert_eq!(patch.position, Some(Position::Right));
        assert!(!patch.is_empty());
        assert!(SidebarStatePatch::default().is_empty());
    }
}
