//! Sidebar panel configuration.
//!
//! [`SidebarConfig`] holds every option a host can set on a panel. All fields
//! have defaults, so hosts only spell out what they change, either through the
//! `with_*` builder methods or in a TOML/JSON document.
//!
//! # Example
//!
//! ```
//! use lattice_sidebar::{Position, SidebarConfig};
//!
//! let config = SidebarConfig::from_toml_str(r#"
//!     sidebar_id = "docs"
//!     position = "right"
//!     title = "Documentation"
//!     close_on_click_outside = true
//! "#).unwrap();
//!
//! assert_eq!(config.position, Position::Right);
//! assert!(config.collapsible);
//! ```

use serde::{Deserialize, Serialize};

use lattice_sidebar_core::Position;

use crate::error::Result;
use crate::style::{Color, Width};

/// Default row highlight color while hovered.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::from_rgb8(0xe9, 0xec, 0xef);

/// Options for one sidebar panel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Registry key; panels sharing it stay in sync. May be empty.
    #[serde(alias = "sidebarId")]
    pub sidebar_id: String,

    /// Screen edge the panel declares at initialization.
    pub position: Position,

    /// Expanded width preset.
    pub width: Width,

    /// Header title. Empty means no title text.
    pub title: String,

    /// Whether the toggle control is shown and honored.
    pub collapsible: bool,

    /// Collapse the panel after every completed navigation.
    #[serde(alias = "hideSidebarOnPathChange")]
    pub hide_on_path_change: bool,

    /// Collapse the panel on clicks outside its region.
    #[serde(alias = "closeOnClickOutside")]
    pub close_on_click_outside: bool,

    /// Path of the currently routed item, rendered as active.
    #[serde(alias = "activeItemPath")]
    pub active_item_path: String,

    /// Row background while hovered.
    #[serde(alias = "backgroundHighlightColor")]
    pub background_highlight_color: Color,

    /// Panel background.
    #[serde(alias = "sidebarBackgroundColor")]
    pub background_color: Color,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: String::new(),
            position: Position::Left,
            width: Width::Medium,
            title: String::new(),
            collapsible: true,
            hide_on_path_change: false,
            close_on_click_outside: false,
            active_item_path: String::new(),
            background_highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            background_color: Color::WHITE,
        }
    }
}

impl SidebarConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a configuration from JSON.
    ///
    /// Both snake_case and the camelCase option names are accepted.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_sidebar_id(mut self, id: impl Into<String>) -> Self {
        self.sidebar_id = id.into();
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn with_hide_on_path_change(mut self, hide: bool) -> Self {
        self.hide_on_path_change = hide;
        self
    }

    pub fn with_close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = close;
        self
    }

    pub fn with_active_item_path(mut self, path: impl Into<String>) -> Self {
        self.active_item_path = path.into();
        self
    }

    pub fn with_background_highlight_color(mut self, color: Color) -> Self {
        self.background_highlight_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = SidebarConfig::default();
        assert_eq!(config.sidebar_id, "");
        assert_eq!(config.position, Position::Left);
        assert_eq!(config.width, Width::Medium);
        assert!(config.title.is_empty());
        assert!(config.collapsible);
        assert!(!config.hide_on_path_change);
        assert!(!config.close_on_click_outside);
        assert_eq!(config.background_highlight_color.to_hex(), "#e9ecef");
        assert_eq!(config.background_color, Color::WHITE);
    }

    #[test]
    fn test_toml_partial_document() {
        let config = SidebarConfig::from_toml_str(
            r##"
            sidebar_id = "nav-a"
            width = "small"
            collapsible = false
            background_highlight_color = "#112233"
            "##,
        )
        .unwrap();

        assert_eq!(config.sidebar_id, "nav-a");
        assert_eq!(config.width, Width::Small);
        assert!(!config.collapsible);
        assert_eq!(config.background_highlight_color, Color::from_rgb8(0x11, 0x22, 0x33));
        assert_eq!(config.position, Position::Left);
    }

    #[test]
    fn test_json_accepts_camel_case_names() {
        let config = SidebarConfig::from_json_str(
            r#"{"sidebarId": "right", "position": "right", "hideSidebarOnPathChange": true}"#,
        )
        .unwrap();

        assert_eq!(config.sidebar_id, "right");
        assert_eq!(config.position, Position::Right);
        assert!(config.hide_on_path_change);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SidebarConfig::from_toml_str("theme = \"dark\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = SidebarConfig::from_json_str(r#"{"background_color": "red"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn test_builder() {
        let config = SidebarConfig::new()
            .with_sidebar_id("k")
            .with_title("Menu")
            .with_close_on_click_outside(true)
            .with_active_item_path("/profile");
        assert_eq!(config.title, "Menu");
        assert!(config.close_on_click_outside);
        assert_eq!(config.active_item_path, "/profile");
    }
}
