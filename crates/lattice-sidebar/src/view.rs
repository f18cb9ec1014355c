//! Headless render description of a sidebar panel.
//!
//! [`SidebarView`] is what the panel hands to a host renderer: everything the
//! markup needs (which rows exist, their labels, link targets, highlight and
//! active flags, glyphs) with no behavior attached. Rows carry their
//! [`ItemPath`] so the renderer can route pointer events back to the panel.

use lattice_sidebar_core::Position;

use crate::menu::ItemPath;
use crate::style::{Color, Width};

/// Toggle control glyph while collapsed.
pub const GLYPH_OPEN: &str = "☰";
/// Toggle control glyph while expanded.
pub const GLYPH_CLOSE: &str = "✕";
/// Caret for an expanded parent item.
pub const CARET_EXPANDED: &str = "⌄";
/// Caret for a collapsed parent item.
pub const CARET_COLLAPSED: &str = "›";

/// The full render description of one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub position: Position,
    pub width: Width,
    /// Current width in pixels, accounting for the collapsed rail.
    pub width_px: f32,
    pub collapsed: bool,
    pub background: Color,
    /// Present when the panel has a title or is collapsible.
    pub header: Option<HeaderView>,
    pub sections: Vec<SectionView>,
}

impl SidebarView {
    /// All rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &RowView> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    /// Find the row rendered for `at`.
    pub fn row(&self, at: ItemPath) -> Option<&RowView> {
        self.rows().find(|row| row.at == at)
    }
}

/// The header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Title text; hidden while collapsed.
    pub title: Option<String>,
    /// Toggle control glyph; absent when not collapsible.
    pub toggle_glyph: Option<&'static str>,
}

/// One section of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Section heading; hidden while collapsed.
    pub header: Option<String>,
    pub rows: Vec<RowView>,
}

/// The kind of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Top-level item without children.
    Leaf,
    /// Top-level item with children.
    Parent { expanded: bool },
    /// Nested item under an expanded parent.
    Child,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub at: ItemPath,
    pub kind: RowKind,
    /// Label text; hidden while collapsed.
    pub label: Option<String>,
    /// Navigation link; never present on parent rows.
    pub link: Option<String>,
    /// The row's path matches the active item path.
    pub active: bool,
    /// The row is under the pointer.
    pub highlighted: bool,
    /// Row background: the highlight color when highlighted, else transparent.
    pub background: Color,
    /// Expansion caret for parent rows; hidden while collapsed.
    pub caret: Option<&'static str>,
}
