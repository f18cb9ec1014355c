//! Prelude module for Lattice Sidebar.
//!
//! ```
//! use lattice_sidebar::prelude::*;
//! ```

// ============================================================================
// Panel
// ============================================================================

pub use crate::panel::{ClickOutcome, PanelContext, SidebarPanel};
pub use crate::config::SidebarConfig;
pub use crate::menu::{ItemPath, MenuItem, MenuSection};
pub use crate::navigation::{NavigationEnd, NavigationEvents};

// ============================================================================
// Rendering
// ============================================================================

pub use crate::geometry::{Point, Rect};
pub use crate::style::{Color, Width};
pub use crate::view::{RowKind, SidebarView};

// ============================================================================
// Shared State
// ============================================================================

pub use lattice_sidebar_core::{
    Position, Property, Signal, SidebarRegistry, SidebarState, SidebarStatePatch,
};
