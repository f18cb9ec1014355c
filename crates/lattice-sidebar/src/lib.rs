//! Lattice Sidebar - a collapsible, sectioned navigation panel.
//!
//! Every panel is keyed by a `sidebar_id`. Panels sharing a key share one
//! collapsed/position state through [`SidebarRegistry`], so collapsing one
//! collapses all of them in the same turn.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lattice_sidebar::prelude::*;
//!
//! let registry = Arc::new(SidebarRegistry::new());
//! let menu = MenuSection::list_from_json(r#"[
//!     {"header": "Main", "items": [
//!         {"label": "Home", "path": "/"},
//!         {"label": "Settings", "children": [{"label": "Profile", "path": "/profile"}]}
//!     ]}
//! ]"#)?;
//!
//! let config = SidebarConfig::from_toml_str(r#"
//!     sidebar_id = "nav-a"
//!     title = "Menu"
//!     width = "large"
//! "#)?;
//!
//! let left = SidebarPanel::new(config.clone(), menu.clone(), PanelContext::new(registry.clone()));
//! let right = SidebarPanel::new(config, menu, PanelContext::new(registry.clone()));
//!
//! left.toggle_sidebar();
//! assert!(left.is_collapsed());
//! assert!(right.is_collapsed());
//! assert_eq!(right.view().width_px, 40.0);
//! # Ok::<(), lattice_sidebar::Error>(())
//! ```

pub mod config;
mod error;
pub mod geometry;
pub mod hover;
pub mod menu;
pub mod navigation;
pub mod panel;
pub mod prelude;
pub mod style;
pub mod view;

pub use error::{Error, Result};

pub use config::SidebarConfig;
pub use geometry::{Point, Rect};
pub use hover::HoverCursor;
pub use menu::{ItemPath, MenuItem, MenuSection};
pub use navigation::{NavigationEnd, NavigationEvents};
pub use panel::{ClickOutcome, PanelContext, SidebarPanel};
pub use style::{Color, Width};
pub use view::{HeaderView, RowKind, RowView, SectionView, SidebarView};

pub use lattice_sidebar_core::{
    Position, Property, Signal, SidebarRegistry, SidebarState, SidebarStatePatch, StateWatch,
    Subscription,
};
