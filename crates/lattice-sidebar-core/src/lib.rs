//! Core systems for Lattice Sidebar.
//!
//! This crate provides the foundational components the sidebar panel is built on:
//!
//! - **Signal/Slot System**: Ordered, re-entrant observer notifications
//! - **Property System**: Reactive properties with change detection
//! - **Sidebar State Registry**: Process-wide, per-key collapse/position state
//!   that keeps independent sidebar instances in sync
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_sidebar_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Registry Example
//!
//! ```
//! use lattice_sidebar_core::{Position, SidebarRegistry, SidebarState, SidebarStatePatch};
//!
//! let registry = SidebarRegistry::new();
//!
//! // Unseen keys start expanded and docked left
//! assert_eq!(registry.snapshot("nav-a"), SidebarState::default());
//!
//! registry.set_state("nav-a", SidebarStatePatch::collapsed(true));
//! registry.set_state("nav-a", SidebarStatePatch::position(Position::Right));
//! assert_eq!(registry.snapshot("nav-a"), SidebarState::new(true, Position::Right));
//!
//! // Toggle flips the latest committed value
//! assert!(!registry.toggle("nav-a").is_collapsed);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod registry;
pub mod signal;
pub mod state;

pub use error::{Result, StateError};
pub use property::Property;
pub use registry::{SidebarRegistry, StateWatch, Subscription};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use state::{Position, SidebarState, SidebarStatePatch};
