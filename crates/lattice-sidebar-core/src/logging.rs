//! Logging facilities for Lattice Sidebar.
//!
//! Lattice Sidebar uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_sidebar_core::registry=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_sidebar_core::signal";
    /// Shared sidebar state registry target.
    pub const REGISTRY: &str = "lattice_sidebar_core::registry";
    /// Sidebar panel state machine target.
    pub const PANEL: &str = "lattice_sidebar::panel";
    /// Navigation event target.
    pub const NAVIGATION: &str = "lattice_sidebar::navigation";
}
