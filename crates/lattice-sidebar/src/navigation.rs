//! Navigation completion events.
//!
//! The routing subsystem is external to the sidebar. A host bridges its router
//! into [`NavigationEvents`] by calling
//! [`notify_navigation_end`](NavigationEvents::notify_navigation_end) once per
//! completed route change; panels with `hide_on_path_change` listen for these.
//!
//! # Example
//!
//! ```
//! use lattice_sidebar::NavigationEvents;
//!
//! let navigation = NavigationEvents::new();
//! let _guard = navigation.on_navigation_end(|event| {
//!     println!("navigated to {}", event.url);
//! });
//! navigation.notify_navigation_end("/profile");
//! ```

use lattice_sidebar_core::logging::targets;
use lattice_sidebar_core::{ConnectionGuard, Signal};

/// A completed route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEnd {
    /// The URL navigated to, as reported by the router.
    pub url: String,
}

/// Source of navigation completion notifications.
#[derive(Debug, Default)]
pub struct NavigationEvents {
    navigation_end: Signal<NavigationEnd>,
}

impl NavigationEvents {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a completed route change to every listener.
    pub fn notify_navigation_end(&self, url: impl Into<String>) {
        let event = NavigationEnd { url: url.into() };
        tracing::debug!(
            target: targets::NAVIGATION,
            url = %event.url,
            listeners = self.navigation_end.connection_count(),
            "navigation completed"
        );
        self.navigation_end.emit(event);
    }

    /// Listen for completed route changes until the guard is dropped.
    pub fn on_navigation_end<F>(&self, slot: F) -> ConnectionGuard<NavigationEnd>
    where
        F: Fn(&NavigationEnd) + Send + Sync + 'static,
    {
        self.navigation_end.connect_scoped(slot)
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.navigation_end.connection_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_listener_receives_events_until_dropped() {
        let navigation = NavigationEvents::new();
        let urls = Arc::new(Mutex::new(Vec::new()));

        let urls_clone = urls.clone();
        let guard = navigation.on_navigation_end(move |event| {
            urls_clone.lock().push(event.url.clone());
        });
        assert_eq!(navigation.listener_count(), 1);

        navigation.notify_navigation_end("/a");
        drop(guard);
        navigation.notify_navigation_end("/b");

        assert_eq!(*urls.lock(), vec!["/a".to_string()]);
        assert_eq!(navigation.listener_count(), 0);
    }
}
