//! Shared sidebar state registry.
//!
//! The [`SidebarRegistry`] is the single source of truth for the display state
//! of every logical sidebar, keyed by an opaque string. Sidebar instances that
//! must agree on collapse and position (for example a left and a right panel,
//! or two renderings of the same panel) share a key and talk only to the
//! registry, never to each other.
//!
//! # Semantics
//!
//! - Keys are created on first reference with [`SidebarState::default`].
//!   Every string is a valid key, including the empty string.
//! - [`set_state`](SidebarRegistry::set_state) merges a patch into the current
//!   state and synchronously notifies every subscriber of that key, in
//!   subscription order, before returning.
//! - [`StateWatch::subscribe`] delivers the current state immediately, then
//!   every later committed state until the [`Subscription`] is released.
//! - [`toggle`](SidebarRegistry::toggle) flips the most recently committed
//!   collapsed flag; the read and the write form a single step.
//! - Subscribers always receive the latest committed state. If a subscriber
//!   writes to the same key while being notified, the subscribers after it
//!   in the outer notification receive the newer state, never a stale one.
//!
//! # Threading
//!
//! Each key owns a reentrant "turn" lock that is held across merge-and-notify
//! and across toggle's read-then-write. Writers on other threads wait for the
//! current turn to finish; subscribers running inside a notification may call
//! back into the registry on the same thread.
//!
//! # Example
//!
//! ```
//! use lattice_sidebar_core::{SidebarRegistry, SidebarStatePatch};
//!
//! let registry = SidebarRegistry::new();
//! let watch = registry.get_state("nav-a");
//! let _subscription = watch.subscribe(|state| {
//!     println!("collapsed: {}", state.is_collapsed);
//! });
//!
//! registry.set_state("nav-a", SidebarStatePatch::collapsed(true));
//! assert!(registry.snapshot("nav-a").is_collapsed);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, ReentrantMutex};

use crate::logging::targets;
use crate::property::Property;
use crate::signal::{ConnectionGuard, Signal};
use crate::state::{SidebarState, SidebarStatePatch};

/// State and subscribers for one key.
struct KeyEntry {
    key: String,
    /// Serializes merge-and-notify and toggle for this key.
    turn: ReentrantMutex<()>,
    state: Property<SidebarState>,
    changed: Signal<SidebarState>,
}

impl KeyEntry {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            turn: ReentrantMutex::new(()),
            state: Property::new(SidebarState::default()),
            changed: Signal::new(),
        }
    }

    /// Merge and broadcast. The caller must hold `turn`.
    fn commit(&self, patch: &SidebarStatePatch) -> SidebarState {
        let next = self.state.get().merged(patch);
        let changed = self.state.set(next);
        tracing::debug!(
            target: targets::REGISTRY,
            key = %self.key,
            is_collapsed = next.is_collapsed,
            position = %next.position,
            changed,
            subscribers = self.changed.connection_count(),
            "committing sidebar state"
        );
        self.changed.emit(next);
        next
    }
}

/// The process-wide registry instance.
static GLOBAL_REGISTRY: OnceLock<Arc<SidebarRegistry>> = OnceLock::new();

/// A keyed store of [`SidebarState`] with change notification.
///
/// # Related
///
/// - [`SidebarRegistry::global`] - The process-wide instance panels use by default
/// - [`StateWatch`] - Subscribable view of one key
/// - [`Subscription`] - RAII handle that stops notifications when dropped
pub struct SidebarRegistry {
    entries: Mutex<HashMap<String, Arc<KeyEntry>>>,
}

impl Default for SidebarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarRegistry {
    /// Create an empty, isolated registry.
    ///
    /// Most hosts want [`SidebarRegistry::global`]; separate instances are
    /// useful for embedding several independent UIs in one process and for
    /// tests.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the process-wide registry, creating it on first use.
    ///
    /// The registry lives until the process exits; keys are never removed.
    pub fn global() -> Arc<SidebarRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(SidebarRegistry::new()))
            .clone()
    }

    /// Get the entry for `key`, creating it with default state if unseen.
    fn entry(&self, key: &str) -> Arc<KeyEntry> {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get(key) {
            return entry.clone();
        }
        tracing::debug!(target: targets::REGISTRY, key, "creating sidebar state with defaults");
        let entry = Arc::new(KeyEntry::new(key));
        entries.insert(key.to_string(), entry.clone());
        entry
    }

    /// Merge `patch` into the state of `key` and notify its subscribers.
    ///
    /// Every subscriber receives the full merged state, including the one
    /// whose owner made this call. Notification is complete when this
    /// returns. Returns the merged state.
    #[tracing::instrument(skip(self, patch), target = "lattice_sidebar_core::registry", level = "trace")]
    pub fn set_state(&self, key: &str, patch: impl Into<SidebarStatePatch>) -> SidebarState {
        let patch = patch.into();
        let entry = self.entry(key);
        let _turn = entry.turn.lock();
        entry.commit(&patch)
    }

    /// Flip the collapsed flag of `key` and notify its subscribers.
    ///
    /// Reads the most recently committed value and writes its negation in one
    /// turn; no other writer to this key can interleave. Returns the new state.
    #[tracing::instrument(skip(self), target = "lattice_sidebar_core::registry", level = "trace")]
    pub fn toggle(&self, key: &str) -> SidebarState {
        let entry = self.entry(key);
        let _turn = entry.turn.lock();
        let current = entry.state.with(|state| state.is_collapsed);
        entry.commit(&SidebarStatePatch::collapsed(!current))
    }

    /// Get a subscribable view of the state of `key`.
    pub fn get_state(&self, key: &str) -> StateWatch {
        StateWatch {
            entry: self.entry(key),
        }
    }

    /// Read the current state of `key`.
    pub fn snapshot(&self, key: &str) -> SidebarState {
        self.entry(key).state.get()
    }

    /// Number of live subscriptions on `key`.
    ///
    /// Returns 0 for unseen keys without creating them.
    pub fn subscriber_count(&self, key: &str) -> usize {
        let entry = self.entries.lock().get(key).cloned();
        entry.map_or(0, |entry| entry.changed.connection_count())
    }

    /// All keys referenced so far, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for SidebarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

/// A subscribable view of one key's state.
///
/// Obtained from [`SidebarRegistry::get_state`].
#[derive(Clone)]
pub struct StateWatch {
    entry: Arc<KeyEntry>,
}

impl StateWatch {
    /// The key this view observes.
    pub fn key(&self) -> &str {
        &self.entry.key
    }

    /// The current state.
    pub fn current(&self) -> SidebarState {
        self.entry.state.get()
    }

    /// Subscribe to this key's state.
    ///
    /// `slot` is called immediately with the current state, then after every
    /// committed write to the key until the returned [`Subscription`] is
    /// released or dropped.
    pub fn subscribe<F>(&self, slot: F) -> Subscription
    where
        F: Fn(&SidebarState) + Send + Sync + 'static,
    {
        let _turn = self.entry.turn.lock();
        let slot = Arc::new(slot);
        // Connect first so that writes made by the initial delivery reach us.
        let forward = slot.clone();
        let entry = Arc::downgrade(&self.entry);
        let guard = self.entry.changed.connect_scoped(move |committed| {
            // A write nested inside this notification supersedes `committed`.
            let latest = entry.upgrade().map_or(*committed, |entry| entry.state.get());
            forward(&latest);
        });
        tracing::debug!(
            target: targets::REGISTRY,
            key = %self.entry.key,
            subscribers = self.entry.changed.connection_count(),
            "subscribed to sidebar state"
        );
        let current = self.entry.state.get();
        slot(&current);
        Subscription {
            key: self.entry.key.clone(),
            guard: Some(guard),
        }
    }
}

impl fmt::Debug for StateWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateWatch")
            .field("key", &self.entry.key)
            .field("state", &self.current())
            .finish()
    }
}

/// A live subscription to one key's state.
///
/// Dropping the subscription or calling [`unsubscribe`](Self::unsubscribe)
/// stops delivery immediately, including for a notification that is already
/// in progress but has not reached this subscriber yet.
#[must_use = "dropping the subscription stops notifications immediately"]
pub struct Subscription {
    key: String,
    guard: Option<ConnectionGuard<SidebarState>>,
}

impl Subscription {
    /// The key this subscription observes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the subscription still receives notifications.
    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    /// Stop receiving notifications.
    ///
    /// Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.disconnect();
            tracing::debug!(target: targets::REGISTRY, key = %self.key, "unsubscribed from sidebar state");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("active", &self.is_active())
            .finish()
    }
}

static_assertions::assert_impl_all!(SidebarRegistry: Send, Sync);
static_assertions::assert_impl_all!(StateWatch: Send, Sync);
static_assertions::assert_impl_all!(Subscription: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn recorder() -> (
        Arc<Mutex<Vec<SidebarState>>>,
        impl Fn(&SidebarState) + Send + Sync + 'static,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        (seen, move |state: &SidebarState| seen_clone.lock().push(*state))
    }

    #[test]
    fn test_unseen_key_gets_defaults() {
        let registry = SidebarRegistry::new();
        assert_eq!(registry.snapshot("nav-a"), SidebarState::default());
        assert_eq!(registry.keys(), vec!["nav-a".to_string()]);
    }

    #[test]
    fn test_subscribe_emits_current_state_first() {
        let registry = SidebarRegistry::new();
        registry.set_state("nav-a", SidebarStatePatch::collapsed(true));

        let (seen, slot) = recorder();
        let _sub = registry.get_state("nav-a").subscribe(slot);

        assert_eq!(*seen.lock(), vec![SidebarState::new(true, Position::Left)]);
    }

    #[test]
    fn test_set_state_merges_and_notifies() {
        let registry = SidebarRegistry::new();
        let (seen, slot) = recorder();
        let _sub = registry.get_state("k").subscribe(slot);

        registry.set_state("k", SidebarStatePatch::position(Position::Right));
        registry.set_state("k", SidebarStatePatch::collapsed(true));

        assert_eq!(
            *seen.lock(),
            vec![
                SidebarState::new(false, Position::Left),
                SidebarState::new(false, Position::Right),
                SidebarState::new(true, Position::Right),
            ]
        );
    }

    #[test]
    fn test_set_state_notifies_even_without_change() {
        let registry = SidebarRegistry::new();
        let (seen, slot) = recorder();
        let _sub = registry.get_state("k").subscribe(slot);

        registry.set_state("k", SidebarStatePatch::collapsed(false));
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let registry = SidebarRegistry::new();
        let before = registry.snapshot("k");

        assert!(registry.toggle("k").is_collapsed);
        let after = registry.toggle("k");

        assert_eq!(after, before);
    }

    #[test]
    fn test_empty_key_is_a_regular_key() {
        let registry = SidebarRegistry::new();
        registry.toggle("");
        assert!(registry.snapshot("").is_collapsed);
        assert!(!registry.snapshot("other").is_collapsed);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let registry = SidebarRegistry::new();
        let (seen, slot) = recorder();
        let mut sub = registry.get_state("k").subscribe(slot);
        assert_eq!(registry.subscriber_count("k"), 1);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(registry.subscriber_count("k"), 0);

        registry.toggle("k");
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_subscriber_count_does_not_create_key() {
        let registry = SidebarRegistry::new();
        assert_eq!(registry.subscriber_count("ghost"), 0);
        assert!(registry.keys().is_empty());
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = SidebarRegistry::global();
        let b = SidebarRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
