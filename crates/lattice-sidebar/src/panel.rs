//! Sidebar panel implementation.
//!
//! This module provides [`SidebarPanel`], a collapsible navigation panel that
//! renders a sectioned, two-level menu and keeps its collapsed/expanded mode
//! in the shared [`SidebarRegistry`] so that every panel with the same
//! `sidebar_id` moves together.
//!
//! The panel is headless: the host feeds it gestures (toggle clicks, item
//! clicks, pointer enter/leave, document clicks) and renders
//! [`SidebarPanel::view`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lattice_sidebar::prelude::*;
//!
//! let registry = Arc::new(SidebarRegistry::new());
//! let menu = vec![MenuSection::new("Main", vec![
//!     MenuItem::leaf("Home", "/"),
//!     MenuItem::parent("Settings", vec![MenuItem::leaf("Profile", "/profile")]),
//! ])];
//!
//! let mut panel = SidebarPanel::new(
//!     SidebarConfig::new().with_sidebar_id("nav"),
//!     menu,
//!     PanelContext::new(registry.clone()),
//! );
//!
//! panel.item_selected.connect(|item| println!("selected {}", item.label));
//!
//! // Collapse every panel keyed "nav"
//! panel.toggle_sidebar();
//! assert!(registry.snapshot("nav").is_collapsed);
//!
//! // Parent items expand and collapse in place
//! let outcome = panel.click_item(ItemPath::item(0, 1));
//! assert!(outcome.prevents_default());
//! assert_eq!(panel.sections()[0].items[1].is_expanded, Some(false));
//! ```

use std::fmt;
use std::sync::Arc;

use lattice_sidebar_core::logging::targets;
use lattice_sidebar_core::{
    ConnectionGuard, Position, Property, SidebarRegistry, SidebarState, SidebarStatePatch, Signal,
    Subscription,
};

use crate::config::SidebarConfig;
use crate::geometry::{Point, Rect};
use crate::hover::HoverCursor;
use crate::menu::{self, ItemPath, MenuItem, MenuSection};
use crate::navigation::{NavigationEnd, NavigationEvents};
use crate::style::{COLLAPSED_WIDTH, Color};
use crate::view::{
    CARET_COLLAPSED, CARET_EXPANDED, GLYPH_CLOSE, GLYPH_OPEN, HeaderView, RowKind, RowView,
    SectionView, SidebarView,
};

/// External collaborators a panel attaches to.
pub struct PanelContext {
    /// Registry holding the shared state; the process-wide one by default.
    pub registry: Arc<SidebarRegistry>,
    /// Source of navigation completion events, required for
    /// `hide_on_path_change`.
    pub navigation: Option<Arc<NavigationEvents>>,
}

impl Default for PanelContext {
    fn default() -> Self {
        Self {
            registry: SidebarRegistry::global(),
            navigation: None,
        }
    }
}

impl PanelContext {
    /// Attach to a specific registry.
    pub fn new(registry: Arc<SidebarRegistry>) -> Self {
        Self {
            registry,
            navigation: None,
        }
    }

    /// Also listen to navigation completion.
    pub fn with_navigation(mut self, navigation: Arc<NavigationEvents>) -> Self {
        self.navigation = Some(navigation);
        self
    }
}

/// What an item click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A parent item's expansion flipped. The host must not navigate.
    Expansion { expanded: bool },
    /// A leaf or child item was selected; the host follows `link`.
    Selected { link: Option<String> },
    /// Nothing happened.
    Ignored,
}

impl ClickOutcome {
    /// Whether the host must suppress its default navigation for this click.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Expansion { .. })
    }
}

/// A collapsible, sectioned navigation panel.
///
/// # States
///
/// The panel is either expanded or collapsed to an icon rail. The state lives
/// in the registry under `sidebar_id`; the panel mirrors every registry
/// emission and never flips its own copy directly.
///
/// # Signals
///
/// - `item_selected(MenuItem)`: A leaf or child item was clicked
/// - `toggled(bool)`: The toggle control completed; carries the resulting
///   collapsed flag
///
/// # Lifetime
///
/// Construction runs the initialization sequence (declare state, expand
/// parents, subscribe, listen for navigation). Dropping the panel, or calling
/// [`teardown`](Self::teardown), releases both subscriptions.
pub struct SidebarPanel {
    config: SidebarConfig,
    sections: Vec<MenuSection>,
    registry: Arc<SidebarRegistry>,
    /// Local mirror of the registry state for this key.
    state: Arc<Property<SidebarState>>,
    hover: HoverCursor,
    /// Rendered region in document coordinates, for outside-click detection.
    region: Rect,
    state_subscription: Option<Subscription>,
    navigation_guard: Option<ConnectionGuard<NavigationEnd>>,

    /// Signal emitted when a leaf or child item is selected.
    pub item_selected: Signal<MenuItem>,

    /// Signal emitted after a toggle, with the resulting collapsed flag.
    pub toggled: Signal<bool>,
}

impl SidebarPanel {
    /// Create and initialize a panel.
    ///
    /// Declares `{ collapsed: false, position }` for the key (peers sharing
    /// the key follow), defaults every parent item to expanded, subscribes to
    /// the key's state and, with `hide_on_path_change`, to navigation.
    pub fn new(config: SidebarConfig, sections: Vec<MenuSection>, context: PanelContext) -> Self {
        let PanelContext {
            registry,
            navigation,
        } = context;
        let key = config.sidebar_id.clone();
        let initial = SidebarState::new(false, config.position);

        registry.set_state(&key, initial);

        let mut panel = Self {
            config,
            sections,
            registry,
            state: Arc::new(Property::new(initial)),
            hover: HoverCursor::new(),
            region: Rect::ZERO,
            state_subscription: None,
            navigation_guard: None,
            item_selected: Signal::new(),
            toggled: Signal::new(),
        };

        let parents = panel.expand_all_parents();

        let mirror = panel.state.clone();
        panel.state_subscription = Some(panel.registry.get_state(&key).subscribe(move |state| {
            mirror.set(*state);
        }));

        if panel.config.hide_on_path_change {
            match navigation {
                Some(navigation) => {
                    let registry = panel.registry.clone();
                    let key = key.clone();
                    panel.navigation_guard = Some(navigation.on_navigation_end(move |event| {
                        tracing::debug!(
                            target: targets::PANEL,
                            key = %key,
                            url = %event.url,
                            "collapsing sidebar after navigation"
                        );
                        registry.set_state(&key, SidebarStatePatch::collapsed(true));
                    }));
                }
                None => {
                    tracing::warn!(
                        target: targets::PANEL,
                        key = %key,
                        "hide_on_path_change is set but no navigation source was provided"
                    );
                }
            }
        }

        tracing::debug!(
            target: targets::PANEL,
            key = %key,
            sections = panel.sections.len(),
            parents,
            "sidebar panel initialized"
        );
        panel
    }

    /// Mark every parent item expanded. Returns how many there are.
    fn expand_all_parents(&mut self) -> usize {
        let mut count = 0;
        for item in self.sections.iter_mut().flat_map(|s| s.items.iter_mut()) {
            if item.is_parent() {
                item.is_expanded = Some(true);
                count += 1;
            }
        }
        count
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The panel's configuration.
    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// The registry key this panel shares.
    pub fn sidebar_id(&self) -> &str {
        &self.config.sidebar_id
    }

    /// The last state received from the registry.
    pub fn state(&self) -> SidebarState {
        self.state.get()
    }

    /// Whether the panel is collapsed to its icon rail.
    pub fn is_collapsed(&self) -> bool {
        self.state.with(|state| state.is_collapsed)
    }

    /// The docked edge, as last received from the registry.
    pub fn position(&self) -> Position {
        self.state.with(|state| state.position)
    }

    /// The menu, including interaction state written by the panel.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// The hover cursor.
    pub fn hover(&self) -> HoverCursor {
        self.hover
    }

    /// Whether the panel still receives registry updates.
    pub fn is_attached(&self) -> bool {
        self.state_subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Change the path rendered as active.
    pub fn set_active_item_path(&mut self, path: impl Into<String>) {
        self.config.active_item_path = path.into();
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Handle a click on the toggle control.
    ///
    /// Flips the shared collapsed flag for every panel with this key and emits
    /// `toggled`. Does nothing when the panel is not collapsible.
    ///
    /// Returns `true` if a toggle happened.
    pub fn toggle_sidebar(&self) -> bool {
        if !self.config.collapsible {
            tracing::trace!(target: targets::PANEL, key = %self.sidebar_id(), "toggle ignored, not collapsible");
            return false;
        }
        let collapsed = self.registry.toggle(self.sidebar_id()).is_collapsed;
        tracing::debug!(target: targets::PANEL, key = %self.sidebar_id(), collapsed, "sidebar toggled");
        self.toggled.emit(collapsed);
        true
    }

    /// Handle a click on a menu row.
    ///
    /// - Parent item: flips its expansion; the host must suppress navigation.
    /// - Leaf item: emits `item_selected` with the item.
    /// - Child item: always emits `item_selected` with the child.
    /// - Item with neither path nor children, or an unknown row: ignored.
    pub fn click_item(&mut self, at: ItemPath) -> ClickOutcome {
        if at.is_child() {
            let Some(child) = menu::resolve(&self.sections, at).cloned() else {
                return ClickOutcome::Ignored;
            };
            let link = child.path.clone();
            self.item_selected.emit(child);
            return ClickOutcome::Selected { link };
        }

        let Some(item) = menu::resolve_item_mut(&mut self.sections, at) else {
            return ClickOutcome::Ignored;
        };

        if item.is_parent() {
            let expanded = !item.is_expanded();
            item.is_expanded = Some(expanded);
            tracing::trace!(target: targets::PANEL, label = %item.label, expanded, "parent item toggled");
            return ClickOutcome::Expansion { expanded };
        }

        match item.path.clone() {
            Some(path) => {
                let item = item.clone();
                self.item_selected.emit(item);
                ClickOutcome::Selected { link: Some(path) }
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Pointer entered a row.
    pub fn pointer_enter(&mut self, at: ItemPath) {
        if menu::resolve(&self.sections, at).is_some() {
            self.hover.enter(at);
        }
    }

    /// Pointer left a row.
    ///
    /// Leaving a child keeps its parent highlighted.
    pub fn pointer_leave(&mut self, at: ItemPath) {
        self.hover.leave(at);
    }

    /// Set the panel's rendered region, in document coordinates.
    ///
    /// Required for `close_on_click_outside`; the host updates it whenever the
    /// panel is laid out again, including when it shrinks to its rail.
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// The panel's rendered region.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Handle a click anywhere in the document.
    ///
    /// With `close_on_click_outside`, a click outside the panel's region while
    /// expanded collapses every panel with this key. Clicks while collapsed,
    /// or before the host has reported a non-empty region, are ignored.
    ///
    /// Returns `true` if a collapse was requested.
    pub fn handle_document_click(&self, target: impl Into<Point>) -> bool {
        if !self.config.close_on_click_outside || self.is_collapsed() || self.region.is_empty() {
            return false;
        }
        let target = target.into();
        if self.region.contains(target) {
            return false;
        }
        tracing::debug!(
            target: targets::PANEL,
            key = %self.sidebar_id(),
            x = target.x,
            y = target.y,
            "click outside sidebar, collapsing"
        );
        self.registry
            .set_state(self.sidebar_id(), SidebarStatePatch::collapsed(true));
        true
    }

    /// Release the registry and navigation subscriptions.
    ///
    /// The panel keeps its last state but stops following the registry.
    /// Calling this more than once is a no-op; dropping the panel calls it.
    pub fn teardown(&mut self) {
        let had_state = self.state_subscription.take().is_some();
        let had_navigation = self
            .navigation_guard
            .take()
            .is_some_and(ConnectionGuard::disconnect);
        if had_state || had_navigation {
            tracing::debug!(
                target: targets::PANEL,
                key = %self.sidebar_id(),
                had_navigation,
                "sidebar panel torn down"
            );
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn is_active_path(&self, path: Option<&str>) -> bool {
        let active = self.config.active_item_path.as_str();
        !active.is_empty() && path == Some(active)
    }

    /// Build the render description for the current state.
    pub fn view(&self) -> SidebarView {
        let collapsed = self.is_collapsed();
        let title = self.config.title.as_str();

        let header = (!title.is_empty() || self.config.collapsible).then(|| HeaderView {
            title: (!title.is_empty() && !collapsed).then(|| title.to_string()),
            toggle_glyph: self
                .config
                .collapsible
                .then_some(if collapsed { GLYPH_OPEN } else { GLYPH_CLOSE }),
        });

        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(s, section)| {
                let mut rows = Vec::with_capacity(section.items.len());
                for (i, item) in section.items.iter().enumerate() {
                    let at = ItemPath::item(s, i);
                    if item.is_parent() {
                        let expanded = item.is_expanded();
                        rows.push(self.row_view(at, item, RowKind::Parent { expanded }, collapsed));
                        if expanded && !collapsed {
                            for (c, child) in item.children().iter().enumerate() {
                                rows.push(self.row_view(
                                    ItemPath::child(s, i, c),
                                    child,
                                    RowKind::Child,
                                    collapsed,
                                ));
                            }
                        }
                    } else {
                        rows.push(self.row_view(at, item, RowKind::Leaf, collapsed));
                    }
                }
                SectionView {
                    header: (!collapsed).then(|| section.header.clone()),
                    rows,
                }
            })
            .collect();

        SidebarView {
            position: self.position(),
            width: self.config.width,
            width_px: if collapsed {
                COLLAPSED_WIDTH
            } else {
                self.config.width.pixels()
            },
            collapsed,
            background: self.config.background_color,
            header,
            sections,
        }
    }

    fn row_view(&self, at: ItemPath, item: &MenuItem, kind: RowKind, collapsed: bool) -> RowView {
        let highlighted = self.hover.is_hovered(at);
        let link = match kind {
            // Children always navigate; anything they nest is opaque
            RowKind::Child => item.path.clone(),
            _ => item.link().map(str::to_string),
        };
        let caret = match kind {
            RowKind::Parent { expanded } if !collapsed => {
                Some(if expanded { CARET_EXPANDED } else { CARET_COLLAPSED })
            }
            _ => None,
        };
        RowView {
            at,
            kind,
            label: (!collapsed).then(|| item.label.clone()),
            link,
            active: self.is_active_path(item.path.as_deref()),
            highlighted,
            background: if highlighted {
                self.config.background_highlight_color
            } else {
                Color::TRANSPARENT
            },
            caret,
        }
    }
}

impl Drop for SidebarPanel {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for SidebarPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarPanel")
            .field("sidebar_id", &self.config.sidebar_id)
            .field("state", &self.state())
            .field("sections", &self.sections.len())
            .field("hover", &self.hover)
            .field("attached", &self.is_attached())
            .finish()
    }
}

static_assertions::assert_impl_all!(SidebarPanel: Send, Sync);
