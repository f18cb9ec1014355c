//! Per-panel hover cursor.
//!
//! The cursor is a `(section, item, child)` triple of optional indices. It is
//! local to one panel instance and only drives highlight rendering.
//!
//! Child rows are nested inside their parent's row, so the pointer is over
//! both at once: entering a child sets all three components, leaving it clears
//! only `child`, and the parent row stays highlighted until the pointer leaves
//! it too.

use crate::menu::ItemPath;

/// The row currently highlighted by the pointer, component by component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverCursor {
    section: Option<usize>,
    item: Option<usize>,
    child: Option<usize>,
}

impl HoverCursor {
    /// An empty cursor.
    pub const fn new() -> Self {
        Self {
            section: None,
            item: None,
            child: None,
        }
    }

    /// The hovered row, if a top-level item is set.
    pub fn row(&self) -> Option<ItemPath> {
        Some(ItemPath {
            section: self.section?,
            item: self.item?,
            child: self.child,
        })
    }

    /// The cursor as `(section, item, child)` indices.
    pub fn indices(&self) -> (Option<usize>, Option<usize>, Option<usize>) {
        (self.section, self.item, self.child)
    }

    /// Whether the row at `at` renders highlighted.
    ///
    /// A top-level row matches on `(section, item)` whatever the child index;
    /// a child row needs all three components to match.
    pub fn is_hovered(&self, at: ItemPath) -> bool {
        let top = self.section == Some(at.section) && self.item == Some(at.item);
        match at.child {
            Some(child) => top && self.child == Some(child),
            None => top,
        }
    }

    /// Pointer entered a row.
    ///
    /// Entering a top-level row leaves the child index untouched.
    pub fn enter(&mut self, at: ItemPath) {
        self.section = Some(at.section);
        self.item = Some(at.item);
        if at.child.is_some() {
            self.child = at.child;
        }
    }

    /// Pointer left a row.
    ///
    /// Leaving a child clears only the child index; leaving a top-level row
    /// clears the section and item indices.
    pub fn leave(&mut self, at: ItemPath) {
        if at.is_child() {
            self.child = None;
        } else {
            self.section = None;
            self.item = None;
        }
    }

    /// Forget the hovered row.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
