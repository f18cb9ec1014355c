//! Menu data model: sections, items and item addressing.
//!
//! The host supplies an ordered list of [`MenuSection`]s. Each section holds
//! top-level [`MenuItem`]s, which are either leaves (with a `path`) or parents
//! (with `children`). Only one level of nesting is interactive; children's own
//! children are carried as opaque data.
//!
//! `is_expanded` is interaction state owned by the panel. It is written back
//! onto the items the panel holds, so hosts can read it from
//! [`SidebarPanel::sections`](crate::SidebarPanel::sections).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One entry of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Display text.
    pub label: String,

    /// Navigation target. Ignored on parent items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Nested items. Presence (even empty) makes this a parent item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,

    /// Expansion state; `None` reads as expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

impl MenuItem {
    /// Create a leaf item that navigates to `path`.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Create a parent item holding `children`.
    pub fn parent(label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            children: Some(children),
            ..Self::default()
        }
    }

    /// Whether this item has nested children and therefore never navigates.
    pub fn is_parent(&self) -> bool {
        self.children.is_some()
    }

    /// Whether this item navigates when clicked.
    pub fn is_leaf(&self) -> bool {
        !self.is_parent() && self.path.is_some()
    }

    /// Whether the item is expanded. Absent state reads as expanded.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded != Some(false)
    }

    /// The nested children, or an empty slice.
    pub fn children(&self) -> &[MenuItem] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Navigation target, unless this is a parent item.
    pub fn link(&self) -> Option<&str> {
        if self.is_parent() {
            None
        } else {
            self.path.as_deref()
        }
    }
}

/// A labeled, ordered group of top-level items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section heading.
    pub header: String,
    /// Top-level items, in display order.
    #[serde(default, alias = "labels")]
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    /// Create a section.
    pub fn new(header: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            header: header.into(),
            items,
        }
    }

    /// Parse an ordered list of sections from JSON.
    ///
    /// Accepts `items` or `labels` as the item list name and camelCase item
    /// fields (`isExpanded`).
    pub fn list_from_json(s: &str) -> Result<Vec<MenuSection>> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Address of a row in the menu: a top-level item or one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemPath {
    pub section: usize,
    pub item: usize,
    pub child: Option<usize>,
}

impl ItemPath {
    /// Address a top-level item.
    pub const fn item(section: usize, item: usize) -> Self {
        Self {
            section,
            item,
            child: None,
        }
    }

    /// Address a child of a top-level item.
    pub const fn child(section: usize, item: usize, child: usize) -> Self {
        Self {
            section,
            item,
            child: Some(child),
        }
    }

    /// Whether this addresses a nested child row.
    pub const fn is_child(&self) -> bool {
        self.child.is_some()
    }

    /// The address of the top-level item this row belongs to.
    pub const fn top_level(&self) -> Self {
        Self::item(self.section, self.item)
    }
}

/// Resolve a row address against a menu.
pub(crate) fn resolve<'a>(sections: &'a [MenuSection], at: ItemPath) -> Option<&'a MenuItem> {
    let item = sections.get(at.section)?.items.get(at.item)?;
    match at.child {
        Some(child) => item.children().get(child),
        None => Some(item),
    }
}

/// Resolve a top-level item address mutably.
pub(crate) fn resolve_item_mut(sections: &mut [MenuSection], at: ItemPath) -> Option<&mut MenuItem> {
    sections.get_mut(at.section)?.items.get_mut(at.item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuSection> {
        vec![MenuSection::new(
            "Main",
            vec![
                MenuItem::leaf("Home", "/"),
                MenuItem::parent("Settings", vec![MenuItem::leaf("Profile", "/profile")]),
            ],
        )]
    }

    #[test]
    fn test_item_kinds() {
        let menu = sample();
        let home = &menu[0].items[0];
        let settings = &menu[0].items[1];

        assert!(home.is_leaf());
        assert!(!home.is_parent());
        assert_eq!(home.link(), Some("/"));

        assert!(settings.is_parent());
        assert!(!settings.is_leaf());
        assert_eq!(settings.link(), None);
        assert_eq!(settings.children().len(), 1);
    }

    #[test]
    fn test_parent_with_path_never_links() {
        let mut item = MenuItem::parent("Admin", vec![]);
        item.path = Some("/admin".into());
        assert!(item.is_parent());
        assert_eq!(item.link(), None);
    }

    #[test]
    fn test_expanded_defaults_to_true() {
        let mut item = MenuItem::parent("Settings", vec![]);
        assert!(item.is_expanded());
        item.is_expanded = Some(false);
        assert!(!item.is_expanded());
    }

    #[test]
    fn test_resolve() {
        let menu = sample();
        assert_eq!(resolve(&menu, ItemPath::item(0, 0)).map(|i| i.label.as_str()), Some("Home"));
        assert_eq!(
            resolve(&menu, ItemPath::child(0, 1, 0)).map(|i| i.label.as_str()),
            Some("Profile")
        );
        assert!(resolve(&menu, ItemPath::child(0, 0, 0)).is_none());
        assert!(resolve(&menu, ItemPath::item(1, 0)).is_none());
    }

    #[test]
    fn test_list_from_json_accepts_labels_alias() {
        let menu = MenuSection::list_from_json(
            r#"[{"header": "Main", "labels": [
                {"label": "Home", "path": "/"},
                {"label": "Settings", "isExpanded": false, "children": [
                    {"label": "Profile", "path": "/profile"}
                ]}
            ]}]"#,
        )
        .unwrap();

        assert_eq!(menu[0].items.len(), 2);
        assert_eq!(menu[0].items[1].is_expanded, Some(false));
        assert_eq!(menu[0].items[1].children()[0].path.as_deref(), Some("/profile"));
    }

    #[test]
    fn test_item_path_helpers() {
        let at = ItemPath::child(2, 3, 1);
        assert!(at.is_child());
        assert_eq!(at.top_level(), ItemPath::item(2, 3));
    }
}
