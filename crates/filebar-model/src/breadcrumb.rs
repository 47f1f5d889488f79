//! Breadcrumb items and segment clickability.
//!
//! The breadcrumb is derived from the parent folder chain. Only the
//! terminal segment (the folder being viewed) is plain text; every other
//! segment navigates to its own path when clicked.

use crate::types::{BreadcrumbItem, ParentFolder};

/// Name the backend gives the root folder.
pub const ROOT_FOLDER_NAME: &str = "/";

/// Title shown for the root folder in the breadcrumb.
pub const ROOT_TITLE: &str = "root";

/// Query parameter carrying the target folder in a breadcrumb path.
const FOLDER_ID_PARAM: &str = "folderId";

/// Build the navigation path for a folder.
#[must_use]
pub fn folder_path(folder_id: &str) -> String {
    format!("?{FOLDER_ID_PARAM}={folder_id}")
}

/// Extract the folder id from a path built by [`folder_path`].
///
/// Returns `None` when the path carries no non-empty `folderId` parameter.
#[must_use]
pub fn folder_id_from_path(path: &str) -> Option<&str> {
    let query = path.rsplit_once('?').map_or(path, |(_, q)| q);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == FOLDER_ID_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Derive breadcrumb items from the parent folder chain.
///
/// At the root (a chain of zero or one folder) there is nothing to
/// navigate back to, so no items are produced.
#[must_use]
pub fn items_from_folders(folders: &[ParentFolder]) -> Vec<BreadcrumbItem> {
    if folders.len() <= 1 {
        return Vec::new();
    }
    folders
        .iter()
        .map(|folder| {
            let title = if folder.name == ROOT_FOLDER_NAME {
                ROOT_TITLE
            } else {
                folder.name.as_str()
            };
            BreadcrumbItem::new(title, folder_path(&folder.id))
        })
        .collect()
}

/// A breadcrumb item paired with whether it renders as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadcrumbSegment<'a> {
    /// The underlying item.
    pub item: &'a BreadcrumbItem,
    /// `false` only for the last item.
    pub clickable: bool,
}

/// Pair each item with its clickability.
///
/// Exactly the item at index `len - 1` is non-clickable. Clickability is
/// decided by position, so an earlier item that happens to share the last
/// item's path still navigates.
pub fn segments(
    items: &[BreadcrumbItem],
) -> impl ExactSizeIterator<Item = BreadcrumbSegment<'_>> + '_ {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(move |(i, item)| BreadcrumbSegment {
            item,
            clickable: i != last,
        })
}
