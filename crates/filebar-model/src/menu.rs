//! Static menu tables for the toolbar dropdowns.
//!
//! Both menus are `'static` data: the renderer iterates them and reports
//! the chosen [`MenuAction`], which [`crate::toolbar::resolve`] turns into
//! a command against the current selection. Nothing here captures a
//! callback, so a menu table compares equal to itself across renders.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::i18n::{ScopedTranslator, TranslationKey};

/// What a menu entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Open the file upload modal.
    UploadFile,
    /// Open the folder creation modal.
    NewFolder,
    /// Delete every selected row.
    Delete,
    /// Open the move modal for every selected row.
    Move,
}

impl MenuAction {
    /// Stable identifier, used for logging and the inspect CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UploadFile => "upload_file",
            Self::NewFolder => "new_folder",
            Self::Delete => "delete",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon shown beside a menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    /// Document outline.
    FileText,
    /// Open folder.
    FolderOpen,
    /// Trash can.
    Trash,
    /// Folder with an incoming arrow.
    FolderInput,
}

/// A selectable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique key within its menu.
    pub key: &'static str,
    /// What choosing the entry does.
    pub action: MenuAction,
    /// Translated label.
    pub label: TranslationKey,
    /// Leading icon.
    pub icon: MenuIcon,
}

/// A row of a dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// A selectable entry.
    Item(MenuItem),
    /// A horizontal separator.
    Divider,
}

/// Add-file menu: upload a file, or create a folder.
pub const ADD_MENU: &[MenuEntry] = &[
    MenuEntry::Item(MenuItem {
        key: "1",
        action: MenuAction::UploadFile,
        label: TranslationKey::new("fileManager", "uploadFile"),
        icon: MenuIcon::FileText,
    }),
    MenuEntry::Divider,
    MenuEntry::Item(MenuItem {
        key: "2",
        action: MenuAction::NewFolder,
        label: TranslationKey::new("fileManager", "newFolder"),
        icon: MenuIcon::FolderOpen,
    }),
];

/// Bulk menu: delete or move the selected rows.
pub const BULK_MENU: &[MenuEntry] = &[
    MenuEntry::Item(MenuItem {
        key: "4",
        action: MenuAction::Delete,
        label: TranslationKey::new("common", "delete"),
        icon: MenuIcon::Trash,
    }),
    MenuEntry::Item(MenuItem {
        key: "5",
        action: MenuAction::Move,
        label: TranslationKey::new("common", "move"),
        icon: MenuIcon::FolderInput,
    }),
];

/// A menu row with its label already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
    /// A selectable entry.
    Item {
        /// The static entry this row renders.
        item: &'static MenuItem,
        /// Translated label.
        label: String,
    },
    /// A horizontal separator.
    Divider,
}

impl Serialize for MenuRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Item { item, label } => {
                let mut row = serializer.serialize_struct("MenuRow", 4)?;
                row.serialize_field("type", "item")?;
                row.serialize_field("key", item.key)?;
                row.serialize_field("action", item.action.name())?;
                row.serialize_field("label", label)?;
                row.end()
            }
            Self::Divider => {
                let mut row = serializer.serialize_struct("MenuRow", 1)?;
                row.serialize_field("type", "divider")?;
                row.end()
            }
        }
    }
}

/// Translate every entry of a menu table, in table order.
///
/// Each label is looked up under its own key prefix, whatever the
/// translator's default prefix is.
#[must_use]
pub fn menu_rows(entries: &'static [MenuEntry], t: &ScopedTranslator) -> Vec<MenuRow> {
    entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item(item) => MenuRow::Item {
                item,
                label: t.key(item.label),
            },
            MenuEntry::Divider => MenuRow::Divider,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Translator};

    fn items(entries: &[MenuEntry]) -> Vec<MenuItem> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(item) => Some(*item),
                MenuEntry::Divider => None,
            })
            .collect()
    }

    fn scoped(locale: Locale) -> ScopedTranslator {
        Translator::new(locale).unwrap().scoped("knowledgeDetails")
    }

    #[test]
    fn add_menu_layout() {
        assert_eq!(ADD_MENU.len(), 3);
        assert_eq!(ADD_MENU[1], MenuEntry::Divider);
        let actions: Vec<_> = items(ADD_MENU).iter().map(|i| i.action).collect();
        assert_eq!(actions, vec![MenuAction::UploadFile, MenuAction::NewFolder]);
    }

    #[test]
    fn bulk_menu_layout() {
        let actions: Vec<_> = items(BULK_MENU).iter().map(|i| i.action).collect();
        assert_eq!(actions, vec![MenuAction::Delete, MenuAction::Move]);
        assert!(!BULK_MENU.contains(&MenuEntry::Divider));
    }

    #[test]
    fn keys_are_unique_across_menus() {
        let mut seen = std::collections::HashSet::new();
        for item in items(ADD_MENU).into_iter().chain(items(BULK_MENU)) {
            assert!(seen.insert(item.key), "duplicate menu key {:?}", item.key);
        }
    }

    #[test]
    fn every_label_is_translated() {
        for locale in Locale::ALL {
            let t = scoped(locale);
            for item in items(ADD_MENU).into_iter().chain(items(BULK_MENU)) {
                assert_ne!(
                    t.key(item.label),
                    item.label.key,
                    "{locale}: label {:?} is missing",
                    item.label
                );
            }
        }
    }

    #[test]
    fn rows_follow_table_order() {
        let rows = menu_rows(ADD_MENU, &scoped(Locale::En));
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0], MenuRow::Item { ref label, .. } if label == "Upload file"));
        assert_eq!(rows[1], MenuRow::Divider);
        assert!(matches!(rows[2], MenuRow::Item { ref label, .. } if label == "New folder"));
    }

    #[test]
    fn rows_point_at_static_entries() {
        let rows = menu_rows(BULK_MENU, &scoped(Locale::Zh));
        let MenuRow::Item { item, label } = &rows[1] else {
            unreachable!("bulk menu has no dividers");
        };
        let MenuEntry::Item(expected) = &BULK_MENU[1] else {
            unreachable!("bulk menu has no dividers");
        };
        assert!(std::ptr::eq(*item, expected));
        assert_eq!(label, "移动");
    }

    #[test]
    fn rows_are_equal_across_recomputation() {
        let t = scoped(Locale::En);
        assert_eq!(menu_rows(BULK_MENU, &t), menu_rows(BULK_MENU, &t));
    }

    #[test]
    fn rows_serialize_with_type_tag() {
        let rows = menu_rows(ADD_MENU, &scoped(Locale::En));
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["type"], "item");
        assert_eq!(json[0]["key"], "1");
        assert_eq!(json[0]["action"], "upload_file");
        assert_eq!(json[0]["label"], "Upload file");
        assert_eq!(json[1], serde_json::json!({"type": "divider"}));
    }
}
