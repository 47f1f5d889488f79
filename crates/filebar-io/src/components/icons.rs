//! Lucide icons for menu entries and toolbar controls.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdFolderInput, LdFolderOpen, LdTrash2};
use filebar_model::MenuIcon;

/// Edge length of menu icons in CSS pixels.
const MENU_ICON_SIZE: u32 = 16;

/// Render the icon for a menu entry.
pub fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::FileText => rsx! {
            Icon { width: MENU_ICON_SIZE, height: MENU_ICON_SIZE, icon: LdFileText }
        },
        MenuIcon::FolderOpen => rsx! {
            Icon { width: MENU_ICON_SIZE, height: MENU_ICON_SIZE, icon: LdFolderOpen }
        },
        MenuIcon::Trash => rsx! {
            Icon { width: MENU_ICON_SIZE, height: MENU_ICON_SIZE, icon: LdTrash2 }
        },
        MenuIcon::FolderInput => rsx! {
            Icon { width: MENU_ICON_SIZE, height: MENU_ICON_SIZE, icon: LdFolderInput }
        },
    }
}
