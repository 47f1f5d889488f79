//! File manager toolbar: breadcrumb, search, bulk actions, and add menu.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use filebar_model::{
    KEY_PREFIX, MenuAction, ToolbarCommand, ToolbarConfig, ToolbarText, ToolbarView,
    is_knowledge_base, resolve,
};

use super::breadcrumb::Breadcrumb;
use super::dropdown::Dropdown;
use super::search::SearchInput;
use crate::console;
use crate::hooks::{
    use_fetch_parent_folder_list, use_handle_breadcrumb_click, use_handle_delete_file,
    use_select_breadcrumb_items, use_translate,
};

/// Props for the [`FileToolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileToolbarProps {
    /// Identifiers of the selected rows, in selection order.
    selected_row_keys: Vec<String>,
    /// Opens the folder creation modal.
    show_folder_create_modal: EventHandler<()>,
    /// Opens the file upload modal.
    show_file_upload_modal: EventHandler<()>,
    /// Replaces the selection.
    set_selected_row_keys: EventHandler<Vec<String>>,
    /// Opens the move modal for the given rows.
    show_move_file_modal: EventHandler<Vec<String>>,
    /// Current search string.
    search_string: String,
    /// Receives every edit of the search input.
    handle_input_change: EventHandler<String>,
    /// Presentation settings.
    #[props(default)]
    config: ToolbarConfig,
}

/// Toolbar above the file table.
///
/// Shows the breadcrumb for the current folder and a search input. Outside
/// knowledge-base folders it also offers a bulk menu (delete, move) that is
/// disabled while nothing is selected, and an add menu (upload file, new
/// folder). Labels follow the translator in [`crate::FileManagerContext`].
#[component]
pub fn FileToolbar(props: FileToolbarProps) -> Element {
    let t = use_translate(KEY_PREFIX);
    let text = use_memo(move || ToolbarText::new(&t.read()));
    let breadcrumb_items = use_select_breadcrumb_items();
    let handle_breadcrumb_click = use_handle_breadcrumb_click();
    let parent_folder_list = use_fetch_parent_folder_list();
    let is_kb = use_memo(move || is_knowledge_base(&parent_folder_list.read()));

    let handle_remove_file =
        use_handle_delete_file(props.selected_row_keys.clone(), props.set_selected_row_keys);

    let selection = props.selected_row_keys.clone();
    let show_upload = props.show_file_upload_modal;
    let show_create = props.show_folder_create_modal;
    let show_move = props.show_move_file_modal;
    let on_menu_select = use_callback(move |action: MenuAction| {
        console::debug(&format!("{action} with {} selected", selection.len()));
        match resolve(action, &selection) {
            ToolbarCommand::OpenUploadModal => show_upload.call(()),
            ToolbarCommand::OpenFolderCreateModal => show_create.call(()),
            ToolbarCommand::DeleteFiles(_) => handle_remove_file.call(()),
            ToolbarCommand::MoveFiles(ids) => show_move.call(ids),
        }
    });

    let ToolbarView {
        breadcrumbs,
        bulk_disabled,
        bulk_label,
        bulk_menu,
        add_label,
        add_menu,
        search_placeholder,
        search,
        ..
    } = ToolbarView::from_parts(
        is_kb(),
        &breadcrumb_items.read(),
        &props.selected_row_keys,
        &props.search_string,
        &text.read(),
    );

    rsx! {
        div { class: "fb-toolbar",
            Breadcrumb {
                segments: breadcrumbs,
                on_navigate: handle_breadcrumb_click,
            }
            div { class: "fb-toolbar-actions",
                if let Some(rows) = bulk_menu {
                    Dropdown {
                        rows: rows,
                        trigger: props.config.bulk_trigger,
                        disabled: bulk_disabled,
                        bold_labels: true,
                        on_select: on_menu_select,
                        b { "{bulk_label}" }
                    }
                }
                SearchInput {
                    value: search,
                    placeholder: search_placeholder,
                    width_px: props.config.search_width_px,
                    on_change: props.handle_input_change,
                }
                if let Some(rows) = add_menu {
                    Dropdown {
                        rows: rows,
                        trigger: props.config.add_trigger,
                        primary: true,
                        on_select: on_menu_select,
                        Icon { width: 14, height: 14, icon: LdPlus }
                        span { "{add_label}" }
                    }
                }
            }
        }
    }
}
