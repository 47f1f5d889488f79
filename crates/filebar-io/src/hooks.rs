//! Hooks through which the toolbar reaches its collaborators.
//!
//! Each hook reads the [`FileManagerContext`] provided by the application
//! root. They must be called unconditionally from a component body, like
//! any other Dioxus hook.

use dioxus::prelude::*;
use filebar_model::{
    BreadcrumbItem, DeleteStep, ParentFolder, ScopedTranslator, delete_plan, items_from_folders,
};

use crate::console;
use crate::context::FileManagerContext;

fn use_file_manager() -> FileManagerContext {
    use_context::<FileManagerContext>()
}

/// Translator bound to `prefix`, recomputed when the locale changes.
pub fn use_translate(prefix: &'static str) -> Memo<ScopedTranslator> {
    let ctx = use_file_manager();
    use_memo(move || ctx.translator.read().scoped(prefix))
}

/// Ancestor chain of the folder being viewed, root first.
pub fn use_fetch_parent_folder_list() -> Memo<Vec<ParentFolder>> {
    use_file_manager().parent_folders
}

/// Breadcrumb items for the current parent folder chain.
pub fn use_select_breadcrumb_items() -> Memo<Vec<BreadcrumbItem>> {
    let parent_folders = use_fetch_parent_folder_list();
    use_memo(move || items_from_folders(&parent_folders.read()))
}

/// Handler that navigates to a breadcrumb path. Empty paths are ignored.
pub fn use_handle_breadcrumb_click() -> Callback<String> {
    let ctx = use_file_manager();
    use_callback(move |path: String| {
        if path.is_empty() {
            return;
        }
        console::debug(&format!("navigate to {path}"));
        ctx.navigate.call(path);
    })
}

/// Handler that removes the selected files and clears the selection.
///
/// Does nothing when the selection is empty.
pub fn use_handle_delete_file(
    selected_row_keys: Vec<String>,
    set_selected_row_keys: EventHandler<Vec<String>>,
) -> Callback<()> {
    let ctx = use_file_manager();
    use_callback(move |()| {
        for step in delete_plan(&selected_row_keys) {
            match step {
                DeleteStep::Remove(ids) => {
                    console::debug(&format!("remove {} file(s)", ids.len()));
                    ctx.remove_files.call(ids);
                }
                DeleteStep::ClearSelection => set_selected_row_keys.call(Vec::new()),
            }
        }
    })
}
