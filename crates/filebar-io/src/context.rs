//! Collaborator context consumed by the toolbar hooks.

use dioxus::prelude::*;
use filebar_model::{ParentFolder, Translator};

/// Data and callbacks the surrounding file manager supplies to the
/// toolbar.
///
/// Provide it once near the application root with
/// `use_context_provider`; the hooks in [`crate::hooks`] read it.
#[derive(Clone, Copy)]
pub struct FileManagerContext {
    /// Ancestor chain of the folder being viewed, root first.
    pub parent_folders: Memo<Vec<ParentFolder>>,
    /// Active translation table.
    pub translator: Signal<Translator>,
    /// Navigate to a breadcrumb path.
    pub navigate: Callback<String>,
    /// Remove the files with these identifiers.
    pub remove_files: Callback<Vec<String>>,
}
