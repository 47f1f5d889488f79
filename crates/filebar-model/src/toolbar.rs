//! Toolbar decisions: what is shown, what is enabled, and what a chosen
//! menu entry does.

use serde::Serialize;

use crate::breadcrumb;
use crate::i18n::{ScopedTranslator, Translator};
use crate::menu::{ADD_MENU, BULK_MENU, MenuAction, MenuRow, menu_rows};
use crate::types::{BreadcrumbItem, ParentFolder, SourceType};

/// Default key prefix for the toolbar's own labels.
pub const KEY_PREFIX: &str = "knowledgeDetails";

/// Whether the folder being viewed is a knowledge-base folder.
///
/// Only the last entry of the parent folder chain (the current folder)
/// is inspected. An empty chain is not a knowledge base.
#[must_use]
pub fn is_knowledge_base(parent_folders: &[ParentFolder]) -> bool {
    parent_folders
        .last()
        .is_some_and(|folder| folder.source_type == SourceType::KnowledgeBase)
}

/// Whether the bulk action trigger is disabled.
#[must_use]
pub const fn bulk_disabled(selection: &[String]) -> bool {
    selection.is_empty()
}

/// One step of deleting the selected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    /// Ask the file manager to remove these files.
    Remove(Vec<String>),
    /// Replace the selection with an empty one.
    ClearSelection,
}

/// Steps that delete `selection`, in the order they must run.
///
/// Removal comes before clearing so the remover still sees the ids.
/// An empty selection yields no steps.
#[must_use]
pub fn delete_plan(selection: &[String]) -> Vec<DeleteStep> {
    if selection.is_empty() {
        return Vec::new();
    }
    vec![
        DeleteStep::Remove(selection.to_vec()),
        DeleteStep::ClearSelection,
    ]
}

/// Effect requested by a chosen menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarCommand {
    /// Open the file upload modal.
    OpenUploadModal,
    /// Open the folder creation modal.
    OpenFolderCreateModal,
    /// Remove these files and clear the selection.
    DeleteFiles(Vec<String>),
    /// Open the move modal for these files.
    MoveFiles(Vec<String>),
}

/// Resolve a chosen menu action against the current selection.
///
/// Bulk commands carry the selection exactly as given, in order.
#[must_use]
pub fn resolve(action: MenuAction, selection: &[String]) -> ToolbarCommand {
    match action {
        MenuAction::UploadFile => ToolbarCommand::OpenUploadModal,
        MenuAction::NewFolder => ToolbarCommand::OpenFolderCreateModal,
        MenuAction::Delete => ToolbarCommand::DeleteFiles(selection.to_vec()),
        MenuAction::Move => ToolbarCommand::MoveFiles(selection.to_vec()),
    }
}

/// A breadcrumb segment ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentView {
    /// Text shown for the segment.
    pub title: String,
    /// Path handed to the navigation callback.
    pub path: String,
    /// `false` for the folder being viewed.
    pub clickable: bool,
}

/// Locale-dependent text of the toolbar.
///
/// Depends only on the translator, so a renderer can compute it once per
/// locale change and reuse it across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarText {
    /// Bulk dropdown trigger label.
    pub bulk_label: String,
    /// Add dropdown trigger label.
    pub add_label: String,
    /// Search input placeholder.
    pub search_placeholder: String,
    /// Translated bulk menu rows.
    pub bulk_menu: Vec<MenuRow>,
    /// Translated add menu rows.
    pub add_menu: Vec<MenuRow>,
}

impl ToolbarText {
    /// Translate every label with `t`, a translator scoped to [`KEY_PREFIX`].
    #[must_use]
    pub fn new(t: &ScopedTranslator) -> Self {
        Self {
            bulk_label: t.t("bulk"),
            add_label: t.t("addFile"),
            search_placeholder: t.t("searchFiles"),
            bulk_menu: menu_rows(BULK_MENU, t),
            add_menu: menu_rows(ADD_MENU, t),
        }
    }
}

/// Everything the toolbar shows for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarView {
    /// Whether the current folder is a knowledge base.
    pub is_knowledge_base: bool,
    /// Whether the bulk trigger is greyed out.
    pub bulk_disabled: bool,
    /// Breadcrumb segments, root first.
    pub breadcrumbs: Vec<SegmentView>,
    /// Bulk dropdown trigger label.
    pub bulk_label: String,
    /// Bulk menu rows, `None` when hidden.
    pub bulk_menu: Option<Vec<MenuRow>>,
    /// Add dropdown trigger label.
    pub add_label: String,
    /// Add menu rows, `None` when hidden.
    pub add_menu: Option<Vec<MenuRow>>,
    /// Search input placeholder.
    pub search_placeholder: String,
    /// Value shown in the search input.
    pub search: String,
}

impl ToolbarView {
    /// Derive the toolbar state from collaborator data.
    #[must_use]
    pub fn derive(
        parent_folders: &[ParentFolder],
        selection: &[String],
        search: &str,
        translator: &Translator,
    ) -> Self {
        let items = breadcrumb::items_from_folders(parent_folders);
        let text = ToolbarText::new(&translator.scoped(KEY_PREFIX));
        Self::from_parts(
            is_knowledge_base(parent_folders),
            &items,
            selection,
            search,
            &text,
        )
    }

    /// Assemble the toolbar state from already derived parts.
    ///
    /// Both menus are hidden when `knowledge_base` is set.
    #[must_use]
    pub fn from_parts(
        knowledge_base: bool,
        breadcrumb_items: &[BreadcrumbItem],
        selection: &[String],
        search: &str,
        text: &ToolbarText,
    ) -> Self {
        let breadcrumbs = breadcrumb::segments(breadcrumb_items)
            .map(|s| SegmentView {
                title: s.item.title.clone(),
                path: s.item.path.clone(),
                clickable: s.clickable,
            })
            .collect();
        Self {
            is_knowledge_base: knowledge_base,
            bulk_disabled: bulk_disabled(selection),
            breadcrumbs,
            bulk_label: text.bulk_label.clone(),
            bulk_menu: (!knowledge_base).then(|| text.bulk_menu.clone()),
            add_label: text.add_label.clone(),
            add_menu: (!knowledge_base).then(|| text.add_menu.clone()),
            search_placeholder: text.search_placeholder.clone(),
            search: search.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn folder(id: &str, source_type: &str) -> ParentFolder {
        ParentFolder {
            id: id.to_owned(),
            name: id.to_owned(),
            parent_id: None,
            source_type: SourceType::from(source_type.to_owned()),
        }
    }

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_owned()).collect()
    }

    fn labels(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter()
            .filter_map(|row| match row {
                MenuRow::Item { label, .. } => Some(label.as_str()),
                MenuRow::Divider => None,
            })
            .collect()
    }

    #[test]
    fn knowledge_base_uses_last_folder_only() {
        assert!(is_knowledge_base(&[folder("r", "local"), folder("kb", "knowledgebase")]));
        assert!(!is_knowledge_base(&[folder("kb", "knowledgebase"), folder("d", "local")]));
        assert!(!is_knowledge_base(&[]));
    }

    #[test]
    fn bulk_disabled_tracks_selection() {
        assert!(bulk_disabled(&[]));
        assert!(!bulk_disabled(&ids(&["f1"])));
    }

    #[test]
    fn move_carries_exact_selection() {
        let selection = ids(&["f2", "f1", "f3"]);
        assert_eq!(
            resolve(MenuAction::Move, &selection),
            ToolbarCommand::MoveFiles(selection.clone())
        );
        assert_eq!(
            resolve(MenuAction::Delete, &selection),
            ToolbarCommand::DeleteFiles(selection)
        );
    }

    #[test]
    fn add_actions_ignore_selection() {
        let selection = ids(&["f1"]);
        assert_eq!(
            resolve(MenuAction::UploadFile, &selection),
            ToolbarCommand::OpenUploadModal
        );
        assert_eq!(
            resolve(MenuAction::NewFolder, &[]),
            ToolbarCommand::OpenFolderCreateModal
        );
    }

    #[test]
    fn knowledge_base_hides_both_menus() {
        let t = Translator::new(Locale::En).unwrap();
        let view = ToolbarView::derive(
            &[folder("r", "local"), folder("kb", "knowledgebase")],
            &ids(&["f1"]),
            "",
            &t,
        );
        assert!(view.is_knowledge_base);
        assert_eq!(view.bulk_menu, None);
        assert_eq!(view.add_menu, None);
        assert_eq!(view.breadcrumbs.len(), 2, "breadcrumb stays visible");
    }

    #[test]
    fn ordinary_folder_shows_translated_menus() {
        let t = Translator::new(Locale::En).unwrap();
        let view = ToolbarView::derive(&[folder("r", "local")], &[], "report", &t);
        assert!(view.bulk_disabled);
        let bulk = view.bulk_menu.unwrap();
        assert_eq!(labels(&bulk), vec!["Delete", "Move"]);
        let add = view.add_menu.unwrap();
        assert_eq!(add.len(), 3, "upload, divider, new folder");
        assert_eq!(labels(&add), vec!["Upload file", "New folder"]);
        assert_eq!(view.bulk_label, "Bulk");
        assert_eq!(view.add_label, "Add file");
        assert_eq!(view.search_placeholder, "Search your files");
        assert_eq!(view.search, "report");
    }

    #[test]
    fn delete_removes_then_clears() {
        assert_eq!(
            delete_plan(&ids(&["f2", "f1"])),
            vec![
                DeleteStep::Remove(ids(&["f2", "f1"])),
                DeleteStep::ClearSelection
            ]
        );
    }

    #[test]
    fn delete_with_empty_selection_does_nothing() {
        assert!(delete_plan(&[]).is_empty());
    }

    #[test]
    fn view_reuses_precomputed_text() {
        let t = Translator::new(Locale::Zh).unwrap();
        let text = ToolbarText::new(&t.scoped(KEY_PREFIX));
        let items = [BreadcrumbItem::new("root", "?folderId=r")];
        let view = ToolbarView::from_parts(false, &items, &ids(&["f1"]), "q", &text);
        assert_eq!(view.bulk_label, "批量");
        assert_eq!(view.bulk_menu.as_deref(), Some(text.bulk_menu.as_slice()));
        assert!(!view.breadcrumbs[0].clickable);
        assert!(!view.bulk_disabled);
    }
}
