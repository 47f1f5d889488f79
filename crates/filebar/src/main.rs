mod file_table;
mod fixture;
mod modal;

use dioxus::prelude::*;
use filebar_io::{FileManagerContext, FileToolbar, console};
use filebar_model::breadcrumb::folder_id_from_path;
use filebar_model::{Locale, ParentFolder, SourceType, Translator};

use crate::file_table::FileTable;
use crate::fixture::{
    FileEntry, Fixture, ROOT_ID, fresh_id, move_targets, parent_chain, subfolders, visible_files,
};
use crate::modal::{FileModal, Modal};

fn main() {
    dioxus::launch(app);
}

/// Load the bundled fixture, falling back to an empty root folder.
fn load_fixture() -> Fixture {
    Fixture::embedded().unwrap_or_else(|e| {
        console::warn(&format!("{e}; starting with an empty tree"));
        Fixture {
            folders: vec![ParentFolder {
                id: ROOT_ID.to_owned(),
                name: "/".to_owned(),
                parent_id: None,
                source_type: SourceType::Local,
            }],
            files: Vec::new(),
        }
    })
}

/// Load a locale's table, falling back to untranslated keys.
fn load_translator(locale: Locale) -> Translator {
    Translator::new(locale).unwrap_or_else(|e| {
        console::warn(&format!("locale {locale}: {e}"));
        Translator::empty(locale)
    })
}

/// The locale after `locale` in [`Locale::ALL`], wrapping around.
fn next_locale(locale: Locale) -> Locale {
    let index = Locale::ALL.iter().position(|l| *l == locale).unwrap_or(0);
    Locale::ALL[(index + 1) % Locale::ALL.len()]
}

/// Root application component.
///
/// Owns the folder tree, the selection, the search string, and the open
/// modal, and supplies the toolbar's collaborators through
/// [`FileManagerContext`].
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let initial = use_hook(load_fixture);
    let mut folders = use_signal(|| initial.folders.clone());
    let mut files = use_signal(|| initial.files.clone());
    let mut current_folder = use_signal(|| ROOT_ID.to_owned());
    let mut selected_row_keys = use_signal(Vec::<String>::new);
    let mut search_string = use_signal(String::new);
    let mut modal = use_signal(|| Option::<Modal>::None);
    let mut translator = use_signal(|| load_translator(Locale::default()));

    let parent_folders = use_memo(move || parent_chain(&folders.read(), &current_folder.read()));

    // --- Collaborators ---
    let open_folder = use_callback(move |id: String| {
        current_folder.set(id);
        selected_row_keys.set(Vec::new());
        search_string.set(String::new());
    });

    let navigate = use_callback(move |path: String| match folder_id_from_path(&path) {
        Some(id) => open_folder.call(id.to_owned()),
        None => console::warn(&format!("breadcrumb path {path:?} names no folder")),
    });

    let remove_files = use_callback(move |ids: Vec<String>| {
        files.write().retain(|f| !ids.contains(&f.id));
    });

    use_context_provider(|| FileManagerContext {
        parent_folders,
        translator,
        navigate,
        remove_files,
    });

    // --- Modal handlers ---
    let on_upload = move |name: String| {
        let id = fresh_id("file", files.read().iter().map(|f| f.id.as_str()));
        let folder_id = current_folder();
        files.write().push(FileEntry {
            id,
            name,
            folder_id,
            size: 0,
        });
        modal.set(None);
    };

    let on_create_folder = move |name: String| {
        let id = fresh_id("folder", folders.read().iter().map(|f| f.id.as_str()));
        let parent_id = Some(current_folder());
        folders.write().push(ParentFolder {
            id,
            name,
            parent_id,
            source_type: SourceType::Local,
        });
        modal.set(None);
    };

    let on_move = move |(ids, to): (Vec<String>, String)| {
        for file in files.write().iter_mut().filter(|f| ids.contains(&f.id)) {
            file.folder_id.clone_from(&to);
        }
        selected_row_keys.set(Vec::new());
        modal.set(None);
    };

    let next = next_locale(translator.read().locale());
    let toggle_locale = move |_| translator.set(load_translator(next));

    // --- Derived view data ---
    let current = current_folder();
    let folder_rows: Vec<ParentFolder> = subfolders(&folders.read(), &current)
        .into_iter()
        .cloned()
        .collect();
    let file_rows: Vec<FileEntry> = visible_files(&files.read(), &current, &search_string.read())
        .into_iter()
        .cloned()
        .collect();
    let targets: Vec<ParentFolder> = move_targets(&folders.read())
        .into_iter()
        .filter(|f| f.id != current)
        .cloned()
        .collect();
    let other_locale = match next {
        Locale::En => "English",
        Locale::Zh => "中文",
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/filebar.css") }

        div { class: "fb-app",
            header { class: "fb-header",
                h1 { class: "fb-title", "Files" }
                button {
                    class: "fb-button",
                    r#type: "button",
                    onclick: toggle_locale,
                    "{other_locale}"
                }
            }

            FileToolbar {
                selected_row_keys: selected_row_keys(),
                show_folder_create_modal: move |()| modal.set(Some(Modal::NewFolder)),
                show_file_upload_modal: move |()| modal.set(Some(Modal::Upload)),
                set_selected_row_keys: move |keys: Vec<String>| selected_row_keys.set(keys),
                show_move_file_modal: move |ids: Vec<String>| modal.set(Some(Modal::Move(ids))),
                search_string: search_string(),
                handle_input_change: move |value: String| search_string.set(value),
            }

            FileTable {
                folders: folder_rows,
                files: file_rows,
                selected: selected_row_keys(),
                on_select: move |keys: Vec<String>| selected_row_keys.set(keys),
                on_open_folder: move |id: String| open_folder.call(id),
            }

            if let Some(open) = modal() {
                FileModal {
                    modal: open,
                    move_targets: targets,
                    on_close: move |()| modal.set(None),
                    on_upload: on_upload,
                    on_create_folder: on_create_folder,
                    on_move: on_move,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_toggle_visits_every_locale() {
        let mut seen = vec![Locale::default()];
        let mut locale = next_locale(Locale::default());
        while locale != Locale::default() {
            seen.push(locale);
            locale = next_locale(locale);
        }
        assert_eq!(seen, Locale::ALL.to_vec());
    }
}
