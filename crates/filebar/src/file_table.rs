//! Selectable table of the folders and files in the current folder.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFile, LdFolder};
use filebar_model::{ParentFolder, SourceType};

use crate::fixture::{FileEntry, format_size};

/// Props for the [`FileTable`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileTableProps {
    /// Subfolders of the current folder, listed first.
    folders: Vec<ParentFolder>,
    /// Files in the current folder after search filtering.
    files: Vec<FileEntry>,
    /// Selected file ids, in selection order.
    selected: Vec<String>,
    /// Replaces the selection.
    on_select: EventHandler<Vec<String>>,
    /// Opens a subfolder.
    on_open_folder: EventHandler<String>,
}

/// File table with a checkbox per file and a select-all header.
///
/// Folders are listed for navigation only and cannot be selected.
#[component]
pub fn FileTable(props: FileTableProps) -> Element {
    let on_select = props.on_select;
    let all_ids: Vec<String> = props.files.iter().map(|f| f.id.clone()).collect();
    let nothing_to_select = all_ids.is_empty();
    let all_selected = !nothing_to_select && all_ids.iter().all(|id| props.selected.contains(id));

    rsx! {
        table { class: "fb-table",
            thead {
                tr {
                    th { class: "fb-table-check",
                        input {
                            r#type: "checkbox",
                            aria_label: "Select all files",
                            checked: all_selected,
                            disabled: nothing_to_select,
                            onchange: move |_| {
                                let next = if all_selected { Vec::new() } else { all_ids.clone() };
                                on_select.call(next);
                            },
                        }
                    }
                    th { "Name" }
                    th { class: "fb-table-size", "Size" }
                }
            }
            tbody {
                for folder in props.folders.iter() {
                    {render_folder_row(folder, props.on_open_folder)}
                }
                for file in props.files.iter() {
                    {render_file_row(file, &props.selected, on_select)}
                }
                if props.folders.is_empty() && props.files.is_empty() {
                    tr {
                        td { class: "fb-table-empty", colspan: "3", "No files found" }
                    }
                }
            }
        }
    }
}

fn render_folder_row(folder: &ParentFolder, on_open_folder: EventHandler<String>) -> Element {
    let id = folder.id.clone();
    let badge = (folder.source_type == SourceType::KnowledgeBase).then_some("knowledge base");

    rsx! {
        tr { key: "folder-{folder.id}", class: "fb-table-row",
            td {}
            td {
                span {
                    class: "fb-table-folder",
                    onclick: move |_| on_open_folder.call(id.clone()),
                    Icon { width: 14, height: 14, icon: LdFolder }
                    " {folder.name}"
                }
                if let Some(badge) = badge {
                    span { class: "fb-badge", "{badge}" }
                }
            }
            td { class: "fb-table-size", "" }
        }
    }
}

fn render_file_row(
    file: &FileEntry,
    selected: &[String],
    on_select: EventHandler<Vec<String>>,
) -> Element {
    let is_selected = selected.contains(&file.id);
    let size = format_size(file.size);
    let id = file.id.clone();
    let current = selected.to_vec();

    let onchange = move |_| {
        let mut next = current.clone();
        if is_selected {
            next.retain(|s| *s != id);
        } else {
            next.push(id.clone());
        }
        on_select.call(next);
    };

    rsx! {
        tr {
            key: "file-{file.id}",
            class: if is_selected { "fb-table-row fb-table-row-selected" } else { "fb-table-row" },
            td { class: "fb-table-check",
                input {
                    r#type: "checkbox",
                    aria_label: "Select {file.name}",
                    checked: is_selected,
                    onchange: onchange,
                }
            }
            td {
                Icon { width: 14, height: 14, icon: LdFile }
                " {file.name}"
            }
            td { class: "fb-table-size", "{size}" }
        }
    }
}
