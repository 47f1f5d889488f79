//! Modal dialogs opened from the toolbar.

use dioxus::prelude::*;
use filebar_model::ParentFolder;

/// Which dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Add a file to the current folder.
    Upload,
    /// Create a subfolder of the current folder.
    NewFolder,
    /// Move these files to another folder.
    Move(Vec<String>),
}

/// Props for the [`FileModal`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileModalProps {
    modal: Modal,
    /// Folders the move dialog may offer as targets.
    move_targets: Vec<ParentFolder>,
    on_close: EventHandler<()>,
    /// Called with the name of the file to add.
    on_upload: EventHandler<String>,
    /// Called with the name of the folder to create.
    on_create_folder: EventHandler<String>,
    /// Called with the moved file ids and the target folder id.
    on_move: EventHandler<(Vec<String>, String)>,
}

/// Centered dialog over a dimmed backdrop.
#[component]
pub fn FileModal(props: FileModalProps) -> Element {
    let mut text = use_signal(String::new);
    let mut target = use_signal(|| {
        props
            .move_targets
            .first()
            .map(|f| f.id.clone())
            .unwrap_or_default()
    });
    let on_close = props.on_close;
    let on_upload = props.on_upload;
    let on_create_folder = props.on_create_folder;
    let on_move = props.on_move;

    let modal = props.modal.clone();
    let confirm = move |_| {
        let name = text().trim().to_owned();
        match &modal {
            Modal::Upload if !name.is_empty() => on_upload.call(name),
            Modal::NewFolder if !name.is_empty() => on_create_folder.call(name),
            Modal::Move(ids) if !target().is_empty() => on_move.call((ids.clone(), target())),
            _ => {}
        }
    };

    let name_input = move |placeholder: &'static str| {
        rsx! {
            input {
                class: "fb-modal-input",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
        }
    };

    let (title, body) = match &props.modal {
        Modal::Upload => ("Upload file", name_input("File name, e.g. notes.txt")),
        Modal::NewFolder => ("New folder", name_input("Folder name")),
        Modal::Move(ids) => {
            let count = ids.len();
            (
                "Move files",
                rsx! {
                    p { class: "fb-modal-hint", "Move {count} selected file(s) to:" }
                    select {
                        class: "fb-modal-input",
                        value: "{target}",
                        onchange: move |evt: FormEvent| target.set(evt.value()),
                        for folder in props.move_targets.iter() {
                            option { key: "{folder.id}", value: "{folder.id}", "{folder.name}" }
                        }
                    }
                },
            )
        }
    };

    rsx! {
        div { class: "fb-modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "fb-modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "fb-modal-title", "{title}" }
                {body}
                div { class: "fb-modal-footer",
                    button {
                        class: "fb-button",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "fb-button fb-button-primary",
                        r#type: "button",
                        onclick: confirm,
                        "OK"
                    }
                }
            }
        }
    }
}
