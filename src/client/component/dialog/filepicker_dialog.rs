use dioxus::prelude::*;

use crate::client::{
    component::modal::Modal,
    model::dialog::{DialogOutcome, FileSelection},
    service::use_dialog,
};

/// Lets the user choose among files that are already stored with the course.
#[component]
pub fn FilepickerDialog(title: String, files: Vec<String>, multiple: bool) -> Element {
    let dialog = use_dialog();
    let mut selection = use_signal(|| FileSelection::new(multiple));

    rsx!(
        Modal {
            title,
            prevent_close: false,
            on_close: move |_| dialog.dismiss(),
            div {
                class: "flex flex-col gap-2 max-h-96 overflow-y-auto",
                if files.is_empty() {
                    p {
                        class: "opacity-70",
                        "No files have been uploaded for this lecture yet."
                    }
                }
                for file in files.iter() {
                    label {
                        key: "{file}",
                        class: "flex items-center gap-3 cursor-pointer",
                        input {
                            r#type: if multiple { "checkbox" } else { "radio" },
                            class: if multiple { "checkbox" } else { "radio" },
                            checked: selection.read().is_selected(file),
                            onchange: {
                                let file = file.clone();
                                move |_| selection.write().toggle(&file)
                            },
                        }
                        span { "{file}" }
                    }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| dialog.dismiss(),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: selection.read().is_empty(),
                    onclick: move |_| dialog.resolve(DialogOutcome::Picked(selection().into_vec())),
                    "Select"
                }
            }
        }
    )
}
