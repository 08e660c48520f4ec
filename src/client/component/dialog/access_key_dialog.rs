use dioxus::prelude::*;

use crate::client::{
    component::modal::Modal,
    model::dialog::{normalize_access_key, DialogOutcome},
    service::use_dialog,
};

#[component]
pub fn AccessKeyDialog(title: String) -> Element {
    let dialog = use_dialog();
    let mut key = use_signal(String::new);

    let is_blank = normalize_access_key(&key()).is_none();

    rsx!(
        Modal {
            title,
            prevent_close: false,
            on_close: move |_| dialog.dismiss(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if !is_blank {
                        dialog.resolve(DialogOutcome::AccessKey(key()));
                    }
                },
                p {
                    class: "text-sm opacity-70",
                    "Paste the access key issued for your account."
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Access key",
                    autocomplete: "off",
                    value: "{key}",
                    oninput: move |evt| key.set(evt.value()),
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
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_blank,
                        "Save"
                    }
                }
            }
        }
    )
}
