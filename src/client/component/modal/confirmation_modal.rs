use dioxus::prelude::*;

use super::Modal;

#[component]
pub fn ConfirmationModal(
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            title,
            prevent_close: false,
            on_close: on_cancel,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_text}"
                }
            }
        }
    )
}
