use dioxus::prelude::*;

use crate::client::{
    component::modal::ConfirmationModal, model::dialog::DialogOutcome, service::use_dialog,
};

#[component]
pub fn ConfirmDialog(title: String, message: String) -> Element {
    let dialog = use_dialog();

    rsx!(
        ConfirmationModal {
            title,
            message: rsx!(
                p {
                    class: "py-4",
                    "{message}"
                }
            ),
            confirm_text: "Confirm".to_string(),
            confirm_class: "btn-error".to_string(),
            on_confirm: move |_| dialog.resolve(DialogOutcome::Confirmed),
            on_cancel: move |_| dialog.dismiss(),
        }
    )
}
