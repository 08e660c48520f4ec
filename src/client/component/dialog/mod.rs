//! Dialog module: the registry of dialog components and the host that shows them.
//!
//! Wrap the application in `DialogModule`; descendants open dialogs through
//! [`use_dialog`](crate::client::service::use_dialog).

mod access_key_dialog;
mod confirm_dialog;
mod filepicker_dialog;
mod upload_dialog;

use dioxus::prelude::*;

pub use access_key_dialog::AccessKeyDialog;
pub use confirm_dialog::ConfirmDialog;
pub use filepicker_dialog::FilepickerDialog;
pub use upload_dialog::UploadDialog;

use crate::client::{model::dialog::DialogRequest, service::DialogService};

/// Provides the `DialogService` to `children` and renders the open dialog above them.
#[component]
pub fn DialogModule(children: Element) -> Element {
    use_context_provider(DialogService::new);

    rsx!(
        {children}
        DialogHost {  }
    )
}

/// Renders the component registered for the open request's kind.
#[component]
fn DialogHost() -> Element {
    let dialog = use_context::<DialogService>();

    let Some(request) = dialog.current() else {
        return rsx!();
    };

    match request {
        DialogRequest::Confirm { title, message } => rsx!(ConfirmDialog { title, message }),
        DialogRequest::AccessKey { title } => rsx!(AccessKeyDialog { title }),
        DialogRequest::Upload { title, policy } => rsx!(UploadDialog { title, policy }),
        DialogRequest::Filepicker {
            title,
            files,
            multiple,
        } => rsx!(FilepickerDialog {
            title,
            files,
            multiple
        }),
    }
}
