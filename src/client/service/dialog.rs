//! Opens dialogs from anywhere below `DialogModule` and hands their answers back.
//!
//! One dialog is open at a time. Opening another while one is showing dismisses the first, so
//! every caller's callback runs exactly once.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::model::dialog::{
    DialogOutcome, DialogRequest, UploadPolicy, UploadedFile,
};

struct ActiveDialog {
    request: DialogRequest,
    respond: Box<dyn FnOnce(DialogOutcome)>,
}

#[derive(Clone, Copy)]
pub struct DialogService {
    active: Signal<Option<ActiveDialog>>,
}

impl DialogService {
    pub fn new() -> Self {
        Self {
            active: Signal::new(None),
        }
    }

    /// The request currently on screen, if any.
    pub fn current(&self) -> Option<DialogRequest> {
        self.active.read().as_ref().map(|active| active.request.clone())
    }

    pub fn confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_result: impl FnOnce(bool) + 'static,
    ) {
        self.open(
            DialogRequest::Confirm {
                title: title.into(),
                message: message.into(),
            },
            move |outcome| on_result(outcome.confirmed()),
        );
    }

    /// Asks for an access key. Resolves to `None` when dismissed or left blank.
    pub fn access_key(
        &self,
        title: impl Into<String>,
        on_result: impl FnOnce(Option<String>) + 'static,
    ) {
        self.open(
            DialogRequest::AccessKey {
                title: title.into(),
            },
            move |outcome| on_result(outcome.access_key()),
        );
    }

    pub fn upload(
        &self,
        title: impl Into<String>,
        policy: UploadPolicy,
        on_result: impl FnOnce(Vec<UploadedFile>) + 'static,
    ) {
        self.open(
            DialogRequest::Upload {
                title: title.into(),
                policy,
            },
            move |outcome| on_result(outcome.uploaded()),
        );
    }

    pub fn pick_files(
        &self,
        title: impl Into<String>,
        files: Vec<String>,
        multiple: bool,
        on_result: impl FnOnce(Vec<String>) + 'static,
    ) {
        self.open(
            DialogRequest::Filepicker {
                title: title.into(),
                files,
                multiple,
            },
            move |outcome| on_result(outcome.picked()),
        );
    }

    /// Closes the open dialog and passes `outcome` to whoever opened it.
    pub fn resolve(&self, outcome: DialogOutcome) {
        let mut active = self.active;
        let Some(dialog) = active.take() else {
            return;
        };

        tracing::debug!(
            "Resolved {} dialog \"{}\"",
            dialog.request.kind().name(),
            dialog.request.title()
        );
        (dialog.respond)(outcome);
    }

    pub fn dismiss(&self) {
        self.resolve(DialogOutcome::Dismissed);
    }

    fn open(&self, request: DialogRequest, respond: impl FnOnce(DialogOutcome) + 'static) {
        self.dismiss();

        let mut active = self.active;
        active.set(Some(ActiveDialog {
            request,
            respond: Box::new(respond),
        }));
    }
}

/// The `DialogService` provided by the enclosing `DialogModule`.
pub fn use_dialog() -> DialogService {
    use_context::<DialogService>()
}
