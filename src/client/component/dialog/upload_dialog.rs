use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::modal::Modal,
    model::dialog::{human_size, DialogOutcome, UploadPolicy, UploadedFile},
    service::use_dialog,
};

/// Reads the chosen files in the browser after checking them against `policy`.
#[component]
pub fn UploadDialog(title: String, policy: UploadPolicy) -> Element {
    let dialog = use_dialog();
    let mut files = use_signal(Vec::<UploadedFile>::new);
    let mut rejections = use_signal(Vec::<String>::new);
    let mut is_reading = use_signal(|| false);

    let accept = policy.accept();
    let limit = human_size(policy.max_bytes);
    let multiple = policy.multiple;

    let on_change = move |evt: FormEvent| {
        let policy = policy.clone();
        async move {
            is_reading.set(true);

            let mut accepted = Vec::new();
            let mut rejected = Vec::new();

            for file in evt.files() {
                let name = file.name();
                if let Err(rejection) = policy.check(&name, file.size()) {
                    rejected.push(rejection.to_string());
                    continue;
                }

                match file.read_bytes().await {
                    Ok(bytes) => accepted.push(UploadedFile {
                        name,
                        content_type: file.content_type(),
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => {
                        tracing::error!("Failed to read {}: {}", name, e);
                        rejected.push(format!("{} could not be read", name));
                    }
                }
            }

            files.set(accepted);
            rejections.set(rejected);
            is_reading.set(false);
        }
    };

    let can_submit = !files.read().is_empty() && !is_reading();

    rsx!(
        Modal {
            title,
            prevent_close: is_reading(),
            on_close: move |_| dialog.dismiss(),
            div {
                class: "flex flex-col gap-4",
                input {
                    r#type: "file",
                    class: "file-input file-input-bordered w-full",
                    accept: "{accept}",
                    multiple,
                    disabled: is_reading(),
                    onchange: on_change,
                }
                p {
                    class: "text-sm opacity-70",
                    if accept.is_empty() {
                        "Up to {limit} per file."
                    } else {
                        "Accepted: {accept}, up to {limit} per file."
                    }
                }
                for message in rejections() {
                    div {
                        class: "alert alert-warning text-sm",
                        "{message}"
                    }
                }
                ul {
                    for file in files() {
                        li {
                            class: "text-sm",
                            {format!("{} ({})", file.name, human_size(file.bytes.len() as u64))}
                        }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_reading(),
                        onclick: move |_| dialog.dismiss(),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: !can_submit,
                        onclick: move |_| dialog.resolve(DialogOutcome::Uploaded(files())),
                        if is_reading() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Reading..."
                        } else {
                            "Upload"
                        }
                    }
                }
            }
        }
    )
}
