mod draft;
mod unit_card;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures_util::StreamExt;
use gloo_timers::future::TimeoutFuture;
use serde_json::json;

use crate::client::{
    api::{create_unit, delete_unit, get_lecture, update_unit},
    component::page::{ErrorPage, LoadingPage, Page},
    constant::{IMPORT_EXTENSIONS, IMPORT_MAX_BYTES, NOTICE_TIMEOUT_MS, SITE_NAME},
    model::{
        auth::AuthState,
        dialog::{UploadPolicy, UploadedFile},
        error::ApiError,
    },
    service::use_dialog,
};

use unit_card::UnitCard;

/// Writes started from the page or its dialogs. The page's coroutine runs them in order.
pub enum LectureAction {
    CreateFreeText {
        course_id: i32,
        name: String,
    },
    Import {
        course_id: i32,
        files: Vec<UploadedFile>,
    },
    AttachFiles {
        course_id: i32,
        files: Vec<String>,
    },
    SetProgressable {
        unit_id: i32,
        progressable: bool,
    },
    Delete {
        unit_id: i32,
    },
}

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

#[component]
pub fn LecturePage(id: i32) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let dialog = use_dialog();
    let mut refetch_trigger = use_signal(|| 0u32);
    let notice = use_signal(|| None::<Notice>);
    let mut new_unit_name = use_signal(String::new);

    let lecture = use_resource(move || async move {
        let _ = refetch_trigger(); // Read trigger to track changes
        let token = auth.read().token().map(str::to_string);

        match token {
            Some(token) => get_lecture(&token, id).await,
            None => Err(ApiError {
                status: 401,
                message: "No access key set".to_string(),
            }),
        }
    });

    let actions = use_coroutine(move |mut rx: UnboundedReceiver<LectureAction>| async move {
        while let Some(action) = rx.next().await {
            let Some(token) = auth.peek().token().map(str::to_string) else {
                flash(notice, Notice::Error("Set an access key first".to_string()));
                continue;
            };

            // Imports can fail halfway, so reload after errors too
            match run_action(&token, id, action).await {
                Ok(message) => flash(notice, Notice::Success(message)),
                Err(message) => {
                    tracing::error!("Lecture {} action failed: {}", id, message);
                    flash(notice, Notice::Error(message));
                }
            }
            refetch_trigger.with_mut(|n| *n += 1);
        }
    });

    let lecture = match &*lecture.read_unchecked() {
        None => return rsx!(LoadingPage {  }),
        Some(Err(err)) => return rsx!(ErrorPage { error: err.clone() }),
        Some(Ok(lecture)) => lecture.clone(),
    };

    let course_id = lecture.course_id;
    let files = draft::lecture_files(&lecture.units);
    let unit_count = lecture.units.len();
    let title = format!("{} | {}", lecture.name, SITE_NAME);
    let name = lecture.name.clone();

    rsx! {
        Title { "{title}" }
        Page {
            div {
                class: "flex flex-col gap-4 max-w-3xl mx-auto",
                div {
                    h1 {
                        class: "text-2xl font-bold",
                        "{name}"
                    }
                    if let Some(description) = lecture.description.clone() {
                        p {
                            class: "opacity-70",
                            "{description}"
                        }
                    }
                    p {
                        class: "text-sm opacity-70",
                        "Course {course_id} · {unit_count} units"
                    }
                }
                NoticeBanner { notice }
                form {
                    class: "flex gap-2",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        let name = new_unit_name();
                        if !name.trim().is_empty() {
                            actions.send(LectureAction::CreateFreeText { course_id, name });
                            new_unit_name.set(String::new());
                        }
                    },
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "New text unit name",
                        value: "{new_unit_name}",
                        oninput: move |evt| new_unit_name.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: new_unit_name().trim().is_empty(),
                        "Add text unit"
                    }
                }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let policy = UploadPolicy::new(IMPORT_EXTENSIONS, IMPORT_MAX_BYTES)
                                .multiple(true);
                            dialog.upload("Import units", policy, move |uploaded| {
                                if !uploaded.is_empty() {
                                    actions.send(LectureAction::Import { course_id, files: uploaded });
                                }
                            });
                        },
                        "Import from JSON"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            dialog.pick_files("Add file unit", files.clone(), true, move |picked| {
                                if !picked.is_empty() {
                                    actions.send(LectureAction::AttachFiles { course_id, files: picked });
                                }
                            });
                        },
                        "Add file unit"
                    }
                }
                if lecture.units.is_empty() {
                    p {
                        class: "opacity-70",
                        "This lecture has no units yet."
                    }
                }
                for (position, unit) in lecture.units.into_iter().enumerate() {
                    UnitCard {
                        key: "{unit.id}",
                        position,
                        unit,
                        on_action: move |action| actions.send(action),
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    match notice() {
        Some(Notice::Success(message)) => rsx!(div {
            class: "alert alert-success",
            "{message}"
        }),
        Some(Notice::Error(message)) => rsx!(div {
            class: "alert alert-error",
            "{message}"
        }),
        None => rsx!(),
    }
}

/// Shows `value` until it times out or is replaced.
fn flash(mut notice: Signal<Option<Notice>>, value: Notice) {
    notice.set(Some(value.clone()));

    spawn(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        if notice.peek().as_ref() == Some(&value) {
            notice.set(None);
        }
    });
}

async fn run_action(token: &str, lecture_id: i32, action: LectureAction) -> Result<String, String> {
    match action {
        LectureAction::CreateFreeText { course_id, name } => {
            let unit = create_unit(token, lecture_id, draft::free_text(course_id, &name))
                .await
                .map_err(|e| e.to_string())?;
            Ok(format!("Created \"{}\"", unit.name))
        }
        LectureAction::Import { course_id, files } => {
            let mut imported = 0;
            for file in files {
                let model = draft::import(&file.bytes, course_id)
                    .map_err(|e| format!("{}: {}", file.name, e))?;
                create_unit(token, lecture_id, model)
                    .await
                    .map_err(|e| format!("{}: {}", file.name, e))?;
                imported += 1;
            }
            Ok(format!("Imported {} unit(s)", imported))
        }
        LectureAction::AttachFiles { course_id, files } => {
            let unit = create_unit(token, lecture_id, draft::file_unit(course_id, files))
                .await
                .map_err(|e| e.to_string())?;
            Ok(format!("Added \"{}\"", unit.name))
        }
        LectureAction::SetProgressable {
            unit_id,
            progressable,
        } => {
            let unit = update_unit(token, unit_id, &json!({ "progressable": progressable }))
                .await
                .map_err(|e| e.to_string())?;
            if unit.progressable {
                Ok(format!("\"{}\" now counts toward progress", unit.name))
            } else {
                Ok(format!("\"{}\" no longer counts toward progress", unit.name))
            }
        }
        LectureAction::Delete { unit_id } => {
            delete_unit(token, unit_id)
                .await
                .map_err(|e| e.to_string())?;
            Ok("Unit deleted".to_string())
        }
    }
}
