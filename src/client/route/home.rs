use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::create_lecture,
    component::Page,
    constant::SITE_NAME,
    model::auth::AuthState,
    route::View,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let mut view = use_context::<Signal<View>>();

    let mut lecture_id = use_signal(String::new);
    let mut course_id = use_signal(String::new);
    let mut lecture_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let authenticated = auth.read().is_authenticated();
    let parsed_lecture_id = lecture_id().trim().parse::<i32>().ok();

    let on_create = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Some(token) = auth.read().token().map(str::to_string) else {
            return;
        };
        let Ok(course) = course_id().trim().parse::<i32>() else {
            error.set(Some("Course ID must be a number".to_string()));
            return;
        };

        is_submitting.set(true);
        match create_lecture(&token, course, lecture_name(), None).await {
            Ok(lecture) => {
                tracing::info!("Created lecture {}", lecture.id);
                view.set(View::Lecture { id: lecture.id });
            }
            Err(err) => {
                tracing::error!("Failed to create lecture: {}", err);
                error.set(Some(err.message));
            }
        }
        is_submitting.set(false);
    };

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "flex flex-col gap-6 w-full max-w-lg",
                if !authenticated {
                    div {
                        class: "alert alert-info",
                        "Set your access key in the header to work with lectures."
                    }
                }
                if let Some(message) = error() {
                    div {
                        class: "alert alert-error",
                        "{message}"
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "Open lecture" }
                        form {
                            class: "flex gap-2",
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                if let Some(id) = parsed_lecture_id {
                                    view.set(View::Lecture { id });
                                }
                            },
                            input {
                                class: "input input-bordered flex-1",
                                placeholder: "Lecture ID",
                                inputmode: "numeric",
                                value: "{lecture_id}",
                                oninput: move |evt| lecture_id.set(evt.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: !authenticated || parsed_lecture_id.is_none(),
                                "Open"
                            }
                        }
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "New lecture" }
                        form {
                            class: "flex flex-col gap-2",
                            onsubmit: on_create,
                            input {
                                class: "input input-bordered",
                                placeholder: "Course ID",
                                inputmode: "numeric",
                                value: "{course_id}",
                                oninput: move |evt| course_id.set(evt.value()),
                            }
                            input {
                                class: "input input-bordered",
                                placeholder: "Lecture name",
                                value: "{lecture_name}",
                                oninput: move |evt| lecture_name.set(evt.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: !authenticated || is_submitting() || lecture_name().trim().is_empty(),
                                if is_submitting() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "Creating..."
                                } else {
                                    "Create"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
