use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api::get_unit, model::auth::AuthState, service::use_dialog},
    model::unit::UnitDto,
};

use super::LectureAction;

#[component]
pub fn UnitCard(position: usize, unit: UnitDto, on_action: EventHandler<LectureAction>) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let dialog = use_dialog();
    let mut details = use_signal(|| None::<String>);

    let unit_id = unit.id;
    let progressable = unit.progressable;
    let name = unit.name.clone();
    let kind = unit.kind.to_string();
    let number = position + 1;

    let toggle_details = move |_| async move {
        if details.peek().is_some() {
            details.set(None);
            return;
        }

        let Some(token) = auth.peek().token().map(str::to_string) else {
            return;
        };

        // Fetch the stored copy so the document shown is current
        let text = match get_unit(&token, unit_id).await {
            Ok(fresh) => serde_json::to_string_pretty(&fresh.content)
                .unwrap_or_else(|e| format!("Failed to format content: {}", e)),
            Err(err) => {
                tracing::error!("Failed to fetch unit {}: {}", unit_id, err);
                err.message
            }
        };
        details.set(Some(text));
    };

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-2",
                div {
                    class: "flex justify-between items-center gap-2",
                    div {
                        span { class: "opacity-50 mr-2", "{number}." }
                        span { class: "font-semibold", "{name}" }
                        span { class: "badge badge-outline ml-2", "{kind}" }
                        if progressable {
                            span { class: "badge badge-primary ml-2", "progress" }
                        }
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: toggle_details,
                            if details().is_some() { "Hide" } else { "Details" }
                        }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| on_action.call(LectureAction::SetProgressable {
                                unit_id,
                                progressable: !progressable,
                            }),
                            if progressable { "Untrack" } else { "Track" }
                        }
                        button {
                            class: "btn btn-sm btn-error btn-outline",
                            onclick: move |_| {
                                dialog.confirm(
                                    "Delete unit",
                                    format!("Delete \"{}\"? This cannot be undone.", unit.name),
                                    move |confirmed| {
                                        if confirmed {
                                            on_action.call(LectureAction::Delete { unit_id });
                                        }
                                    },
                                );
                            },
                            "Delete"
                        }
                    }
                }
                if let Some(description) = unit.description.clone() {
                    p { class: "text-sm opacity-70", "{description}" }
                }
                if let Some(text) = details() {
                    pre {
                        class: "text-xs bg-base-300 p-2 rounded overflow-x-auto",
                        "{text}"
                    }
                }
            }
        }
    )
}
