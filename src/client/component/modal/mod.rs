pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Modal shell for dialogs. It is mounted only while its dialog is open.
#[component]
pub fn Modal(
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    use_effect(move || {
        document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
    });

    rsx!(
        div {
            class: "modal modal-open",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    on_close.call(());
                }
            },
            div {
                class: "modal-box {class} border border-base-300 w-11/12 max-w-lg",
                // Header with title and close button
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        on_close.call(());
                    }
                },
            }
        }
    )
}
