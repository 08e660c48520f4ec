use dioxus::prelude::*;

use crate::client::model::error::ApiError;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(error: ApiError) -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            div {
                class: "alert alert-error max-w-lg",
                if error.is_unauthorized() {
                    "Your access key was rejected. Set a new one in the header."
                } else {
                    "{error}"
                }
            }
        }
    )
}
