use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME, model::auth::AuthState, route::View, service::use_dialog,
};

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let mut view = use_context::<Signal<View>>();
    let dialog = use_dialog();

    let authenticated = auth.read().is_authenticated();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            button {
                class: "btn btn-ghost md:text-xl",
                onclick: move |_| view.set(View::Home),
                {SITE_NAME}
            }
        }
        div {
            class: "flex items-center gap-2",
            if authenticated {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| auth.write().clear(),
                    "Forget key"
                }
            }
            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    dialog.access_key("Access key", move |key| {
                        if let Some(key) = key {
                            auth.set(AuthState::with_token(key));
                        }
                    });
                },
                if authenticated { "Change key" } else { "Set access key" }
            }
        }
    })
}
