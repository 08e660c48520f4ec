use dioxus::prelude::*;

use crate::client::{
    component::{DialogModule, Layout},
    constant::SITE_NAME,
    model::auth::AuthState,
    route::View,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(View::Home));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Lectures and course units"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        DialogModule {
            Layout {  }
        }
    }
}
