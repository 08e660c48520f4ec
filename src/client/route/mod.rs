//! Top-level views. The app has two screens, so the current one is a context signal rather
//! than a URL router.

mod home;
mod lecture;

use dioxus::prelude::*;

pub use home::Home;
pub use lecture::LecturePage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Lecture { id: i32 },
}

#[component]
pub fn ViewOutlet() -> Element {
    let view = use_context::<Signal<View>>();

    match view() {
        View::Home => rsx!(Home {  }),
        View::Lecture { id } => rsx!(LecturePage { key: "{id}", id }),
    }
}
