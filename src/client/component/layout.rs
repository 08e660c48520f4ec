use dioxus::prelude::*;

use crate::client::{component::Header, route::ViewOutlet};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        ViewOutlet {  }
    })
}
