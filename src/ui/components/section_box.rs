//! Section divider with a centered heading

use dioxus::prelude::*;

#[component]
pub fn SectionBox(title: String) -> Element {
    rsx! {
        div { class: "section-box",
            hr { class: "section-divider" }
            h3 { class: "section-heading", "{title}" }
        }
    }
}
