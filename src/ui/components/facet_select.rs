//! One labeled single-select row for a facet

use dioxus::prelude::*;

/// Native select with a left-hand label. The empty option acts as the
/// placeholder; choosing it reports an empty value to the caller.
#[component]
pub fn FacetSelect(
    label: &'static str,
    placeholder: &'static str,
    options: Vec<String>,
    value: String,
    disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "facet-select-row",
            span { class: "facet-select-label", "{label}" }
            select {
                class: "facet-select",
                disabled,
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                option { value: "", "{placeholder}" }
                for name in &options {
                    option { value: "{name}", selected: *name == value, "{name}" }
                }
            }
        }
    }
}
