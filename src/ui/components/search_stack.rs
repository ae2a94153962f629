//! Search controls: three mutually-exclusive facet selectors plus reset
//!
//! The selector for the active facet stays interactive; the other two are
//! disabled until the selection is cleared. Each selector keeps a local
//! echo of its displayed value so reset can clear all three widgets, not
//! just the active one.

use dioxus::prelude::*;
use tracing::warn;

use crate::facet::{FacetKind, Selection};
use crate::graphql::UniqueNames;
use crate::ui::app_context::use_graphql_client;
use crate::ui::components::FacetSelect;

#[component]
pub fn SearchStack(selection: Signal<Selection>) -> Element {
    let mut names = use_signal(UniqueNames::default);

    // Transient per-widget values, cleared on reset so no stale choice
    // lingers for a facet that is no longer active.
    let mut artist_value = use_signal(String::new);
    let mut style_value = use_signal(String::new);
    let mut genre_value = use_signal(String::new);

    let graphql = use_graphql_client();

    // Catalog load, once per mount. A failure leaves the selectors with no
    // options rather than surfacing an error.
    use_effect(move || {
        let graphql = graphql.clone();
        spawn(async move {
            match graphql.unique_names().await {
                Ok(fetched) => names.set(fetched),
                Err(e) => warn!("Failed to fetch unique facet names: {}", e),
            }
        });
    });

    let on_reset = move |_| {
        selection.write().reset();
        artist_value.set(String::new());
        style_value.set(String::new());
        genre_value.set(String::new());
    };

    let current = selection();
    rsx! {
        div { class: "search-stack",
            FacetSelect {
                label: "Artist",
                placeholder: "Select an Artist",
                options: names().artists,
                value: artist_value(),
                disabled: !current.is_selectable(FacetKind::Artist),
                onchange: move |value: String| {
                    artist_value.set(value.clone());
                    selection.write().select_facet(FacetKind::Artist, value);
                },
            }
            FacetSelect {
                label: "Style",
                placeholder: "Select a Style",
                options: names().styles,
                value: style_value(),
                disabled: !current.is_selectable(FacetKind::Style),
                onchange: move |value: String| {
                    style_value.set(value.clone());
                    selection.write().select_facet(FacetKind::Style, value);
                },
            }
            FacetSelect {
                label: "Genre",
                placeholder: "Select a Genre",
                options: names().genres,
                value: genre_value(),
                disabled: !current.is_selectable(FacetKind::Genre),
                onchange: move |value: String| {
                    genre_value.set(value.clone());
                    selection.write().select_facet(FacetKind::Genre, value);
                },
            }
        }
        div { class: "reset-row",
            button { class: "reset-button", onclick: on_reset, "Reset Selection" }
        }
    }
}
