//! Application shell: window config, launch, and the root App component

#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::facet::{reply_is_current, FacetCounts, Selection};
use crate::ui::app_context::{use_graphql_client, AppContext};
use crate::ui::components::{ResultsGrid, SearchStack, SectionBox};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "desktop")]
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("tone addiction")
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1000, 760))
}

#[cfg(feature = "desktop")]
pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

/// Root component: owns the selection and the projected counts
#[component]
pub fn App() -> Element {
    debug!("Rendering app component");
    let selection = use_signal(Selection::default);
    let mut counts = use_signal(FacetCounts::default);

    let graphql = use_graphql_client();

    // Refetch whenever the selection changes. Each dispatched query carries
    // the selection it was issued for; the reply only commits while that
    // selection is still current, so a slow reply for a superseded filter
    // can never overwrite newer results. A failed fetch keeps the last
    // displayed counts.
    use_effect(move || {
        let issued = selection();
        match issued.clone() {
            Selection::Empty => counts.set(FacetCounts::default()),
            Selection::Active { kind, value } => {
                let graphql = graphql.clone();
                spawn(async move {
                    match graphql.release_counts(kind, &value).await {
                        Ok(reply) => {
                            if reply_is_current(&issued, &selection.read()) {
                                counts.set(FacetCounts::from_reply(kind, reply));
                            } else {
                                debug!("Discarding stale release counts for {:?} {:?}", kind, value);
                            }
                        }
                        Err(e) => {
                            warn!("Failed to fetch release counts: {}", e);
                        }
                    }
                });
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app",
            SectionBox { title: "Search" }
            SearchStack { selection }
            SectionBox { title: "Results" }
            ResultsGrid { active: selection().active_kind(), counts: counts() }
        }
    }
}
