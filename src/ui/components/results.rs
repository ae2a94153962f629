//! Results region: the two tables complementary to the active facet

use dioxus::prelude::*;

use crate::facet::{result_tables, FacetCounts, FacetKind};
use crate::ui::components::DataTable;

#[component]
pub fn ResultsGrid(active: Option<FacetKind>, counts: FacetCounts) -> Element {
    let tables = result_tables(active, &counts);
    if tables.is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "release-count-summary",
            "{counts.release_count} releases match the current filter"
        }
        div { class: "results-grid",
            for table in tables {
                DataTable { table }
            }
        }
    }
}
