//! Two-column table of facet counts

use dioxus::prelude::*;

use crate::facet::{FacetTable, COUNT_HEADER};

/// Renders one result table: facet name column, then release count column.
/// Rows appear in the order the data source returned them.
#[component]
pub fn DataTable(table: FacetTable) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "{table.name_header()}" }
                    th { "{COUNT_HEADER}" }
                }
            }
            tbody {
                for row in &table.rows {
                    tr {
                        td { "{row.name}" }
                        td { "{row.count}" }
                    }
                }
            }
        }
    }
}
