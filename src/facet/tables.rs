//! Maps the active facet to its pair of result tables

use crate::facet::projection::{FacetCount, FacetCounts};
use crate::facet::selection::FacetKind;

/// Count-column header shared by every result table
pub const COUNT_HEADER: &str = "Releases Count";

/// One renderable result table: count rows for a single facet
#[derive(Debug, Clone, PartialEq)]
pub struct FacetTable {
    pub kind: FacetKind,
    pub rows: Vec<FacetCount>,
}

impl FacetTable {
    /// Header of the name column. The count column is always [`COUNT_HEADER`].
    pub fn name_header(&self) -> &'static str {
        self.kind.label()
    }
}

/// The two tables complementary to the active facet, in fixed order
/// (artist before genre before style). No selection renders no tables.
pub fn result_tables(active: Option<FacetKind>, counts: &FacetCounts) -> Vec<FacetTable> {
    let table = |kind: FacetKind| {
        let rows = match kind {
            FacetKind::Artist => counts.artists.clone(),
            FacetKind::Genre => counts.genres.clone(),
            FacetKind::Style => counts.styles.clone(),
        };
        FacetTable { kind, rows }
    };
    match active {
        None => Vec::new(),
        Some(FacetKind::Artist) => vec![table(FacetKind::Genre), table(FacetKind::Style)],
        Some(FacetKind::Genre) => vec![table(FacetKind::Artist), table(FacetKind::Style)],
        Some(FacetKind::Style) => vec![table(FacetKind::Artist), table(FacetKind::Genre)],
    }
}
