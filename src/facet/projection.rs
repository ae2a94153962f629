//! Shapes release-count replies into the displayed projection
//!
//! Counts are only ever shown for the two facets the user is not filtering
//! by. The slot matching the active facet is cleared unconditionally, so a
//! misbehaving server that returns counts for the filtered facet cannot
//! leak them into the display.

use serde::Deserialize;

use crate::facet::selection::{FacetKind, Selection};
use crate::graphql::models::ReleaseCountsReply;

/// One row of a result table: N releases associated with `name`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacetCount {
    pub name: String,
    pub count: u64,
}

/// Aggregate counts for the two facets complementary to the active one
///
/// Invariant: the collection named after the active facet is empty. With no
/// selection all three are empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetCounts {
    /// Total releases matching the active filter
    pub release_count: u64,
    pub artists: Vec<FacetCount>,
    pub genres: Vec<FacetCount>,
    pub styles: Vec<FacetCount>,
}

impl FacetCounts {
    /// Shape a reply for a filter on `kind`
    pub fn from_reply(kind: FacetKind, reply: ReleaseCountsReply) -> Self {
        let mut counts = FacetCounts {
            release_count: reply.release_count,
            artists: reply.artist_counts,
            genres: reply.genre_counts,
            styles: reply.style_counts,
        };
        match kind {
            FacetKind::Artist => counts.artists.clear(),
            FacetKind::Genre => counts.genres.clear(),
            FacetKind::Style => counts.styles.clear(),
        }
        counts
    }
}

/// Whether a reply may be committed to the display.
///
/// Each dispatched query carries the selection it was issued for; by the
/// time its reply arrives a newer selection may have superseded it, and a
/// stale reply must never overwrite the newer query's results.
pub fn reply_is_current(issued: &Selection, current: &Selection) -> bool {
    issued == current
}
