//! Wire models for the release-counts GraphQL API

use serde::Deserialize;

use crate::facet::FacetCount;

/// Distinct facet values for populating the three selectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniqueNames {
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
}

/// One `{ name }` entry of a unique-names list
#[derive(Debug, Deserialize)]
pub(crate) struct UniqueName {
    pub name: String,
}

/// `data` payload of the unique-names query
#[derive(Debug, Deserialize)]
pub(crate) struct UniqueNamesData {
    #[serde(rename = "uniqueArtists", default)]
    pub unique_artists: Vec<UniqueName>,
    #[serde(rename = "uniqueGenres", default)]
    pub unique_genres: Vec<UniqueName>,
    #[serde(rename = "uniqueStyles", default)]
    pub unique_styles: Vec<UniqueName>,
}

/// `releaseCounts` payload
///
/// Each query only asks for the two count lists complementary to the
/// filtered facet, so every list defaults to empty when omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReleaseCountsReply {
    #[serde(rename = "releaseCount", default)]
    pub release_count: u64,
    #[serde(rename = "artistCounts", default)]
    pub artist_counts: Vec<FacetCount>,
    #[serde(rename = "genreCounts", default)]
    pub genre_counts: Vec<FacetCount>,
    #[serde(rename = "styleCounts", default)]
    pub style_counts: Vec<FacetCount>,
}

/// `data` payload of a release-counts query
#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseCountsData {
    #[serde(rename = "releaseCounts")]
    pub release_counts: ReleaseCountsReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_counts_reply_defaults_omitted_lists_to_empty() {
        // The genre-filtered query never asks for genreCounts; the reply
        // may also legally omit any other list.
        let json = r#"{
            "releaseCount": 4,
            "styleCounts": [{ "name": "Ambient", "count": 3 }]
        }"#;
        let reply: ReleaseCountsReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.release_count, 4);
        assert!(reply.artist_counts.is_empty());
        assert!(reply.genre_counts.is_empty());
        assert_eq!(reply.style_counts.len(), 1);
        assert_eq!(reply.style_counts[0].name, "Ambient");
        assert_eq!(reply.style_counts[0].count, 3);
    }

    #[test]
    fn test_release_counts_data_unwraps_field_name() {
        let json = r#"{ "releaseCounts": { "releaseCount": 1 } }"#;
        let data: ReleaseCountsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.release_counts.release_count, 1);
    }

    #[test]
    fn test_unique_names_data_maps_camel_case_fields() {
        let json = r#"{
            "uniqueArtists": [{ "name": "Autechre" }],
            "uniqueGenres": [{ "name": "Electronic" }],
            "uniqueStyles": [{ "name": "IDM" }, { "name": "Ambient" }]
        }"#;
        let data: UniqueNamesData = serde_json::from_str(json).unwrap();
        assert_eq!(data.unique_artists[0].name, "Autechre");
        assert_eq!(data.unique_genres[0].name, "Electronic");
        assert_eq!(data.unique_styles.len(), 2);
    }
}
