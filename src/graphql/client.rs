//! HTTP client for the release-counts GraphQL backend
//!
//! POSTs `{ query, variables }` documents and unwraps the `{ data, errors }`
//! envelope. Each release-counts query asks only for the two count lists
//! complementary to the filtered facet.

use reqwest::{Client, Error as ReqwestError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::facet::FacetKind;
use crate::graphql::models::{ReleaseCountsData, ReleaseCountsReply, UniqueNames, UniqueNamesData};

#[derive(Error, Debug)]
pub enum GraphqlError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("GraphQL server error: {0}")]
    Server(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ServerError>,
}

/// One entry of the envelope's `errors` array
#[derive(Debug, Deserialize)]
struct ServerError {
    message: String,
}

const UNIQUE_NAMES_QUERY: &str = "\
query GetUniqueNames {
  uniqueArtists { name }
  uniqueGenres { name }
  uniqueStyles { name }
}";

const COUNTS_WHEN_ARTIST_QUERY: &str = "\
query ReleaseCounts($artist: String!) {
  releaseCounts(artist: $artist) {
    releaseCount
    genreCounts { name count }
    styleCounts { name count }
  }
}";

const COUNTS_WHEN_GENRE_QUERY: &str = "\
query ReleaseCounts($genre: String!) {
  releaseCounts(genre: $genre) {
    releaseCount
    artistCounts { name count }
    styleCounts { name count }
  }
}";

const COUNTS_WHEN_STYLE_QUERY: &str = "\
query ReleaseCounts($style: String!) {
  releaseCounts(style: $style) {
    releaseCount
    artistCounts { name count }
    genreCounts { name count }
  }
}";

/// Query document and variables for a filter on `kind`
fn counts_query(kind: FacetKind, value: &str) -> (&'static str, serde_json::Value) {
    match kind {
        FacetKind::Artist => (COUNTS_WHEN_ARTIST_QUERY, json!({ "artist": value })),
        FacetKind::Genre => (COUNTS_WHEN_GENRE_QUERY, json!({ "genre": value })),
        FacetKind::Style => (COUNTS_WHEN_STYLE_QUERY, json!({ "style": value })),
    }
}

#[derive(Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    async fn post_query<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, GraphqlError> {
        debug!("GraphQL POST {} variables: {}", self.endpoint, variables);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<T> = response.json().await?;
        if let Some(err) = envelope.errors.first() {
            return Err(GraphqlError::Server(err.message.clone()));
        }
        envelope
            .data
            .ok_or_else(|| GraphqlError::Server("response carried no data".to_string()))
    }

    /// Fetch the distinct facet values for all three selectors.
    /// Called once per session to populate the search controls.
    pub async fn unique_names(&self) -> Result<UniqueNames, GraphqlError> {
        let data: UniqueNamesData = self.post_query(UNIQUE_NAMES_QUERY, json!({})).await?;
        Ok(UniqueNames {
            artists: data.unique_artists.into_iter().map(|n| n.name).collect(),
            genres: data.unique_genres.into_iter().map(|n| n.name).collect(),
            styles: data.unique_styles.into_iter().map(|n| n.name).collect(),
        })
    }

    /// Fetch aggregate counts for the two facets complementary to `kind`,
    /// conditioned on `value`
    pub async fn release_counts(
        &self,
        kind: FacetKind,
        value: &str,
    ) -> Result<ReleaseCountsReply, GraphqlError> {
        let (query, variables) = counts_query(kind, value);
        let data: ReleaseCountsData = self.post_query(query, variables).await?;
        Ok(data.release_counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_query_selects_document_by_kind() {
        let (query, variables) = counts_query(FacetKind::Artist, "Autechre");
        assert!(query.contains("releaseCounts(artist: $artist)"));
        assert_eq!(variables, json!({ "artist": "Autechre" }));

        let (query, variables) = counts_query(FacetKind::Genre, "Electronic");
        assert!(query.contains("releaseCounts(genre: $genre)"));
        assert_eq!(variables, json!({ "genre": "Electronic" }));

        let (query, variables) = counts_query(FacetKind::Style, "Downtempo");
        assert!(query.contains("releaseCounts(style: $style)"));
        assert_eq!(variables, json!({ "style": "Downtempo" }));
    }

    #[test]
    fn test_counts_queries_never_request_the_filtered_facet() {
        let (query, _) = counts_query(FacetKind::Artist, "x");
        assert!(!query.contains("artistCounts"));

        let (query, _) = counts_query(FacetKind::Genre, "x");
        assert!(!query.contains("genreCounts"));

        let (query, _) = counts_query(FacetKind::Style, "x");
        assert!(!query.contains("styleCounts"));
    }

    #[test]
    fn test_envelope_with_data_deserializes() {
        let json = r#"{ "data": { "releaseCounts": { "releaseCount": 7 } } }"#;
        let envelope: Envelope<ReleaseCountsData> = serde_json::from_str(json).unwrap();
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.data.unwrap().release_counts.release_count, 7);
    }

    #[test]
    fn test_envelope_surfaces_server_errors() {
        let json = r#"{ "data": null, "errors": [{ "message": "unknown artist" }] }"#;
        let envelope: Envelope<ReleaseCountsData> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors[0].message, "unknown artist");
    }
}
