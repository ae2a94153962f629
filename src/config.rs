use tracing::info;

/// Endpoint of the release-counts GraphQL backend when none is configured
const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Application configuration
///
/// Loaded from the environment, with `.env` support for dev mode.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL of the GraphQL endpoint serving unique names and release counts
    pub graphql_endpoint: String,
}

impl Config {
    /// Load configuration from the environment. Dev mode is activated if a
    /// `.env` file exists next to the binary.
    pub fn load() -> Self {
        if dotenvy::dotenv().is_ok() {
            info!("Dev mode activated - loading from .env");
        }
        let graphql_endpoint = std::env::var("TONE_GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_GRAPHQL_ENDPOINT.to_string());
        Self { graphql_endpoint }
    }
}
