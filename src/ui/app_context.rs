use dioxus::prelude::*;

use crate::config::Config;
use crate::graphql::GraphqlClient;

/// Root application context containing all top-level dependencies
#[derive(Clone)]
pub struct AppContext {
    pub graphql: GraphqlClient,
    pub config: Config,
}

/// Hook returning the shared GraphQL client
pub fn use_graphql_client() -> GraphqlClient {
    use_context::<AppContext>().graphql
}
