use tracing::info;

use tone_addiction::config::Config;
use tone_addiction::graphql::GraphqlClient;
use tone_addiction::{ui, AppContext};

fn configure_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .init();
}

fn main() {
    let config = Config::load();
    configure_logging();
    info!("GraphQL endpoint: {}", config.graphql_endpoint);
    let graphql = GraphqlClient::new(config.graphql_endpoint.clone());
    let context = AppContext { graphql, config };
    info!("Starting UI");
    ui::launch_app(context);
    info!("UI quit");
}
