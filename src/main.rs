use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use idea_brief::clients::OpenAIChatClient;
use idea_brief::config::Config;
use idea_brief::http::{HttpState, start_http_server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("idea_brief=info")),
        )
        .init();

    // Fails fast on a missing credential; the server must not come up
    // without one.
    let config = Config::load()?;
    let gateway = OpenAIChatClient::new(&config)?;

    info!("Starting idea-brief API (model={})", config.model);

    let state = HttpState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
    };

    start_http_server(state).await
}
