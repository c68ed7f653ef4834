//! Fetch a feed and print its items as JSON.
//!
//! ```bash
//! RUST_LOG=feedkit_core=debug cargo run -p feedkit-core --example fetch_feed -- https://feed.example.test/items
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use feedkit_core::{HttpClientConfig, LoadError, RemoteFeedLoader, ReqwestHttpClient};
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_FEED_URL: &str = "https://feed.example.test/items";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_FEED_URL));
    let url = match Url::parse(&raw) {
        Ok(url) => url,
        Err(parse_error) => {
            error!("invalid feed url '{raw}': {parse_error}");
            return ExitCode::from(2);
        }
    };

    let config = HttpClientConfig::default().with_user_agent("feedkit-demo/0.1.0");
    let client = Arc::new(ReqwestHttpClient::with_config(Handle::current(), &config));
    let loader = RemoteFeedLoader::new(url, client);

    match loader.load_async().await {
        Some(Ok(items)) => {
            info!(items = items.len(), "feed loaded");
            match serde_json::to_string_pretty(&items) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(serialize_error) => {
                    error!("failed to render feed: {serialize_error}");
                    ExitCode::from(4)
                }
            }
        }
        Some(Err(load_error @ LoadError::Connectivity)) => {
            error!("{load_error}");
            ExitCode::from(3)
        }
        Some(Err(load_error @ LoadError::InvalidData)) => {
            error!("{load_error}");
            ExitCode::from(5)
        }
        None => ExitCode::FAILURE,
    }
}
