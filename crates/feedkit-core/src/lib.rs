//! # Feedkit Core
//!
//! Loads a remote feed over HTTP and delivers strongly-typed feed items.
//!
//! ## Overview
//!
//! The orchestration is decoupled from the network stack:
//!
//! - **Transport contract** ([`HttpClient`]) with a single callback-based `get`
//! - **Response mapper** turning `(body, status)` into a [`LoadFeedResult`]
//! - **Remote loader** sequencing one request, mapping, and liveness-guarded delivery
//! - **Reqwest transport** for production use on a tokio runtime
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models ([`FeedItem`]) |
//! | [`error`] | Load and validation errors |
//! | [`feed_items_mapper`] | Status and JSON envelope validation |
//! | [`feed_loader`] | Feed loading capability trait |
//! | [`http_client`] | HTTP transport abstraction and reqwest implementation |
//! | [`remote_feed_loader`] | HTTP-backed [`FeedLoader`] |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use feedkit_core::{RemoteFeedLoader, ReqwestHttpClient};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ReqwestHttpClient::new(tokio::runtime::Handle::current()));
//!     let loader = RemoteFeedLoader::new(Url::parse("https://feed.example.test/items")?, client);
//!
//!     if let Some(Ok(items)) = loader.load_async().await {
//!         for item in &items {
//!             println!("{}", item.title());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Caller          │
//! └────────┬─────────┘
//!          │ load(completion)
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ RemoteFeedLoader │────▶│ HttpClient       │
//! │ (liveness guard) │◀────│ (reqwest/fake)   │
//! └────────┬─────────┘     └──────────────────┘
//!          │ (body, status)
//!          ▼
//! ┌──────────────────┐
//! │ FeedItemsMapper  │
//! └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every outcome reaches the caller through the completion:
//!
//! ```rust
//! use feedkit_core::{LoadError, LoadFeedResult};
//!
//! fn handle(result: LoadFeedResult) {
//!     match result {
//!         Ok(items) => println!("{} items", items.len()),
//!         Err(LoadError::Connectivity) => {
//!             // Network failure; the caller may retry
//!         }
//!         Err(LoadError::InvalidData) => {
//!             // Non-200 status or malformed body
//!         }
//!     }
//! }
//! ```

pub mod domain;
pub mod error;
pub mod feed_items_mapper;
pub mod feed_loader;
pub mod http_client;
pub mod remote_feed_loader;

// Domain models
pub use domain::FeedItem;

// Error types
pub use error::{LoadError, ValidationError};

// Loader contract
pub use feed_loader::{FeedLoader, FeedLoaderCompletion, LoadFeedResult};

// HTTP client types
pub use http_client::{
    HttpClient, HttpClientCompletion, HttpClientConfig, HttpClientResult, HttpError,
    HttpResponse, ReqwestHttpClient,
};

// Remote loader
pub use remote_feed_loader::RemoteFeedLoader;
