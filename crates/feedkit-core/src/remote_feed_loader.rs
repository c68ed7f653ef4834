//! Feed loader backed by an [`HttpClient`].
//!
//! Each call to [`RemoteFeedLoader::load`] issues exactly one GET of the
//! configured URL and forwards the outcome through the response mapper.
//! Delivery is guarded by a liveness token owned by the loader: when the
//! loader has been dropped by the time the transport completes, the caller's
//! completion is dropped without being invoked.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use feedkit_core::{RemoteFeedLoader, ReqwestHttpClient};
//!
//! let client = Arc::new(ReqwestHttpClient::new(tokio::runtime::Handle::current()));
//! let loader = RemoteFeedLoader::new(url, client);
//! loader.load(|result| match result {
//!     Ok(items) => println!("{} items", items.len()),
//!     Err(error) => eprintln!("load failed: {error}"),
//! });
//! ```

use std::future::Future;
use std::sync::{Arc, Weak};

use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

use crate::feed_items_mapper;
use crate::feed_loader::{FeedLoader, FeedLoaderCompletion, LoadFeedResult};
use crate::http_client::{HttpClient, HttpClientResult};
use crate::LoadError;

/// Loads the feed published at a fixed URL.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    liveness: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            liveness: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue one request and deliver its result to `completion`.
    ///
    /// `completion` may run before this returns if the transport completes
    /// synchronously. It never runs once the loader has been dropped.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadFeedResult) + Send + 'static,
    {
        let liveness = Arc::downgrade(&self.liveness);
        let url = self.url.clone();
        debug!(url = %self.url, "loading remote feed");

        self.client.get(
            &self.url,
            Box::new(move |outcome| deliver(&liveness, &url, outcome, completion)),
        );
    }

    /// Issue one request and discard its result.
    pub fn load_and_forget(&self) {
        self.load(|_| {});
    }

    /// Issue one request and await its result.
    ///
    /// Resolves to `None` when delivery was suppressed because the loader
    /// was dropped first. The returned future does not borrow the loader.
    pub fn load_async(&self) -> impl Future<Output = Option<LoadFeedResult>> + Send + 'static {
        let (sender, receiver) = oneshot::channel();
        self.load(move |result| {
            let _ = sender.send(result);
        });

        async move { receiver.await.ok() }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedLoaderCompletion) {
        RemoteFeedLoader::load(self, completion);
    }
}

impl std::fmt::Debug for RemoteFeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

fn deliver<F>(liveness: &Weak<()>, url: &Url, outcome: HttpClientResult, completion: F)
where
    F: FnOnce(LoadFeedResult),
{
    let result = match outcome {
        Ok(response) => feed_items_mapper::map(&response.body, response.status),
        Err(error) => {
            warn!(url = %url, error = %error, "feed transport failed");
            Err(LoadError::Connectivity)
        }
    };

    // The token stays upgraded until the completion returns.
    let Some(_alive) = liveness.upgrade() else {
        debug!(url = %url, "loader dropped before completion; discarding result");
        return;
    };

    match &result {
        Ok(items) => debug!(url = %url, items = items.len(), "feed loaded"),
        Err(error) => debug!(url = %url, error = %error, "feed load failed"),
    }
    completion(result);
}
