//! Feed loading capability.
//!
//! Callers depend on [`FeedLoader`] rather than on a concrete loader, so a
//! remote loader, a fake or any future source are interchangeable.

use crate::{FeedItem, LoadError};

/// Outcome of one load: the full validated feed or a failure kind, never both.
pub type LoadFeedResult = Result<Vec<FeedItem>, LoadError>;

/// Completion receiving the outcome of a single load.
pub type FeedLoaderCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

pub trait FeedLoader {
    /// Start one load. `completion` is invoked at most once.
    fn load(&self, completion: FeedLoaderCompletion);
}
