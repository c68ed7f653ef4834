//! Maps a raw HTTP exchange onto a [`LoadFeedResult`].
//!
//! Wire format:
//!
//! ```json
//! {
//!   "items": [
//!     { "title": "...", "description": "...", "location": "...", "image": "https://..." }
//!   ]
//! }
//! ```
//!
//! `description` and `location` may be missing or `null`. Unknown fields are
//! ignored.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::feed_loader::LoadFeedResult;
use crate::{FeedItem, LoadError, ValidationError};

/// The only status accepted as success. Other 2xx codes are rejected too.
pub const OK_200: u16 = 200;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    title: String,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl RemoteFeedItem {
    fn into_feed_item(self) -> Result<FeedItem, ValidationError> {
        FeedItem::new(self.title, self.description, self.location, self.image)
    }
}

#[derive(Debug, Error)]
enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Turn a response body and status code into a feed or a domain error.
pub fn map(body: &[u8], status: u16) -> LoadFeedResult {
    if status != OK_200 {
        debug!(status, "rejecting feed response with non-200 status");
        return Err(LoadError::InvalidData);
    }

    decode_items(body).map_err(|error| {
        debug!(%error, "rejecting undecodable feed response");
        LoadError::InvalidData
    })
}

// Envelope and items are read as JSON objects first: serde's derived
// structs would otherwise also accept positional arrays.
fn decode_items(body: &[u8]) -> Result<Vec<FeedItem>, DecodeError> {
    let envelope: Map<String, Value> = serde_json::from_slice(body)?;
    let root = Root::deserialize(Value::Object(envelope))?;

    root.items
        .into_iter()
        .map(|item| -> Result<FeedItem, DecodeError> {
            let remote = RemoteFeedItem::deserialize(Value::Object(item))?;
            remote.into_feed_item().map_err(DecodeError::from)
        })
        .collect()
}
