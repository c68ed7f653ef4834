//! # Domain Models
//!
//! Value types produced by a successful feed load.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FeedItem`] | One feed entry: title, optional description/location, image URL |
//!
//! ## Validation
//!
//! [`FeedItem::new`] rejects an empty title, and the image URL is a parsed
//! absolute [`url::Url`], so a malformed item cannot be represented:
//!
//! ```rust
//! use feedkit_core::{FeedItem, ValidationError};
//! use url::Url;
//!
//! let image = Url::parse("https://cdn.example.test/a.png").unwrap();
//! let invalid = FeedItem::new("", None, None, image);
//! assert!(matches!(invalid, Err(ValidationError::EmptyTitle)));
//! ```

mod feed_item;

pub use feed_item::FeedItem;
