use serde::Serialize;
use url::Url;

use crate::ValidationError;

/// A single entry of a remote feed.
///
/// Instances only exist with a non-empty title and an absolute image URL;
/// `Url` cannot hold a relative reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedItem {
    title: String,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl FeedItem {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Self {
            title,
            description,
            location,
            image_url,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}
