use thiserror::Error;

/// Domain failure kinds delivered through a feed load completion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadError {
    /// The transport could not complete the exchange.
    #[error("could not reach the feed endpoint")]
    Connectivity,
    /// The exchange completed but the response failed status or decode validation.
    #[error("feed response failed validation")]
    InvalidData,
}

/// Invariant violations raised while constructing domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feed item title cannot be empty")]
    EmptyTitle,
}
