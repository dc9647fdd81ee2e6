use thiserror::Error;

/// Errors raised while ranking, unranking or describing deals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    /// Wrong group size, out-of-range or repeated card, unsupported deal length.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Card labels that don't name a card of the deck in use.
    #[error("Bad card{} given: {}", if .0.len() == 1 { "" } else { "s" }, .0.join(", "))]
    AmbiguousInput(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DealError>;

pub(crate) fn invalid(message: impl Into<String>) -> DealError {
    DealError::InvalidArgument(message.into())
}
