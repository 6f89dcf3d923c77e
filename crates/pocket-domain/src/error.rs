use thiserror::Error;

/// Rejections raised while turning caller input into domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid timestamp `{value}`")]
    InvalidTimestamp { value: String },
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),
    #[error("Unknown feed order `{0}`")]
    UnknownFeedOrder(String),
}
