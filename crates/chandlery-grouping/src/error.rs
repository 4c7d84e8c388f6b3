use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupingError {
    #[error("listing {listing_id:?} has an empty title")]
    EmptyTitle { listing_id: String },

    #[error("invalid catalog query: {reason}")]
    InvalidQuery { reason: String },
}
