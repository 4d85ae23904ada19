use thiserror::Error;

pub type TrendResult<T> = Result<T, TrendError>;

/// Failure taxonomy of the fetch and orchestration layers.
///
/// The aligners themselves are total: absent or null numeric fields are
/// legitimate "no data" values and render as gaps, never as errors.
/// Likewise, an entity with no directory entry degrades to a blank display
/// name rather than failing.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("no published dataset for entity `{entity_id}`")]
    EntityNotFound { entity_id: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl TrendError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound { .. })
    }
}
