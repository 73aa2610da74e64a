//! Error types.
//!
//! Only structural problems are errors. Missing overrides, patterns,
//! templates or synergies are normal outcomes and resolve through the next
//! fallback tier without ever reaching these types.

use thiserror::Error;

use crate::cards::CardId;

/// Result alias for engine-level operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while loading data or starting a reading.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("card {0} is already registered")]
    DuplicateCard(CardId),

    #[error("layout {0} is already registered")]
    DuplicateLayout(String),

    #[error("invalid reading: {0}")]
    InvalidReading(#[from] ReadingError),

    #[error("failed to parse {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode interpretation: {0}")]
    Encoding(#[from] bincode::Error),
}

impl EngineError {
    pub(crate) fn json(what: &'static str, source: serde_json::Error) -> Self {
        Self::Json { what, source }
    }
}

/// Assembly-time validation failures for a draw against its layout.
///
/// The interpretation engine itself never raises these; it degrades the
/// affected position instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error("position {position} is outside layout {layout} (size {size})")]
    PositionOutOfRange {
        layout: String,
        position: usize,
        size: usize,
    },

    #[error("position {0} was drawn more than once")]
    DuplicatePosition(usize),

    #[error("position {0} has no card")]
    MissingPosition(usize),

    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("card {0} was drawn more than once")]
    DuplicateCard(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_error_display() {
        let err = ReadingError::PositionOutOfRange {
            layout: "one_card".into(),
            position: 3,
            size: 1,
        };
        assert_eq!(
            err.to_string(),
            "position 3 is outside layout one_card (size 1)"
        );
    }

    #[test]
    fn test_reading_error_converts() {
        let err: EngineError = ReadingError::MissingPosition(2).into();
        assert!(matches!(err, EngineError::InvalidReading(_)));
        assert!(err.to_string().contains("position 2 has no card"));
    }
}
