//! Error type shared by every analysis operation.

use std::path::PathBuf;

use crate::analysis_engine::models::Card;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced by the analysis core and its boundary glue.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("hero hand needs exactly 2 distinct cards, got {found}")]
    InvalidHeroHand { found: usize },

    #[error("invalid card token: {0:?}")]
    InvalidCard(String),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("unsupported board size {found}; expected 0, 3, 4 or 5 cards")]
    InvalidBoard { found: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("requested {requested} cards but only {available} remain in the deck")]
    InsufficientCards { requested: usize, available: usize },

    #[error("no dataset found at {}", .0.display())]
    DataUnavailable(PathBuf),

    #[error("failed to persist records: {0}")]
    Persistence(String),
}

impl AnalysisError {
    /// True for every variant caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidHeroHand { .. }
                | AnalysisError::InvalidCard(_)
                | AnalysisError::DuplicateCard(_)
                | AnalysisError::InvalidBoard { .. }
                | AnalysisError::InvalidInput(_)
        )
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Persistence(err.to_string())
    }
}
