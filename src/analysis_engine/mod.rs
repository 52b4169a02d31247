//! Core analysis engine: card handling, hand evaluation, equity and the
//! street-by-street walk.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: cards, categories, actions, reports, records, requests |
//! | `error`       | `AnalysisError` and the crate `Result` alias |
//! | `config`      | `AnalyzerConfig` with serde defaults |
//! | `deck`        | Remaining-deck construction and sampling without replacement |
//! | `evaluator`   | Category classification with an explicit precedence table |
//! | `outs`        | Exhaustive outs on the flop and turn |
//! | `equity`      | Monte Carlo equity against one random hand |
//! | `win_model`   | Category prior blended with a logistic fold-equity term |
//! | `progression` | Preflop → River state machine over one fixed runout |
//! | `synthesizer` | Independent synthetic hand records |
//! | `store`       | Record sinks and the dataset summary |
//! | `helpers`     | Input validation, formatting, recommendation wording |
//! | `generator`   | Entry points: single hand, street by street, dataset |

pub mod config;
pub mod deck;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod outs;
pub mod progression;
pub mod store;
pub mod synthesizer;
pub mod win_model;

// Re-export the public API surface so callers can use
// `analysis_engine::analyze_single_hand` without reaching into sub-modules.
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use generator::{analyze_single_hand, analyze_street_by_street, synthesize_dataset};
pub use models::{
    parse_cards, Action, ActionLog, BettingRound, Card, EquityResult, HandAnalysis, HandCategory,
    HandResult, OutsResult, Position, Rank, SingleHandAnalysis, SingleHandRequest, StrategyPoint,
    Street, StreetReport, StreetRequest, Suit, SynthesisRequest, SynthesisStatus,
    SyntheticHandRecord,
};
pub use store::{DatasetSummary, JsonFileStore, MemoryStore, RecordSink};
