//! # poker_hand_lab
//!
//! A small, deterministic poker hand-analysis core.
//!
//! The library ranks cards into one of nine hand categories, estimates
//! equity by Monte Carlo sampling, counts outs, blends hand strength with a
//! fold-equity heuristic, and walks a hand through all four streets. The
//! same primitives generate synthetic hand datasets in bulk.
//!
//! ## How it works
//!
//! 1. Build a request: [`SingleHandRequest`], [`StreetRequest`] or
//!    [`SynthesisRequest`], directly or from JSON via [`json_adapter`].
//! 2. Call the matching entry point. Each one validates the cards first,
//!    then builds its random source from the request's `rng_seed`.
//! 3. The result is a plain value ([`SingleHandAnalysis`], [`HandAnalysis`])
//!    or, for synthesis, a batch of records written to a [`RecordSink`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   equity estimates, runouts and datasets.
//! - **One evaluator**: every caller (analysis, outs, equity, synthesis)
//!   shares the same category precedence table.
//! - **No hidden state**: randomness, configuration and storage are all
//!   passed in.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_hand_lab::{
//!     analyze_street_by_street, parse_cards, AnalyzerConfig, Position, StreetRequest,
//! };
//!
//! let config = AnalyzerConfig { equity_trials: Some(500), ..Default::default() };
//! let analysis = analyze_street_by_street(
//!     &StreetRequest {
//!         hero_hand: parse_cards("As Kd").unwrap(),
//!         position: Position::BTN,
//!         rng_seed: Some(42),
//!     },
//!     &config,
//! )
//! .unwrap();
//!
//! for street in &analysis.streets {
//!     println!("{}: {} ({:.0}%): {}",
//!         street.street, street.category, street.equity * 100.0, street.recommendation);
//! }
//! println!("{}", analysis.final_recommendation);
//! ```

pub mod analysis_engine;
pub mod json_adapter;

// Convenience re-exports so callers can use `poker_hand_lab::analyze_single_hand`
// directly without reaching into `analysis_engine::`.
pub use analysis_engine::{
    analyze_single_hand, analyze_street_by_street, parse_cards, synthesize_dataset, Action,
    ActionLog, AnalysisError, AnalyzerConfig, Card, DatasetSummary, HandAnalysis, HandCategory,
    JsonFileStore, MemoryStore, Position, RecordSink, Result, SingleHandAnalysis,
    SingleHandRequest, StrategyPoint, Street, StreetRequest, SynthesisRequest, SynthesisStatus,
    SyntheticHandRecord,
};

#[cfg(test)]
mod tests;
