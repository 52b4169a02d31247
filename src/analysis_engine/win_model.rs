//! Win probability = hand-strength prior blended with fold equity.
//!
//! The prior alone understates how often a hand takes the pot, because
//! opponents fold to pressure. The fold term is a logistic over the
//! player's profile and the visible betting, without simulating opponents.

use crate::analysis_engine::models::{ActionLog, HandCategory, StrategyPoint};

pub const MIN_PROBABILITY: f64 = 0.03;
pub const MAX_PROBABILITY: f64 = 0.98;

const W_BIAS: f64 = -0.8;
const W_AGGRESSIVENESS: f64 = 1.4;
const W_RISK: f64 = 0.8;
const W_AGGRESSIVE_ACTIONS: f64 = 0.5;
const W_OPPONENTS: f64 = 0.55;
const W_STREET: f64 = 0.35;

/// Calibrated showdown win rate per category, monotonic in the ordinal.
pub fn category_prior(category: HandCategory) -> f64 {
    match category {
        HandCategory::HighCard      => 0.22,
        HandCategory::Pair          => 0.40,
        HandCategory::TwoPair       => 0.50,
        HandCategory::Trips         => 0.60,
        HandCategory::Straight      => 0.70,
        HandCategory::Flush         => 0.75,
        HandCategory::FullHouse     => 0.85,
        HandCategory::FourOfAKind   => 0.90,
        HandCategory::StraightFlush => 0.95,
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Chance the table folds. Rises with aggression, risk and visible raises;
/// falls with more live opponents and later streets.
pub fn fold_probability(strategy: &StrategyPoint, log: &ActionLog, opponents: u32) -> f64 {
    let x = W_BIAS
        + W_AGGRESSIVENESS * strategy.aggressiveness
        + W_RISK * strategy.risk
        + W_AGGRESSIVE_ACTIONS * log.aggressive_count() as f64
        - W_OPPONENTS * opponents.max(1) as f64
        - W_STREET * log.latest_street_index() as f64;
    logistic(x)
}

/// Clamped to [`MIN_PROBABILITY`, `MAX_PROBABILITY`].
pub fn win_probability(
    category: HandCategory,
    log: &ActionLog,
    opponents: u32,
    strategy: &StrategyPoint,
) -> f64 {
    let prior = category_prior(category);
    let fold = fold_probability(strategy, log, opponents);
    let p = prior + (1.0 - prior) * fold;
    p.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}
