use rand::{rngs::StdRng, SeedableRng};

use crate::analysis_engine::{
    config::AnalyzerConfig,
    equity::estimate_equity,
    error::{AnalysisError, Result},
    evaluator::categorize,
    helpers::{hero_hand, street_recommendation, validate_hand},
    models::{
        Action, ActionLog, BettingRound, HandAnalysis, SingleHandAnalysis, SingleHandRequest,
        StrategyPoint, Street, StreetRequest, SynthesisRequest, SynthesisStatus,
    },
    outs::calculate_outs,
    progression::analyze_streets,
    store::RecordSink,
    synthesizer::synthesize_records,
    win_model::win_probability,
};

/// Seeded when the request carries a seed, otherwise from entropy.
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Log used when only the cards are known: a passive preflop.
fn neutral_log() -> ActionLog {
    ActionLog::new(vec![BettingRound {
        street: Street::Preflop,
        actions: vec![Action::Check, Action::Call],
        pot: 0,
    }])
}

/// Category, equity and outs at whatever board stage the request gives,
/// plus the win-probability model under a neutral strategy.
pub fn analyze_single_hand(request: &SingleHandRequest, config: &AnalyzerConfig) -> Result<SingleHandAnalysis> {
    let hero = hero_hand(&request.hero_hand)?;
    let board = &request.board;
    validate_hand(&hero, board)?;
    let street = Street::from_board_len(board.len())
        .ok_or(AnalysisError::InvalidBoard { found: board.len() })?;

    let mut rng = request_rng(request.rng_seed);
    let mut cards = hero.to_vec();
    cards.extend_from_slice(board);
    let category = categorize(&cards);
    let equity = estimate_equity(&hero, board, config.effective_equity_trials(), &mut rng)?;
    let outs = matches!(street, Street::Flop | Street::Turn).then(|| calculate_outs(&hero, board));

    let opponents = request.opponents.unwrap_or_else(|| config.effective_default_opponents());
    let win = win_probability(category, &neutral_log(), opponents, &StrategyPoint::neutral());

    Ok(SingleHandAnalysis {
        hero_hand: hero,
        board: board.clone(),
        street,
        category,
        recommendation: street_recommendation(equity.probability).to_string(),
        equity,
        outs,
        win_probability: win,
        loss_probability: 1.0 - win,
    })
}

/// Full four-street walk for a hero hand.
pub fn analyze_street_by_street(request: &StreetRequest, config: &AnalyzerConfig) -> Result<HandAnalysis> {
    let mut rng = request_rng(request.rng_seed);
    analyze_streets(&request.hero_hand, request.position, config.effective_equity_trials(), &mut rng)
}

/// Generate `num_hands` records and hand them to `sink` in one write.
/// A failed write is returned as-is and nothing is retried.
pub fn synthesize_dataset(request: &SynthesisRequest, sink: &mut impl RecordSink) -> Result<SynthesisStatus> {
    if request.user_id.trim().is_empty() {
        return Err(AnalysisError::InvalidInput("user id must not be empty".into()));
    }
    let mut rng = request_rng(request.rng_seed);
    let records = synthesize_records(&mut rng, request.num_hands, &request.user_id)?;
    sink.write_records(&records)?;
    log::info!("dataset generated with {} hands for {}", records.len(), request.user_id);
    Ok(SynthesisStatus { status: "ok".to_string(), count: records.len() })
}
