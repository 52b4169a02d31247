//! Crate-level tests for `poker_hand_lab`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical analyses and datasets; different seeds → varied runouts |
//! | Single hand | Every board stage; outs only on flop/turn; model probability bounds |
//! | Street by street | Seven unique cards; recommendations drawn from the band wording |
//! | Validation | Short, duplicated and malformed input rejected before the core runs |
//! | Synthesis | Record count, sink contents, empty user rejected, failing sink surfaces |

use std::collections::HashSet;

use crate::analysis_engine::{
    analyze_single_hand, analyze_street_by_street, parse_cards, synthesize_dataset, AnalysisError,
    AnalyzerConfig, Card, MemoryStore, Position, RecordSink, SingleHandRequest, Street,
    StreetRequest, SynthesisRequest, SyntheticHandRecord,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Small trial count keeps the suite fast; accuracy is covered in `equity`.
fn config() -> AnalyzerConfig {
    AnalyzerConfig { equity_trials: Some(300), ..Default::default() }
}

fn single(hero: &str, board: &str, seed: u64) -> SingleHandRequest {
    SingleHandRequest {
        hero_hand: parse_cards(hero).unwrap(),
        board: parse_cards(board).unwrap(),
        opponents: None,
        rng_seed: Some(seed),
    }
}

fn streets(hero: &str, seed: u64) -> StreetRequest {
    StreetRequest {
        hero_hand: parse_cards(hero).unwrap(),
        position: Position::BTN,
        rng_seed: Some(seed),
    }
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

const STREET_ADVICE: [&str; 5] = [
    "bet/raise aggressively",
    "apply pressure",
    "play cautiously",
    "avoid large pots",
    "fold-leaning",
];

struct FailingSink;

impl RecordSink for FailingSink {
    fn write_records(&mut self, _: &[SyntheticHandRecord]) -> crate::Result<()> {
        Err(AnalysisError::Persistence("disk full".into()))
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_street_analysis() {
    for seed in SEEDS {
        let a = analyze_street_by_street(&streets("Ac Qd", seed), &config()).unwrap();
        let b = analyze_street_by_street(&streets("Ac Qd", seed), &config()).unwrap();
        assert_eq!(a.equity_trajectory, b.equity_trajectory, "seed {seed}");
        assert_eq!(a.narrative, b.narrative, "seed {seed}");
        for (x, y) in a.streets.iter().zip(&b.streets) {
            assert_eq!(x.board, y.board, "seed {seed}");
            assert_eq!(x.outs, y.outs, "seed {seed}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_runouts() {
    let mut boards = HashSet::new();
    for seed in 0..20 {
        let a = analyze_street_by_street(&streets("8s 8c", seed), &config()).unwrap();
        boards.insert(a.streets[3].board.clone());
    }
    assert!(boards.len() > 15, "only {} distinct runouts", boards.len());
}

#[test]
fn same_seed_produces_identical_dataset() {
    let request = SynthesisRequest { num_hands: 30, user_id: "Player_5".into(), rng_seed: Some(3) };
    let (mut a, mut b) = (MemoryStore::default(), MemoryStore::default());
    synthesize_dataset(&request, &mut a).unwrap();
    synthesize_dataset(&request, &mut b).unwrap();
    for (x, y) in a.records.iter().zip(&b.records) {
        assert_eq!(x.hero_hand, y.hero_hand);
        assert_eq!(x.board, y.board);
        assert_eq!(x.result, y.result);
        assert_eq!(x.net, y.net);
    }
}

// ── single hand ──────────────────────────────────────────────────────────────

#[test]
fn single_hand_covers_every_board_stage() {
    let cases = [
        ("", Street::Preflop, false),
        ("2c 7d Jh", Street::Flop, true),
        ("2c 7d Jh Qs", Street::Turn, true),
        ("2c 7d Jh Qs 3h", Street::River, false),
    ];
    for (board, street, has_outs) in cases {
        let a = analyze_single_hand(&single("Ah Kh", board, 9), &config()).unwrap();
        assert_eq!(a.street, street);
        assert_eq!(a.outs.is_some(), has_outs, "board {board:?}");
        assert!((0.0..=1.0).contains(&a.equity.probability));
        assert!((0.03..=0.98).contains(&a.win_probability));
        assert!((a.win_probability + a.loss_probability - 1.0).abs() < 1e-12);
        assert!(STREET_ADVICE.contains(&a.recommendation.as_str()));
    }
}

#[test]
fn more_opponents_lower_single_hand_win_probability() {
    let mut heads_up = single("Qs Qd", "", 1);
    heads_up.opponents = Some(1);
    let mut crowded = single("Qs Qd", "", 1);
    crowded.opponents = Some(8);
    let a = analyze_single_hand(&heads_up, &config()).unwrap();
    let b = analyze_single_hand(&crowded, &config()).unwrap();
    assert!(a.win_probability > b.win_probability);
}

// ── street by street ─────────────────────────────────────────────────────────

#[test]
fn street_walk_reveals_seven_unique_cards() {
    for seed in SEEDS {
        let a = analyze_street_by_street(&streets("Jc Tc", seed), &config()).unwrap();
        let river = &a.streets[3].board;
        let cards: HashSet<Card> = a.hero_hand.iter().chain(river.iter()).copied().collect();
        assert_eq!(cards.len(), 7, "seed {seed}");
        for report in &a.streets {
            assert!(STREET_ADVICE.contains(&report.recommendation.as_str()));
        }
        let mean = a.equity_trajectory.iter().sum::<f64>() / 4.0;
        assert!((a.mean_equity - mean).abs() < 1e-12);
    }
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn invalid_hands_are_rejected_before_analysis() {
    let short = analyze_street_by_street(&streets("Ah", 1), &config()).unwrap_err();
    assert!(matches!(short, AnalysisError::InvalidHeroHand { found: 1 }));

    let overlap = analyze_single_hand(&single("Ah Kh", "Ah 2c 3d", 1), &config()).unwrap_err();
    assert!(matches!(overlap, AnalysisError::DuplicateCard(_)));

    let board = analyze_single_hand(&single("Ah Kh", "2c", 1), &config()).unwrap_err();
    assert!(matches!(board, AnalysisError::InvalidBoard { found: 1 }));

    assert!(parse_cards("Ah Kx").unwrap_err().is_invalid_input());
}

#[test]
fn zero_trials_is_invalid_input() {
    let cfg = AnalyzerConfig { equity_trials: Some(0), ..Default::default() };
    let err = analyze_single_hand(&single("Ah Kh", "", 1), &cfg).unwrap_err();
    assert!(err.is_invalid_input());
}

// ── synthesis ────────────────────────────────────────────────────────────────

#[test]
fn synthesis_writes_exactly_the_requested_records() {
    let mut sink = MemoryStore::default();
    let request = SynthesisRequest { num_hands: 100, user_id: "Player_1".into(), rng_seed: Some(42) };
    let status = synthesize_dataset(&request, &mut sink).unwrap();
    assert_eq!(status.status, "ok");
    assert_eq!(status.count, 100);
    assert_eq!(sink.records.len(), 100);
    assert!(sink.records.iter().all(|r| r.user_id == "Player_1"));
}

#[test]
fn empty_user_is_rejected() {
    let mut sink = MemoryStore::default();
    let request = SynthesisRequest { num_hands: 5, user_id: "  ".into(), rng_seed: Some(1) };
    assert!(synthesize_dataset(&request, &mut sink).unwrap_err().is_invalid_input());
    assert!(sink.records.is_empty());
}

#[test]
fn failing_sink_is_a_hard_error() {
    let request = SynthesisRequest { num_hands: 5, user_id: "Player_1".into(), rng_seed: Some(1) };
    let err = synthesize_dataset(&request, &mut FailingSink).unwrap_err();
    assert!(matches!(err, AnalysisError::Persistence(_)));
}
