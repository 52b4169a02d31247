//! Monte Carlo equity against one random opponent hand.
//!
//! A single representative opponent stands in for the whole table: this is
//! a heads-up proxy, not an N-way simulation.

use rand::Rng;

use crate::analysis_engine::{
    deck::Deck,
    error::{AnalysisError, Result},
    evaluator::evaluate,
    helpers::validate_hand,
    models::{Card, EquityResult},
};

/// Estimate hero's equity given 0, 3, 4 or 5 known board cards.
///
/// Each trial draws two opponent cards and the missing board cards from the
/// remaining deck, then compares [`HandStrength`](super::evaluator::HandStrength)
/// values. Ties count half.
pub fn estimate_equity<R: Rng>(
    hero: &[Card; 2],
    board: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<EquityResult> {
    validate_hand(hero, board)?;
    if trials == 0 {
        return Err(AnalysisError::InvalidInput("equity needs at least one trial".into()));
    }

    let missing = 5 - board.len();
    let mut known: Vec<Card> = hero.to_vec();
    known.extend_from_slice(board);
    let mut deck = Deck::remaining(&known);

    let mut hero_cards: Vec<Card> = known.clone();
    let mut villain_cards: Vec<Card> = board.to_vec();
    let (mut wins, mut ties) = (0u32, 0u32);

    for _ in 0..trials {
        let draw = deck.sample(rng, 2 + missing)?;
        let (villain, runout) = draw.split_at(2);

        hero_cards.truncate(known.len());
        hero_cards.extend_from_slice(runout);
        villain_cards.truncate(board.len());
        villain_cards.extend_from_slice(runout);
        villain_cards.extend_from_slice(villain);

        match evaluate(&hero_cards).cmp(&evaluate(&villain_cards)) {
            std::cmp::Ordering::Greater => wins += 1,
            std::cmp::Ordering::Equal   => ties += 1,
            std::cmp::Ordering::Less    => {}
        }
    }

    let probability = (wins as f64 + 0.5 * ties as f64) / trials as f64;
    Ok(EquityResult {
        wins,
        ties,
        losses: trials - wins - ties,
        trials,
        probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_engine::models::parse_cards;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hero(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn pocket_aces_preflop_near_85_percent() {
        let mut rng = StdRng::seed_from_u64(2024);
        let eq = estimate_equity(&hero("As Ah"), &[], 20_000, &mut rng).unwrap();
        assert!((eq.probability - 0.85).abs() < 0.03, "equity={}", eq.probability);
        assert_eq!(eq.wins + eq.ties + eq.losses, 20_000);
    }

    #[test]
    fn equity_is_reproducible_with_seed() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            estimate_equity(&hero("Kd Qd"), &parse_cards("2d 7d Jc").unwrap(), 500, &mut rng)
                .unwrap()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn nut_straight_flush_on_river_never_loses() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = parse_cards("Ts Js Qs 2c 3d").unwrap();
        let eq = estimate_equity(&hero("As Ks"), &board, 2_000, &mut rng).unwrap();
        assert_eq!(eq.losses, 0);
        assert!(eq.probability > 0.99);
    }

    #[test]
    fn zero_trials_and_bad_boards_are_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let h = hero("As Ks");
        assert!(matches!(
            estimate_equity(&h, &[], 0, &mut rng),
            Err(AnalysisError::InvalidInput(_))
        ));
        let two = parse_cards("2c 3c").unwrap();
        assert!(matches!(
            estimate_equity(&h, &two, 10, &mut rng),
            Err(AnalysisError::InvalidBoard { found: 2 })
        ));
        let dup = parse_cards("As 3c 4d").unwrap();
        assert!(matches!(
            estimate_equity(&h, &dup, 10, &mut rng),
            Err(AnalysisError::DuplicateCard(_))
        ));
    }
}
