//! Shared validation, formatting and wording helpers.
//!
//! Every entry point validates its cards here before any evaluator,
//! estimator or model code runs, so the core can assume well-formed input.

use crate::analysis_engine::{
    error::{AnalysisError, Result},
    models::Card,
};

/// Turn a loose card list into a hero hand. Anything other than two
/// distinct cards is rejected.
pub fn hero_hand(cards: &[Card]) -> Result<[Card; 2]> {
    match cards {
        [a, b] if a != b => Ok([*a, *b]),
        [a, _] => Err(AnalysisError::DuplicateCard(*a)),
        _ => Err(AnalysisError::InvalidHeroHand { found: cards.len() }),
    }
}

/// Board must be empty or hold 3, 4 or 5 cards, and nothing may repeat
/// across hero + board.
pub fn validate_hand(hero: &[Card; 2], board: &[Card]) -> Result<()> {
    if !matches!(board.len(), 0 | 3 | 4 | 5) {
        return Err(AnalysisError::InvalidBoard { found: board.len() });
    }
    let mut seen: Vec<Card> = Vec::with_capacity(7);
    for &card in hero.iter().chain(board) {
        if seen.contains(&card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
        seen.push(card);
    }
    Ok(())
}

/// Format hero hand as string (e.g. "AcKs").
pub fn hand_str(hand: &[Card; 2]) -> String {
    format!("{}{}", hand[0], hand[1])
}

/// Format board as space-separated string (e.g. "Ac Ks 7h").
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Equity bands shared by per-street advice, the overall narrative and the
/// final river call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquityBand {
    Dominant,
    Ahead,
    Contested,
    Behind,
    Crushed,
}

impl EquityBand {
    pub fn from_equity(equity: f64) -> Self {
        if equity > 0.70 {
            EquityBand::Dominant
        } else if equity > 0.55 {
            EquityBand::Ahead
        } else if equity > 0.40 {
            EquityBand::Contested
        } else if equity > 0.25 {
            EquityBand::Behind
        } else {
            EquityBand::Crushed
        }
    }
}

pub fn street_recommendation(equity: f64) -> &'static str {
    match EquityBand::from_equity(equity) {
        EquityBand::Dominant  => "bet/raise aggressively",
        EquityBand::Ahead     => "apply pressure",
        EquityBand::Contested => "play cautiously",
        EquityBand::Behind    => "avoid large pots",
        EquityBand::Crushed   => "fold-leaning",
    }
}

pub fn overall_narrative(mean_equity: f64) -> &'static str {
    match EquityBand::from_equity(mean_equity) {
        EquityBand::Dominant  => "strong hand throughout",
        EquityBand::Ahead     => "favourable hand overall",
        EquityBand::Contested => "marginal hand",
        EquityBand::Behind    => "weak hand overall",
        EquityBand::Crushed   => "very weak hand",
    }
}

pub fn final_recommendation(river_equity: f64) -> &'static str {
    match EquityBand::from_equity(river_equity) {
        EquityBand::Dominant  => "bet for value on the river",
        EquityBand::Ahead     => "bet thin or call down",
        EquityBand::Contested => "check and call small bets",
        EquityBand::Behind    => "check and fold to pressure",
        EquityBand::Crushed   => "give up the pot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_engine::models::parse_cards;

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(street_recommendation(0.71), "bet/raise aggressively");
        assert_eq!(street_recommendation(0.70), "apply pressure");
        assert_eq!(street_recommendation(0.55), "play cautiously");
        assert_eq!(street_recommendation(0.40), "avoid large pots");
        assert_eq!(street_recommendation(0.25), "fold-leaning");
        assert_eq!(street_recommendation(0.0), "fold-leaning");
    }

    #[test]
    fn hero_hand_rejects_short_long_and_paired_input() {
        let one = parse_cards("As").unwrap();
        assert!(matches!(hero_hand(&one), Err(AnalysisError::InvalidHeroHand { found: 1 })));
        let three = parse_cards("As Kd 2c").unwrap();
        assert!(matches!(hero_hand(&three), Err(AnalysisError::InvalidHeroHand { found: 3 })));
        let same = parse_cards("As As").unwrap();
        assert!(matches!(hero_hand(&same), Err(AnalysisError::DuplicateCard(_))));
        let ok = parse_cards("As Kd").unwrap();
        assert_eq!(hand_str(&hero_hand(&ok).unwrap()), "AsKd");
    }
}
