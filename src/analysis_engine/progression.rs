//! Preflop → Flop → Turn → River walk over one fixed runout.
//!
//! The five board cards are drawn once when the hand starts, so every later
//! street extends the board seen on the earlier ones.

use rand::Rng;

use crate::analysis_engine::{
    deck::Deck,
    equity::estimate_equity,
    error::Result,
    evaluator::categorize,
    helpers::{board_str, final_recommendation, hand_str, hero_hand, overall_narrative, street_recommendation},
    models::{Card, HandAnalysis, Position, Street, StreetReport},
    outs::calculate_outs,
};

/// One hand moving through the four streets. `advance` is the only way to
/// move forward and it stops at the river.
pub struct StreetProgression {
    hero: [Card; 2],
    runout: [Card; 5],
    street: Option<Street>,
}

impl StreetProgression {
    /// Validate the hero hand and fix the runout for the whole hand.
    pub fn start<R: Rng>(hero: &[Card], rng: &mut R) -> Result<Self> {
        let hero = hero_hand(hero)?;
        let drawn = Deck::remaining(&hero).sample(rng, 5)?;
        let mut runout = [hero[0]; 5];
        runout.copy_from_slice(&drawn);
        Ok(StreetProgression { hero, runout, street: None })
    }

    pub fn hero(&self) -> [Card; 2] {
        self.hero
    }

    pub fn runout(&self) -> [Card; 5] {
        self.runout
    }

    /// Board visible on `street`.
    pub fn board_at(&self, street: Street) -> &[Card] {
        &self.runout[..street.board_len()]
    }

    /// Move to the next street and report on it. Returns `None` once the
    /// river has been reported.
    pub fn advance<R: Rng>(&mut self, trials: u32, rng: &mut R) -> Option<Result<StreetReport>> {
        let next = match self.street {
            None => Street::Preflop,
            Some(current) => current.next()?,
        };
        self.street = Some(next);
        Some(self.report(next, trials, rng))
    }

    fn report<R: Rng>(&self, street: Street, trials: u32, rng: &mut R) -> Result<StreetReport> {
        let board = self.board_at(street);
        let mut cards = self.hero.to_vec();
        cards.extend_from_slice(board);

        let category = categorize(&cards);
        let equity = estimate_equity(&self.hero, board, trials, rng)?.probability;
        let outs = matches!(street, Street::Flop | Street::Turn)
            .then(|| calculate_outs(&self.hero, board));

        log::debug!(
            "{street}: {} on [{}] -> {category}, equity {equity:.3}",
            hand_str(&self.hero),
            board_str(board)
        );

        Ok(StreetReport {
            street,
            board: board.to_vec(),
            category,
            equity,
            outs,
            recommendation: street_recommendation(equity).to_string(),
        })
    }
}

/// Run all four streets and summarise them.
pub fn analyze_streets<R: Rng>(
    hero: &[Card],
    position: Position,
    trials: u32,
    rng: &mut R,
) -> Result<HandAnalysis> {
    let mut progression = StreetProgression::start(hero, rng)?;
    let mut streets = Vec::with_capacity(Street::ALL.len());
    while let Some(report) = progression.advance(trials, rng) {
        streets.push(report?);
    }

    let equity_trajectory: Vec<f64> = streets.iter().map(|r| r.equity).collect();
    let mean_equity = equity_trajectory.iter().sum::<f64>() / equity_trajectory.len() as f64;
    let river_equity = equity_trajectory.last().copied().unwrap_or(mean_equity);
    let seat = if position.is_late() { "in position" } else { "out of position" };

    Ok(HandAnalysis {
        hero_hand: progression.hero(),
        position,
        streets,
        equity_trajectory,
        mean_equity,
        narrative: format!(
            "{} from {position} ({seat}), average equity {:.0}%",
            overall_narrative(mean_equity),
            mean_equity * 100.0
        ),
        final_recommendation: final_recommendation(river_equity).to_string(),
    })
}
