use rand::Rng;
use crate::analysis_engine::{
    error::{AnalysisError, Result},
    models::{Card, Rank, Suit},
};

/// The cards still available for dealing: the 52-card deck minus whatever
/// is already known.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in a fixed order.
    pub fn full() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (2u8..=14).map(move |r| Card { rank: Rank(r), suit }))
            .collect();
        Deck { cards }
    }

    /// The full deck minus `excluded`.
    pub fn remaining(excluded: &[Card]) -> Self {
        let mut deck = Self::full();
        deck.cards.retain(|c| !excluded.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw `n` distinct cards uniformly at random.
    ///
    /// Runs a partial Fisher-Yates over the first `n` slots, so repeated
    /// calls on the same deck stay uniform without resetting the order.
    pub fn sample<R: Rng>(&mut self, rng: &mut R, n: usize) -> Result<Vec<Card>> {
        let available = self.cards.len();
        if n > available {
            return Err(AnalysisError::InsufficientCards { requested: n, available });
        }
        for i in 0..n {
            let j = rng.gen_range(i..available);
            self.cards.swap(i, j);
        }
        Ok(self.cards[..n].to_vec())
    }
}
