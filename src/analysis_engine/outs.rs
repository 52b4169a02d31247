use crate::analysis_engine::{
    deck::Deck,
    evaluator::categorize,
    models::{Card, OutsResult},
};

/// Remaining cards that lift hero + board into a strictly higher category.
///
/// Only defined on the flop (3 board cards) and turn (4); any other board
/// yields an empty result.
pub fn calculate_outs(hero: &[Card; 2], board: &[Card]) -> OutsResult {
    if !matches!(board.len(), 3 | 4) {
        return OutsResult::default();
    }

    let mut known: Vec<Card> = hero.to_vec();
    known.extend_from_slice(board);
    let baseline = categorize(&known);

    let mut hand = known.clone();
    hand.push(known[0]);
    let slot = hand.len() - 1;

    let outs = Deck::remaining(&known)
        .cards()
        .iter()
        .copied()
        .filter(|&card| {
            hand[slot] = card;
            categorize(&hand) > baseline
        })
        .collect();
    OutsResult::from_cards(outs)
}
