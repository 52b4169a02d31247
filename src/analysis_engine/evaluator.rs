//! Hand classification over the full set of supplied cards.
//!
//! Ranks and suits are counted across every card at once; there is no
//! best-five-of-seven search. The category is found by walking
//! [`PRECEDENCE`] from the strongest class down and taking the first match.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::analysis_engine::models::{Card, HandCategory};

/// Category plus the ranks that define it, comparable across hands.
///
/// Only ranks that make up the category are kept (the pair rank, the
/// straight top, the flush cards...). Side kickers never break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: HandCategory,
    pub ranks: [u8; 5],
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Rank and suit counts for a set of cards.
struct Profile<'a> {
    cards: &'a [Card],
    rank_counts: [u8; 15],
    suit_counts: [u8; 4],
}

impl<'a> Profile<'a> {
    fn new(cards: &'a [Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for c in cards {
            rank_counts[c.rank.0 as usize] += 1;
            suit_counts[c.suit.index()] += 1;
        }
        Profile { cards, rank_counts, suit_counts }
    }

    /// Ranks whose count satisfies `pred`, highest first.
    fn ranks_where(&self, pred: impl Fn(u8) -> bool) -> impl Iterator<Item = u8> {
        let counts = self.rank_counts;
        (2u8..=14).rev().filter(move |&r| pred(counts[r as usize]))
    }

    fn flush_suit(&self) -> Option<usize> {
        (0..4).rev().find(|&s| self.suit_counts[s] >= 5)
    }

    /// Top rank of the highest five-card run; the ace also plays low.
    fn straight_high(&self) -> Option<u8> {
        let present = |r: u8| {
            let r = if r == 1 { 14 } else { r };
            self.rank_counts[r as usize] > 0
        };
        (5u8..=14).rev().find(|&high| (high - 4..=high).all(present))
    }
}

fn padded(ranks: impl IntoIterator<Item = u8>) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (slot, r) in out.iter_mut().zip(ranks) {
        *slot = r;
    }
    out
}

type Detector = fn(&Profile) -> Option<[u8; 5]>;

/// Strongest first. The first detector that matches decides the category.
const PRECEDENCE: [(HandCategory, Detector); 9] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind,   four_of_a_kind),
    (HandCategory::FullHouse,     full_house),
    (HandCategory::Flush,         flush),
    (HandCategory::Straight,      straight),
    (HandCategory::Trips,         trips),
    (HandCategory::TwoPair,       two_pair),
    (HandCategory::Pair,          pair),
    (HandCategory::HighCard,      high_card),
];

// A flush and a straight anywhere in the set, not necessarily the same cards.
fn straight_flush(p: &Profile) -> Option<[u8; 5]> {
    p.flush_suit()?;
    p.straight_high().map(|h| padded([h]))
}

fn four_of_a_kind(p: &Profile) -> Option<[u8; 5]> {
    p.ranks_where(|n| n >= 4).next().map(|r| padded([r]))
}

fn full_house(p: &Profile) -> Option<[u8; 5]> {
    let set = p.ranks_where(|n| n >= 3).next()?;
    let pair = p.ranks_where(|n| n >= 2).find(|&r| r != set)?;
    Some(padded([set, pair]))
}

fn flush(p: &Profile) -> Option<[u8; 5]> {
    let suit = p.flush_suit()?;
    let mut suited: Vec<u8> = p
        .cards
        .iter()
        .filter(|c| c.suit.index() == suit)
        .map(|c| c.rank.0)
        .collect();
    suited.sort_unstable_by(|a, b| b.cmp(a));
    Some(padded(suited))
}

fn straight(p: &Profile) -> Option<[u8; 5]> {
    p.straight_high().map(|h| padded([h]))
}

fn trips(p: &Profile) -> Option<[u8; 5]> {
    p.ranks_where(|n| n == 3).next().map(|r| padded([r]))
}

fn two_pair(p: &Profile) -> Option<[u8; 5]> {
    let pairs: Vec<u8> = p.ranks_where(|n| n == 2).take(2).collect();
    (pairs.len() == 2).then(|| padded(pairs))
}

fn pair(p: &Profile) -> Option<[u8; 5]> {
    p.ranks_where(|n| n == 2).next().map(|r| padded([r]))
}

fn high_card(p: &Profile) -> Option<[u8; 5]> {
    Some(padded(p.ranks_where(|n| n > 0).take(1)))
}

/// Classify 2..=7 cards.
pub fn evaluate(cards: &[Card]) -> HandStrength {
    let profile = Profile::new(cards);
    PRECEDENCE
        .iter()
        .find_map(|&(category, detect)| detect(&profile).map(|ranks| HandStrength { category, ranks }))
        .unwrap_or(HandStrength { category: HandCategory::HighCard, ranks: [0; 5] })
}

/// Shortcut for callers that only need the class.
pub fn categorize(cards: &[Card]) -> HandCategory {
    evaluate(cards).category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_engine::models::{parse_cards, Suit};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn quads_beat_full_house() {
        let quads = evaluate(&cards("As Ah Ad Ac Ks"));
        let boat = evaluate(&cards("Ks Kh Kd Qs Qh"));
        assert_eq!(quads.category, HandCategory::FourOfAKind);
        assert_eq!(boat.category, HandCategory::FullHouse);
        assert!(quads > boat);
    }

    #[test]
    fn every_category_is_detected() {
        let cases = [
            ("9h Th Jh Qh Kh 2c 3d", HandCategory::StraightFlush),
            ("7s 7h 7d 7c 2s", HandCategory::FourOfAKind),
            ("7s 7h 7d 2c 2s", HandCategory::FullHouse),
            ("7s 7h 7d 2c 2s 2h", HandCategory::FullHouse),
            ("2h 5h 9h Jh Kh", HandCategory::Flush),
            ("5c 6d 7h 8s 9c", HandCategory::Straight),
            ("Ac 2d 3h 4s 5c", HandCategory::Straight),
            ("Qc Qd Qh 4s 9c", HandCategory::Trips),
            ("Qc Qd 4h 4s 9c", HandCategory::TwoPair),
            ("Qc Qd 4h 4s 9c 9d", HandCategory::TwoPair),
            ("Qc Qd 4h 7s 9c", HandCategory::Pair),
            ("Qc 2d 4h 7s 9c", HandCategory::HighCard),
            ("Ac Kd", HandCategory::HighCard),
            ("Ac Ad", HandCategory::Pair),
        ];
        for (hand, expected) in cases {
            assert_eq!(categorize(&cards(hand)), expected, "hand {hand}");
        }
    }

    #[test]
    fn flush_with_trips_reports_flush() {
        let hand = cards("2h 2d 2c 5h 9h Jh Kh");
        assert_eq!(categorize(&hand), HandCategory::Flush);
    }

    #[test]
    fn category_is_permutation_invariant() {
        let mut hand = cards("Ts Jd Qh Ks Ac 2s 2d");
        let expected = evaluate(&hand);
        for shift in 0..hand.len() {
            hand.rotate_left(1);
            assert_eq!(evaluate(&hand), expected, "rotation {shift}");
            hand.reverse();
            assert_eq!(evaluate(&hand), expected, "reversal {shift}");
        }
    }

    #[test]
    fn defining_ranks_order_within_a_category() {
        let aces = evaluate(&cards("Ac Ad 2h 7s 9c"));
        let kings = evaluate(&cards("Kc Kd Ah 7s 9c"));
        assert!(aces > kings);

        let wheel = evaluate(&cards("Ac 2d 3h 4s 5c"));
        let six_high = evaluate(&cards("2d 3h 4s 5c 6d"));
        assert!(six_high > wheel);
    }

    #[test]
    fn kickers_do_not_break_ties() {
        let a = evaluate(&cards("Qc Qd 2h 3s 4c"));
        let b = evaluate(&cards("Qh Qs Ah Ks 9d"));
        assert_eq!(a, b);
    }

    #[test]
    fn ordinals_follow_poker_precedence() {
        let ordinals: Vec<u8> = HandCategory::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, (1..=9).collect::<Vec<u8>>());
        assert!(HandCategory::StraightFlush > HandCategory::FourOfAKind);
        assert!(HandCategory::Flush > HandCategory::Straight);
        assert_eq!(Card::new(14, Suit::Spades).to_string(), "As");
    }
}
