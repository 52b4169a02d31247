use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::analysis_engine::error::AnalysisError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Dense index 0..4, used for suit counting.
    pub fn index(self) -> usize {
        match self {
            Suit::Clubs    => 0,
            Suit::Diamonds => 1,
            Suit::Hearts   => 2,
            Suit::Spades   => 3,
        }
    }

    fn from_symbol(s: &str) -> Option<Suit> {
        match s {
            "c" | "C" | "♣" => Some(Suit::Clubs),
            "d" | "D" | "♦" => Some(Suit::Diamonds),
            "h" | "H" | "♥" => Some(Suit::Hearts),
            "s" | "S" | "♠" => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    fn from_symbol(s: &str) -> Option<Rank> {
        let value = match s {
            "T" | "t" | "10" => 10,
            "J" | "j" => 11,
            "Q" | "q" => 12,
            "K" | "k" => 13,
            "A" | "a" => 14,
            "2" => 2, "3" => 3, "4" => 4, "5" => 5,
            "6" => 6, "7" => 7, "8" => 8, "9" => 9,
            _ => return None,
        };
        Some(Rank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        Card { rank: Rank(rank), suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Accepts `As`, `Td`, `10h`, `A♠`, `10♥`. The suit is always the last
/// character; everything before it is the rank.
impl FromStr for Card {
    type Err = AnalysisError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let invalid = || AnalysisError::InvalidCard(token.to_string());
        let (split, _) = token.char_indices().last().ok_or_else(invalid)?;
        let (rank, suit) = token.split_at(split);
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

/// Parse a list of card tokens separated by whitespace or commas.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, AnalysisError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(Card::from_str)
        .collect()
}

// ---------------------------------------------------------------------------
// Hand categories
// ---------------------------------------------------------------------------

/// The nine hand classes, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::Trips,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// 1 (High Card) ..= 9 (Straight Flush).
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard      => "High Card",
            HandCategory::Pair          => "Pair",
            HandCategory::TwoPair       => "Two Pair",
            HandCategory::Trips         => "Three of a Kind",
            HandCategory::Straight      => "Straight",
            HandCategory::Flush         => "Flush",
            HandCategory::FullHouse     => "Full House",
            HandCategory::FourOfAKind   => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Streets, positions, actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Zero-based position in the street order, Preflop = 0.
    pub fn index(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop    => 1,
            Street::Turn    => 2,
            Street::River   => 3,
        }
    }

    /// Community cards visible once this street is reached.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop    => 3,
            Street::Turn    => 4,
            Street::River   => 5,
        }
    }

    /// The following street, `None` at the river.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop    => Some(Street::Turn),
            Street::Turn    => Some(Street::River),
            Street::River   => None,
        }
    }

    pub fn from_board_len(len: usize) -> Option<Street> {
        match len {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop    => write!(f, "Flop"),
            Street::Turn    => write!(f, "Turn"),
            Street::River   => write!(f, "River"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    UTG,
    UTG1,
    UTG2,
    LJ,   // Lojack
    HJ,   // Hijack
    CO,   // Cutoff
    BTN,  // Button
    SB,   // Small Blind
    BB,   // Big Blind
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::UTG  => "UTG",
            Position::UTG1 => "UTG+1",
            Position::UTG2 => "UTG+2",
            Position::LJ   => "Lojack",
            Position::HJ   => "Hijack",
            Position::CO   => "Cutoff",
            Position::BTN  => "Button",
            Position::SB   => "Small Blind",
            Position::BB   => "Big Blind",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UTG"                     => Ok(Position::UTG),
            "UTG1" | "UTG+1"          => Ok(Position::UTG1),
            "UTG2" | "UTG+2"          => Ok(Position::UTG2),
            "LJ" | "LOJACK"           => Ok(Position::LJ),
            "HJ" | "HIJACK"           => Ok(Position::HJ),
            "CO" | "CUTOFF"           => Ok(Position::CO),
            "BTN" | "BUTTON"          => Ok(Position::BTN),
            "SB" | "SMALL BLIND"      => Ok(Position::SB),
            "BB" | "BIG BLIND"        => Ok(Position::BB),
            _ => Err(AnalysisError::InvalidInput(format!("unknown position: {s:?}"))),
        }
    }
}

impl Position {
    /// Is this position considered "in position" (acts last postflop)?
    pub fn is_late(self) -> bool {
        matches!(self, Position::CO | Position::BTN)
    }

    /// Positions for a table of `players` seats, starting at the button and
    /// going clockwise. Heads-up tables use Button and Big Blind.
    pub fn for_table(players: usize) -> Vec<Position> {
        const EARLY_TO_LATE: [Position; 6] = [
            Position::UTG, Position::UTG1, Position::UTG2,
            Position::LJ, Position::HJ, Position::CO,
        ];
        match players {
            0 => Vec::new(),
            1 => vec![Position::BTN],
            2 => vec![Position::BTN, Position::BB],
            n => {
                let middle = (n - 3).min(EARLY_TO_LATE.len());
                let mut seats = vec![Position::BTN, Position::SB, Position::BB];
                seats.extend_from_slice(&EARLY_TO_LATE[EARLY_TO_LATE.len() - middle..]);
                seats
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Check,
    Call,
    Raise,
    Fold,
    AllIn,
}

impl Action {
    pub const ALL: [Action; 5] = [Action::Check, Action::Call, Action::Raise, Action::Fold, Action::AllIn];

    pub fn is_aggressive(self) -> bool {
        matches!(self, Action::Raise | Action::AllIn)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Check => write!(f, "check"),
            Action::Call  => write!(f, "call"),
            Action::Raise => write!(f, "raise"),
            Action::Fold  => write!(f, "fold"),
            Action::AllIn => write!(f, "all-in"),
        }
    }
}

/// Actions taken on one street and the pot once the street closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BettingRound {
    pub street: Street,
    pub actions: Vec<Action>,
    pub pot: u32,
}

/// Street-ordered betting history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    pub rounds: Vec<BettingRound>,
}

impl ActionLog {
    pub fn new(rounds: Vec<BettingRound>) -> Self {
        ActionLog { rounds }
    }

    /// Raises and all-ins across every street.
    pub fn aggressive_count(&self) -> usize {
        self.rounds
            .iter()
            .flat_map(|r| r.actions.iter())
            .filter(|a| a.is_aggressive())
            .count()
    }

    /// Index of the latest street with any action, 0 when nothing was played.
    pub fn latest_street_index(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| !r.actions.is_empty())
            .map(|r| r.street.index())
            .max()
            .unwrap_or(0)
    }

    pub fn final_pot(&self) -> u32 {
        self.rounds.last().map(|r| r.pot).unwrap_or(0)
    }
}

/// A player's behavioural profile. `patience` is recorded but not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyPoint {
    pub aggressiveness: f64,
    pub risk: f64,
    #[serde(default = "StrategyPoint::neutral_value")]
    pub patience: f64,
}

impl StrategyPoint {
    pub fn neutral() -> Self {
        StrategyPoint { aggressiveness: 0.5, risk: 0.5, patience: 0.5 }
    }

    fn neutral_value() -> f64 {
        0.5
    }
}

impl Default for StrategyPoint {
    fn default() -> Self {
        Self::neutral()
    }
}

// ---------------------------------------------------------------------------
// Analysis results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub trials: u32,
    /// `(wins + ties / 2) / trials`.
    pub probability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsResult {
    pub count: usize,
    pub cards: Vec<Card>,
}

impl OutsResult {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        OutsResult { count: cards.len(), cards }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetReport {
    pub street: Street,
    pub board: Vec<Card>,
    pub category: HandCategory,
    pub equity: f64,
    pub outs: Option<OutsResult>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandAnalysis {
    pub hero_hand: [Card; 2],
    pub position: Position,
    pub streets: Vec<StreetReport>,
    pub equity_trajectory: Vec<f64>,
    pub mean_equity: f64,
    pub narrative: String,
    pub final_recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleHandAnalysis {
    pub hero_hand: [Card; 2],
    pub board: Vec<Card>,
    pub street: Street,
    pub category: HandCategory,
    pub equity: EquityResult,
    pub outs: Option<OutsResult>,
    pub win_probability: f64,
    pub loss_probability: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandResult {
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub name: String,
    pub seat: u8,
    pub position: Position,
}

/// One persisted synthetic hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticHandRecord {
    pub hand_id: u32,
    pub table_id: u8,
    pub user_id: String,
    pub players: Vec<SeatedPlayer>,
    pub hero_seat: u8,
    pub hero_position: Position,
    pub hero_hand: [Card; 2],
    pub board: Vec<Card>,
    pub category: HandCategory,
    pub action_log: ActionLog,
    pub result: HandResult,
    pub winner: String,
    pub final_pot: u32,
    pub net: i64,
    pub strategy: StrategyPoint,
    pub win_probability: f64,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleHandRequest {
    pub hero_hand: Vec<Card>,
    #[serde(default)]
    pub board: Vec<Card>,
    pub opponents: Option<u32>,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetRequest {
    pub hero_hand: Vec<Card>,
    pub position: Position,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub num_hands: u32,
    pub user_id: String,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisStatus {
    pub status: String,
    pub count: usize,
}
