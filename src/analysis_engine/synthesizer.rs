//! Bulk generation of synthetic hand records.
//!
//! Each record is drawn independently: seats, cards, betting, probability
//! and outcome. Nothing carries over from one record to the next.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis_engine::{
    deck::Deck,
    error::Result,
    evaluator::categorize,
    models::{
        Action, ActionLog, BettingRound, Card, HandResult, Position, SeatedPlayer, StrategyPoint,
        Street, SyntheticHandRecord,
    },
    win_model::win_probability,
};

const PLAYER_POOL: usize = 9;
const MIN_PLAYERS: usize = 2;
const MAX_TABLE_ID: u8 = 5;

/// Random 1–3 actions per street, with 50..=500 chips added to the running
/// pot on each street. The pot therefore only grows.
pub fn random_action_log<R: Rng>(rng: &mut R) -> ActionLog {
    let mut pot = 0u32;
    let rounds = Street::ALL
        .iter()
        .map(|&street| {
            let count = rng.gen_range(1..=3);
            let actions = (0..count)
                .map(|_| Action::ALL[rng.gen_range(0..Action::ALL.len())])
                .collect();
            pot += rng.gen_range(50..=500);
            BettingRound { street, actions, pot }
        })
        .collect();
    ActionLog::new(rounds)
}

fn random_strategy<R: Rng>(rng: &mut R) -> StrategyPoint {
    let mut point = || (rng.gen::<f64>() * 100.0).round() / 100.0;
    StrategyPoint {
        aggressiveness: point(),
        patience: point(),
        risk: point(),
    }
}

/// Seat between 2 and 9 players from the pool, always including `user_id`.
/// Positions run clockwise from a random button seat.
fn seat_players<R: Rng>(rng: &mut R, user_id: &str) -> Vec<SeatedPlayer> {
    let count = rng.gen_range(MIN_PLAYERS..=PLAYER_POOL);
    let pool: Vec<String> = (1..=PLAYER_POOL).map(|i| format!("Player_{i}")).collect();
    let mut names: Vec<String> = pool.choose_multiple(rng, count).cloned().collect();
    if !names.iter().any(|n| n == user_id) {
        let slot = rng.gen_range(0..count);
        names[slot] = user_id.to_string();
    }

    let positions = Position::for_table(count);
    let button = rng.gen_range(0..count);
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| SeatedPlayer {
            name,
            seat: (i + 1) as u8,
            position: positions[(i + count - button) % count],
        })
        .collect()
}

/// Build one internally consistent record.
pub fn synthesize_record<R: Rng>(rng: &mut R, hand_id: u32, user_id: &str) -> Result<SyntheticHandRecord> {
    let table_id = rng.gen_range(1..=MAX_TABLE_ID);
    let players = seat_players(rng, user_id);
    let (hero_seat, hero_position) = players
        .iter()
        .find(|p| p.name == user_id)
        .map(|p| (p.seat, p.position))
        .unwrap_or((1, Position::BTN));

    let dealt = Deck::full().sample(rng, 7)?;
    let hero_hand: [Card; 2] = [dealt[0], dealt[1]];
    let board = dealt[2..].to_vec();

    let strategy = random_strategy(rng);
    let action_log = random_action_log(rng);

    let category = categorize(&dealt);
    let opponents = (players.len() - 1).max(1) as u32;
    let probability = win_probability(category, &action_log, opponents, &strategy);
    let won = rng.gen::<f64>() < probability;

    let winner = if won {
        user_id.to_string()
    } else {
        let others: Vec<&SeatedPlayer> = players.iter().filter(|p| p.name != user_id).collect();
        others
            .choose(rng)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| user_id.to_string())
    };

    let final_pot = action_log.final_pot();
    let invested = i64::from(final_pot) / players.len() as i64;
    let net = if won { i64::from(final_pot) - invested } else { -invested };

    Ok(SyntheticHandRecord {
        hand_id,
        table_id,
        user_id: user_id.to_string(),
        players,
        hero_seat,
        hero_position,
        hero_hand,
        board,
        category,
        action_log,
        result: if won { HandResult::Won } else { HandResult::Lost },
        winner,
        final_pot,
        net,
        strategy,
        win_probability: (probability * 1000.0).round() / 1000.0,
    })
}

/// Upper bound on the up-front reservation; larger batches grow as they go.
const RESERVE_LIMIT: u32 = 10_000;

fn initial_capacity(num_hands: u32) -> usize {
    num_hands.min(RESERVE_LIMIT) as usize
}

/// `num_hands` independent records with ids 1..=num_hands.
pub fn synthesize_records<R: Rng>(rng: &mut R, num_hands: u32, user_id: &str) -> Result<Vec<SyntheticHandRecord>> {
    let mut records = Vec::with_capacity(initial_capacity(num_hands));
    for hand_id in 1..=num_hands {
        records.push(synthesize_record(rng, hand_id, user_id)?);
        if hand_id % 1000 == 0 {
            log::debug!("synthesized {hand_id}/{num_hands} hands for {user_id}");
        }
    }
    Ok(records)
}
