use std::str::FromStr;

use serde_json::{json, Map, Value};
use crate::analysis_engine::{
    config::AnalyzerConfig,
    error::{AnalysisError, Result},
    helpers::{board_str, hand_str},
    models::{
        Card, HandAnalysis, OutsResult, Position, SingleHandAnalysis, SingleHandRequest,
        StreetReport, StreetRequest, SynthesisRequest, SynthesisStatus,
    },
};

fn object(payload: &Value) -> Result<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| AnalysisError::InvalidInput("request body must be a JSON object".into()))
}

/// Read an array of card tokens. A missing key gives an empty list.
fn card_list(body: &Map<String, Value>, key: &str) -> Result<Vec<Card>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item.as_str() {
                Some(token) => Card::from_str(token),
                None => Err(AnalysisError::InvalidCard(item.to_string())),
            })
            .collect(),
        Some(other) => Err(AnalysisError::InvalidInput(format!("{key} must be an array, got {other}"))),
    }
}

fn optional_u64(body: &Map<String, Value>, key: &str) -> Result<Option<u64>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| AnalysisError::InvalidInput(format!("{key} must be a non-negative integer"))),
    }
}

fn optional_u32(body: &Map<String, Value>, key: &str) -> Result<Option<u32>> {
    optional_u64(body, key)?
        .map(|v| u32::try_from(v).map_err(|_| AnalysisError::InvalidInput(format!("{key} is too large"))))
        .transpose()
}

/// `{ "hero_cards": [...], "community_cards": [...], "opponents": n, "seed": n }`
pub fn parse_single_hand_request(payload: &Value) -> Result<SingleHandRequest> {
    let body = object(payload)?;
    Ok(SingleHandRequest {
        hero_hand: card_list(body, "hero_cards")?,
        board: card_list(body, "community_cards")?,
        opponents: optional_u32(body, "opponents")?,
        rng_seed: optional_u64(body, "seed")?,
    })
}

/// `{ "hero_cards": [...], "position": "BTN", "seed": n }`; position
/// defaults to the button.
pub fn parse_street_request(payload: &Value) -> Result<StreetRequest> {
    let body = object(payload)?;
    let position = match body.get("position") {
        None | Some(Value::Null) => Position::BTN,
        Some(Value::String(s)) => Position::from_str(s)?,
        Some(other) => return Err(AnalysisError::InvalidInput(format!("position must be a string, got {other}"))),
    };
    Ok(StreetRequest {
        hero_hand: card_list(body, "hero_cards")?,
        position,
        rng_seed: optional_u64(body, "seed")?,
    })
}

/// `{ "num_hands": n, "user_id": "...", "seed": n }`; missing fields come
/// from `config`.
pub fn parse_synthesis_request(payload: &Value, config: &AnalyzerConfig) -> Result<SynthesisRequest> {
    let body = object(payload)?;
    let user_id = match body.get("user_id") {
        None | Some(Value::Null) => config.effective_default_user(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(AnalysisError::InvalidInput(format!("user_id must be a string, got {other}"))),
    };
    Ok(SynthesisRequest {
        num_hands: optional_u32(body, "num_hands")?.unwrap_or_else(|| config.effective_default_hands()),
        user_id,
        rng_seed: optional_u64(body, "seed")?,
    })
}

fn percent(p: f64) -> f64 {
    (p * 10_000.0).round() / 100.0
}

fn card_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

fn outs_json(outs: &Option<OutsResult>) -> Value {
    match outs {
        Some(o) => json!({ "count": o.count, "cards": card_strings(&o.cards) }),
        None => Value::Null,
    }
}

fn street_json(report: &StreetReport) -> Value {
    json!({
        "street":         report.street.to_string(),
        "board":          card_strings(&report.board),
        "category":       report.category.to_string(),
        "equity":         percent(report.equity),
        "outs":           outs_json(&report.outs),
        "recommendation": report.recommendation,
    })
}

/// Probabilities are reported as percentages with two decimals.
pub fn single_hand_to_json(analysis: &SingleHandAnalysis) -> Value {
    let mut analysed = card_strings(&analysis.hero_hand);
    analysed.extend(card_strings(&analysis.board));
    json!({
        "street":           analysis.street.to_string(),
        "category":         analysis.category.to_string(),
        "equity":           percent(analysis.equity.probability),
        "outs":             outs_json(&analysis.outs),
        "win_probability":  percent(analysis.win_probability),
        "loss_probability": percent(analysis.loss_probability),
        "recommendation":   analysis.recommendation,
        "analysed_cards":   analysed,
    })
}

pub fn street_analysis_to_json(analysis: &HandAnalysis) -> Value {
    json!({
        "hero":                 hand_str(&analysis.hero_hand),
        "position":             analysis.position.to_string(),
        "streets":              analysis.streets.iter().map(street_json).collect::<Vec<_>>(),
        "equity_trajectory":    analysis.equity_trajectory.iter().map(|&e| percent(e)).collect::<Vec<_>>(),
        "final_board":          analysis.streets.last().map(|r| board_str(&r.board)).unwrap_or_default(),
        "narrative":            analysis.narrative,
        "final_recommendation": analysis.final_recommendation,
    })
}

pub fn synthesis_status_to_json(status: &SynthesisStatus) -> Value {
    json!({ "status": status.status, "count": status.count })
}

pub fn error_to_json(err: &AnalysisError) -> Value {
    json!({ "error": err.to_string() })
}
