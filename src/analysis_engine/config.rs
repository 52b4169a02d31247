//! Analyzer configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis_engine::error::{AnalysisError, Result};

/// Tunables shared by every entry point. Unset fields fall back to the
/// `effective_*` defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Monte Carlo trials per equity estimate. Default: 2000.
    pub equity_trials: Option<u32>,
    /// Opponents assumed when a request does not say. Default: 3.
    pub default_opponents: Option<u32>,
    /// Dataset file for synthesized hands. Default: `data/poker_dataset.json`.
    pub dataset_path: Option<PathBuf>,
    /// User id for synthesized hands. Default: `Player_1`.
    pub default_user: Option<String>,
    /// Hands per synthesis request. Default: 5000.
    pub default_hands: Option<u32>,
}

impl AnalyzerConfig {
    /// Parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::InvalidInput(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AnalysisError::InvalidInput(format!("malformed config: {e}")))
    }

    pub fn effective_equity_trials(&self) -> u32 {
        self.equity_trials.unwrap_or(2000)
    }

    pub fn effective_default_opponents(&self) -> u32 {
        self.default_opponents.unwrap_or(3)
    }

    pub fn effective_dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("data/poker_dataset.json"))
    }

    pub fn effective_default_user(&self) -> String {
        self.default_user.clone().unwrap_or_else(|| "Player_1".to_string())
    }

    pub fn effective_default_hands(&self) -> u32 {
        self.default_hands.unwrap_or(5000)
    }
}
