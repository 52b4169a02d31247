//! Where synthesized records go, and the basic summary read back from them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis_engine::{
    error::{AnalysisError, Result},
    models::{HandResult, SyntheticHandRecord},
};

/// Destination for a batch of synthesized records.
pub trait RecordSink {
    fn write_records(&mut self, records: &[SyntheticHandRecord]) -> Result<()>;
}

/// Pretty-printed JSON array on disk. Each write replaces the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record back. A missing file is `DataUnavailable`.
    pub fn load(&self) -> Result<Vec<SyntheticHandRecord>> {
        if !self.path.exists() {
            return Err(AnalysisError::DataUnavailable(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl RecordSink for JsonFileStore {
    fn write_records(&mut self, records: &[SyntheticHandRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        log::info!("wrote {} records to {}", records.len(), self.path().display());
        Ok(())
    }
}

/// Keeps the last written batch in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub records: Vec<SyntheticHandRecord>,
}

impl RecordSink for MemoryStore {
    fn write_records(&mut self, records: &[SyntheticHandRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// Headline numbers over a dataset. All zero when there is no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_hands: usize,
    pub won: usize,
    pub lost: usize,
    /// Percent, two decimals.
    pub win_rate: f64,
    pub mean_pot: f64,
    pub mean_aggressiveness: f64,
    pub mean_risk: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl DatasetSummary {
    pub fn from_records(records: &[SyntheticHandRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let n = records.len() as f64;
        let won = records.iter().filter(|r| r.result == HandResult::Won).count();
        let mean = |f: fn(&SyntheticHandRecord) -> f64| records.iter().map(f).sum::<f64>() / n;
        DatasetSummary {
            total_hands: records.len(),
            won,
            lost: records.len() - won,
            win_rate: round2(won as f64 / n * 100.0),
            mean_pot: round2(mean(|r| r.final_pot as f64)),
            mean_aggressiveness: round2(mean(|r| r.strategy.aggressiveness)),
            mean_risk: round2(mean(|r| r.strategy.risk)),
        }
    }
}

/// Summary of whatever `store` holds; a missing dataset yields zeros.
pub fn summarize_store(store: &JsonFileStore) -> Result<DatasetSummary> {
    match store.load() {
        Ok(records) => Ok(DatasetSummary::from_records(&records)),
        Err(AnalysisError::DataUnavailable(path)) => {
            log::warn!("no dataset at {}, returning empty summary", path.display());
            Ok(DatasetSummary::default())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_engine::synthesizer::synthesize_records;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn file_store_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("data").join("hands.json"));
        assert!(store.path().ends_with("data/hands.json"));
        let mut rng = StdRng::seed_from_u64(9);
        let records = synthesize_records(&mut rng, 25, "Player_2").unwrap();

        store.write_records(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 25);
        for (a, b) in records.iter().zip(&loaded) {
            assert_eq!(a.hand_id, b.hand_id);
            assert_eq!(a.hero_hand, b.hero_hand);
            assert_eq!(a.board, b.board);
            assert_eq!(a.action_log, b.action_log);
            assert_eq!(a.net, b.net);
        }
    }

    #[test]
    fn missing_file_is_data_unavailable_and_summary_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load(), Err(AnalysisError::DataUnavailable(_))));
        assert_eq!(summarize_store(&store).unwrap(), DatasetSummary::default());
    }

    #[test]
    fn summary_counts_add_up() {
        let mut rng = StdRng::seed_from_u64(10);
        let records = synthesize_records(&mut rng, 200, "Player_4").unwrap();
        let summary = DatasetSummary::from_records(&records);
        assert_eq!(summary.total_hands, 200);
        assert_eq!(summary.won + summary.lost, 200);
        assert!(summary.win_rate > 0.0 && summary.win_rate < 100.0);
        assert!(summary.mean_pot >= 200.0 && summary.mean_pot <= 2000.0);
        assert!((0.0..=1.0).contains(&summary.mean_risk));
    }

    #[test]
    fn unwritable_path_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let mut store = JsonFileStore::new(blocker.join("nested").join("hands.json"));
        let err = store.write_records(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::Persistence(_)));
    }
}
