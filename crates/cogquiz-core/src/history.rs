//! Score history persisted as a JSON file of records.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::model::AgeBand;
use crate::progress::{calculate_progress, ProgressSummary, ScoreSample};
use crate::report::ScoreReport;

/// One analyzed test for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    /// Child identifier.
    pub subject: String,
    pub age_band: AgeBand,
    pub taken_at: DateTime<Utc>,
    pub report: ScoreReport,
}

impl ScoreRecord {
    /// A record taken now.
    pub fn new(subject: impl Into<String>, age_band: AgeBand, report: ScoreReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            age_band,
            taken_at: Utc::now(),
            report,
        }
    }

    pub fn sample(&self) -> ScoreSample {
        ScoreSample {
            score: self.report.overall_score,
            taken_at: self.taken_at,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    records: Vec<ScoreRecord>,
}

/// Score records backed by a JSON file.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl HistoryStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let records = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read history from {}", path.display()))?;
            let file: HistoryFile = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse history {}", path.display()))?;
            file.records
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), records = records.len(), "loaded history");
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    /// A subject's records, oldest first.
    pub fn for_subject(&self, subject: &str) -> Vec<&ScoreRecord> {
        let mut records: Vec<&ScoreRecord> = self
            .records
            .iter()
            .filter(|r| r.subject == subject)
            .collect();
        records.sort_by_key(|r| r.taken_at);
        records
    }

    /// Progress summary for `subject`, if it has at least two records.
    pub fn progress_for(&self, subject: &str) -> Option<ProgressSummary> {
        let samples: Vec<ScoreSample> = self
            .for_subject(subject)
            .into_iter()
            .map(ScoreRecord::sample)
            .collect();
        calculate_progress(&samples)
    }

    /// Write all records back to the store's file.
    pub fn save(&self) -> Result<()> {
        let file = HistoryFile {
            records: self.records.clone(),
        };
        let json = serde_json::to_string_pretty(&file).context("failed to serialize history")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write history to {}", self.path.display()))?;
        debug!(path = %self.path.display(), records = self.records.len(), "saved history");
        Ok(())
    }
}
