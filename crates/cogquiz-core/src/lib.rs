//! cogquiz-core: question bank generation and result analysis.
//!
//! This crate defines the data model, the age-banded question generators,
//! the pooled question bank, and the statistics that turn submitted answers
//! into score reports and longitudinal progress summaries.

pub mod analyzer;
pub mod bank;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod model;
pub mod progress;
pub mod report;
pub mod simulate;

pub use analyzer::ResultAnalyzer;
pub use bank::QuestionBank;
pub use config::{load_config, load_config_from, AnalyzerThresholds, CogquizConfig};
pub use error::QuizError;
pub use model::{AgeBand, CognitiveDomain, Difficulty, Question, QuestionKind, SubmittedAnswer};
pub use progress::{calculate_progress, ProgressSummary, ScoreSample, Trend};
pub use report::ScoreReport;
