//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bank::DEFAULT_POOL_SIZE;

/// Thresholds and sample-size gates used by the result analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerThresholds {
    /// Minimum answers in a category before it can be classified.
    pub category_min_answers: u32,
    /// Category accuracy strictly below this is a weak point.
    pub category_weak_below: f64,
    /// Category accuracy strictly above this is a strong point.
    pub category_strong_above: f64,
    /// Minimum answers in a domain before it can be classified.
    pub domain_min_answers: u32,
    pub domain_weak_below: f64,
    pub domain_strong_above: f64,
    /// Weak points below this accuracy yield high-priority recommendations.
    pub high_priority_below: f64,
    /// Generic advice is appended when fewer recommendations than this exist.
    pub generic_fill_below: usize,
    pub max_recommendations: usize,
}

impl Default for AnalyzerThresholds {
    fn default() -> Self {
        Self {
            category_min_answers: 3,
            category_weak_below: 50.0,
            category_strong_above: 80.0,
            domain_min_answers: 5,
            domain_weak_below: 60.0,
            domain_strong_above: 75.0,
            high_priority_below: 40.0,
            generic_fill_below: 3,
            max_recommendations: 5,
        }
    }
}

/// Top-level cogquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CogquizConfig {
    /// Questions generated per band when its pool is first used.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Default number of questions per test.
    #[serde(default = "default_questions_per_test")]
    pub questions_per_test: usize,
    /// JSON file holding recorded score history.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    #[serde(default)]
    pub thresholds: AnalyzerThresholds,
}

fn default_pool_size() -> usize {
    DEFAULT_POOL_SIZE
}
fn default_questions_per_test() -> usize {
    10
}
fn default_history_path() -> PathBuf {
    PathBuf::from("./cogquiz-history.json")
}

impl Default for CogquizConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            questions_per_test: default_questions_per_test(),
            history_path: default_history_path(),
            thresholds: AnalyzerThresholds::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    // substituted values are never rescanned
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `cogquiz.toml` in the current directory
/// 2. `~/.config/cogquiz/config.toml`
///
/// `COGQUIZ_HISTORY` overrides the history path.
pub fn load_config() -> Result<CogquizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CogquizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("cogquiz.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => CogquizConfig::default(),
    };

    if let Ok(history) = std::env::var("COGQUIZ_HISTORY") {
        config.history_path = PathBuf::from(history);
    }

    Ok(config)
}

/// Parse a TOML string into a config, resolving `${VAR}` references.
pub fn parse_config(content: &str) -> Result<CogquizConfig> {
    let mut config: CogquizConfig = toml::from_str(content)?;
    let raw = config.history_path.to_string_lossy().into_owned();
    config.history_path = PathBuf::from(resolve_env_vars(&raw));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("cogquiz"))
}
