//! Score report types with JSON persistence and markdown rendering.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::CognitiveDomain;

/// Answer counts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub total: u32,
    pub correct: u32,
    /// Percentage in [0, 100]; 0 when `total` is 0.
    pub accuracy: f64,
}

/// Answer counts for one cognitive domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainStats {
    pub domain: CognitiveDomain,
    pub total: u32,
    pub correct: u32,
    pub accuracy: f64,
}

/// Whether a weak or strong point refers to a category or a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    Category,
    Domain,
}

/// A category or domain that crossed a weak/strong threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPoint {
    pub area: String,
    /// Accuracy rounded to one decimal.
    pub accuracy: f64,
    #[serde(rename = "type")]
    pub kind: AreaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub area: String,
    pub recommendation: String,
    pub priority: Priority,
}

/// Structured result of analyzing one test's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Percent correct over all answers, rounded to two decimals.
    pub overall_score: f64,
    pub total_correct: u32,
    pub total_questions: u32,
    /// Per-category stats in the order categories were first seen.
    pub category_stats: Vec<CategoryStats>,
    /// Per-domain stats for all six domains, in table order.
    pub domain_stats: Vec<DomainStats>,
    pub weak_points: Vec<AreaPoint>,
    pub strong_points: Vec<AreaPoint>,
    /// At most five entries, weak-point driven ones first.
    pub recommendations: Vec<Recommendation>,
}

impl ScoreReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.category_stats.iter().find(|c| c.category == name)
    }

    pub fn domain(&self, domain: CognitiveDomain) -> Option<&DomainStats> {
        self.domain_stats.iter().find(|d| d.domain == domain)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Score:** {:.2}% ({}/{} correct)\n\n",
            self.overall_score, self.total_correct, self.total_questions
        ));

        if !self.category_stats.is_empty() {
            md.push_str("### Categories\n\n");
            md.push_str("| Category | Correct | Total | Accuracy |\n");
            md.push_str("|----------|---------|-------|----------|\n");
            for c in &self.category_stats {
                md.push_str(&format!(
                    "| {} | {} | {} | {:.1}% |\n",
                    c.category, c.correct, c.total, c.accuracy
                ));
            }
            md.push('\n');
        }

        let touched: Vec<_> = self.domain_stats.iter().filter(|d| d.total > 0).collect();
        if !touched.is_empty() {
            md.push_str("### Cognitive domains\n\n");
            md.push_str("| Domain | Correct | Total | Accuracy |\n");
            md.push_str("|--------|---------|-------|----------|\n");
            for d in touched {
                md.push_str(&format!(
                    "| {} | {} | {} | {:.1}% |\n",
                    d.domain, d.correct, d.total, d.accuracy
                ));
            }
            md.push('\n');
        }

        for (title, points) in [
            ("Strengths", &self.strong_points),
            ("Needs practice", &self.weak_points),
        ] {
            if points.is_empty() {
                continue;
            }
            md.push_str(&format!("### {title}\n\n"));
            for p in points {
                md.push_str(&format!("- {} ({:.1}%)\n", p.area, p.accuracy));
            }
            md.push('\n');
        }

        if !self.recommendations.is_empty() {
            md.push_str("### Recommendations\n\n");
            for r in &self.recommendations {
                md.push_str(&format!(
                    "- [{}] {}: {}\n",
                    r.priority, r.area, r.recommendation
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> ScoreReport {
        ScoreReport {
            overall_score: 40.0,
            total_correct: 2,
            total_questions: 5,
            category_stats: vec![CategoryStats {
                category: "Color Patterns".into(),
                total: 5,
                correct: 2,
                accuracy: 40.0,
            }],
            domain_stats: CognitiveDomain::ALL
                .into_iter()
                .map(|domain| DomainStats {
                    domain,
                    total: if domain == CognitiveDomain::PatternRecognition { 5 } else { 0 },
                    correct: if domain == CognitiveDomain::PatternRecognition { 2 } else { 0 },
                    accuracy: if domain == CognitiveDomain::PatternRecognition { 40.0 } else { 0.0 },
                })
                .collect(),
            weak_points: vec![AreaPoint {
                area: "Color Patterns".into(),
                accuracy: 40.0,
                kind: AreaKind::Category,
            }],
            strong_points: vec![],
            recommendations: vec![Recommendation {
                area: "Pattern Recognition".into(),
                recommendation: "Try visual sequence games".into(),
                priority: Priority::Medium,
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = ScoreReport::load_json(&path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(make_report()).unwrap();
        assert_eq!(json["weak_points"][0]["type"], "category");
        assert_eq!(json["recommendations"][0]["priority"], "medium");
        assert_eq!(json["domain_stats"][0]["domain"], "Pattern Recognition");
    }

    #[test]
    fn lookups_by_name() {
        let report = make_report();
        assert_eq!(report.category("Color Patterns").unwrap().correct, 2);
        assert!(report.category("Shape Patterns").is_none());
        assert_eq!(
            report.domain(CognitiveDomain::PatternRecognition).unwrap().total,
            5
        );
    }

    #[test]
    fn markdown_output() {
        let md = make_report().to_markdown();
        assert!(md.contains("**Score:** 40.00% (2/5 correct)"));
        assert!(md.contains("| Color Patterns | 2 | 5 | 40.0% |"));
        assert!(md.contains("Needs practice"));
        assert!(!md.contains("Strengths"));
        assert!(!md.contains("Spatial Reasoning"));
        assert!(md.contains("[medium] Pattern Recognition"));
    }

    #[test]
    fn load_missing_report_fails_with_path() {
        let err = ScoreReport::load_json(Path::new("no_such_report.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no_such_report.json"));
    }
}
