//! Longitudinal progress over a subject's recorded scores.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded overall score and when the test was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSample {
    pub score: f64,
    pub taken_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    fn of(improvement: f64) -> Self {
        if improvement > 0.0 {
            Trend::Improving
        } else if improvement < 0.0 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Stable => write!(f, "stable"),
            Trend::Declining => write!(f, "declining"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub first_score: f64,
    pub latest_score: f64,
    /// `latest_score - first_score`.
    pub improvement: f64,
    pub average_score: f64,
    pub test_count: usize,
    pub trend: Trend,
}

impl ProgressSummary {
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("| Tests | First | Latest | Change | Average | Trend |\n");
        md.push_str("|-------|-------|--------|--------|---------|-------|\n");
        md.push_str(&format!(
            "| {} | {:.2}% | {:.2}% | {:+.2} | {:.2}% | {} |\n",
            self.test_count,
            self.first_score,
            self.latest_score,
            self.improvement,
            self.average_score,
            self.trend
        ));
        md
    }
}

/// Summarize a subject's score history.
///
/// Samples are ordered by `taken_at` (ties keep input order). Returns `None`
/// with fewer than two samples.
pub fn calculate_progress(samples: &[ScoreSample]) -> Option<ProgressSummary> {
    if samples.len() < 2 {
        return None;
    }

    let mut ordered = samples.to_vec();
    ordered.sort_by_key(|s| s.taken_at);

    let first_score = ordered.first()?.score;
    let latest_score = ordered.last()?.score;
    let improvement = latest_score - first_score;
    let average_score = ordered.iter().map(|s| s.score).sum::<f64>() / ordered.len() as f64;

    Some(ProgressSummary {
        first_score,
        latest_score,
        improvement,
        average_score,
        test_count: ordered.len(),
        trend: Trend::of(improvement),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: i64, score: f64) -> ScoreSample {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        ScoreSample {
            score,
            taken_at: base + Duration::days(day),
        }
    }

    #[test]
    fn fewer_than_two_samples_has_no_progress() {
        assert!(calculate_progress(&[]).is_none());
        assert!(calculate_progress(&[at(0, 80.0)]).is_none());
    }

    #[test]
    fn improving_scores() {
        let summary = calculate_progress(&[at(0, 50.0), at(7, 70.0)]).unwrap();
        assert_eq!(summary.first_score, 50.0);
        assert_eq!(summary.latest_score, 70.0);
        assert_eq!(summary.improvement, 20.0);
        assert_eq!(summary.average_score, 60.0);
        assert_eq!(summary.test_count, 2);
        assert_eq!(summary.trend, Trend::Improving);
    }

    #[test]
    fn samples_are_ordered_by_time() {
        let summary = calculate_progress(&[at(10, 40.0), at(0, 90.0), at(5, 65.0)]).unwrap();
        assert_eq!(summary.first_score, 90.0);
        assert_eq!(summary.latest_score, 40.0);
        assert_eq!(summary.improvement, -50.0);
        assert_eq!(summary.trend, Trend::Declining);
        assert_eq!(summary.average_score, 65.0);
    }

    #[test]
    fn equal_endpoints_are_stable() {
        let summary = calculate_progress(&[at(0, 60.0), at(1, 90.0), at(2, 60.0)]).unwrap();
        assert_eq!(summary.improvement, 0.0);
        assert_eq!(summary.trend, Trend::Stable);
    }

    #[test]
    fn simultaneous_samples_keep_input_order() {
        let summary = calculate_progress(&[at(0, 30.0), at(0, 45.0)]).unwrap();
        assert_eq!(summary.first_score, 30.0);
        assert_eq!(summary.latest_score, 45.0);
    }

    #[test]
    fn markdown_row() {
        let md = calculate_progress(&[at(0, 50.0), at(7, 70.0)])
            .unwrap()
            .to_markdown();
        assert!(md.contains("| 2 | 50.00% | 70.00% | +20.00 | 60.00% | improving |"));
    }
}
