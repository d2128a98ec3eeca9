//! Result analysis: per-category and per-domain accuracy, weak/strong point
//! classification, and recommendations.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{AnalyzerThresholds, CogquizConfig};
use crate::model::{CognitiveDomain, Question, SubmittedAnswer};
use crate::progress::{calculate_progress, ProgressSummary, ScoreSample};
use crate::report::{
    AreaKind, AreaPoint, CategoryStats, DomainStats, Priority, Recommendation, ScoreReport,
};

/// Area label used for generic advice.
pub const GENERAL_AREA: &str = "General";

const GENERIC_SUGGESTIONS: [&str; 4] = [
    "Practice cognitive skills for 20 minutes daily",
    "Mix different types of puzzles and games",
    "Review incorrect answers to understand mistakes",
    "Take regular breaks during practice sessions",
];

/// Targeted suggestions for a weak area, matched by name. A category that
/// shares a domain's name gets the same advice; other areas yield none.
fn suggestions_for(area: &str) -> &'static [&'static str] {
    match area {
        "Pattern Recognition" => &[
            "Practice with pattern completion exercises",
            "Try visual sequence games",
            "Work on identifying repeating sequences",
        ],
        "Matrix Reasoning" => &[
            "Solve matrix-based puzzles regularly",
            "Practice identifying relationships between elements",
            "Work on 3x3 matrix completion exercises",
        ],
        "Verbal Analogy" => &[
            "Read together and talk about how words relate",
            "Play word-association and opposites games",
            "Practice completing simple analogies aloud",
        ],
        "Abstract Reasoning" => &[
            "Practice with analogies and metaphors",
            "Solve logic puzzles regularly",
            "Work on identifying underlying principles",
        ],
        "Spatial Reasoning" => &[
            "Practice mental rotation exercises",
            "Work with 3D puzzles and building blocks",
            "Try spatial visualization games",
        ],
        "Sequential Reasoning" => &[
            "Practice predicting next items in sequences",
            "Work on number and pattern series",
            "Try memory sequence games",
        ],
        _ => &[],
    }
}

/// Percentage of `correct` over `total`, 0 when `total` is 0.
pub fn accuracy(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(correct) / f64::from(total) * 100.0
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Turns submitted answers into a [`ScoreReport`].
#[derive(Debug, Clone, Default)]
pub struct ResultAnalyzer {
    thresholds: AnalyzerThresholds,
}

impl ResultAnalyzer {
    pub fn new(thresholds: AnalyzerThresholds) -> Self {
        Self { thresholds }
    }

    pub fn from_config(config: &CogquizConfig) -> Self {
        Self::new(config.thresholds.clone())
    }

    pub fn thresholds(&self) -> &AnalyzerThresholds {
        &self.thresholds
    }

    /// Analyze `answers`, each paired with its originating question.
    ///
    /// Answers are paired with `questions` by position; when the ids at that
    /// position disagree the question is looked up by id instead. An answer's
    /// own `is_correct` flag wins over comparing against the question, and an
    /// answer with neither counts as incorrect.
    pub fn analyze(&self, answers: &[SubmittedAnswer], questions: &[Question]) -> ScoreReport {
        let mut category_stats: Vec<CategoryStats> = Vec::new();
        let mut category_index: HashMap<String, usize> = HashMap::new();
        let mut domain_counts = [(0u32, 0u32); CognitiveDomain::ALL.len()];

        for (position, answer) in answers.iter().enumerate() {
            let question = paired_question(position, answer, questions);
            let is_correct = resolve_correctness(answer, question);

            let idx = *category_index
                .entry(answer.category.clone())
                .or_insert_with(|| {
                    category_stats.push(CategoryStats {
                        category: answer.category.clone(),
                        total: 0,
                        correct: 0,
                        accuracy: 0.0,
                    });
                    category_stats.len() - 1
                });
            let stats = &mut category_stats[idx];
            stats.total += 1;
            stats.correct += u32::from(is_correct);

            if let Some(question) = question {
                // a kind listed under several domains increments each of them
                for (slot, domain) in CognitiveDomain::ALL.iter().enumerate() {
                    if domain.kinds().contains(&question.kind) {
                        domain_counts[slot].0 += 1;
                        domain_counts[slot].1 += u32::from(is_correct);
                    }
                }
            }
        }

        for stats in &mut category_stats {
            stats.accuracy = accuracy(stats.correct, stats.total);
        }
        let domain_stats: Vec<DomainStats> = CognitiveDomain::ALL
            .into_iter()
            .zip(domain_counts)
            .map(|(domain, (total, correct))| DomainStats {
                domain,
                total,
                correct,
                accuracy: accuracy(correct, total),
            })
            .collect();

        let weak_points = self.weak_points(&category_stats, &domain_stats);
        let strong_points = self.strong_points(&category_stats, &domain_stats);
        let recommendations = self.recommendations(&weak_points);

        let total_correct: u32 = category_stats.iter().map(|c| c.correct).sum();
        let total_questions: u32 = category_stats.iter().map(|c| c.total).sum();
        let overall_score = round_to(accuracy(total_correct, total_questions), 2);

        debug!(
            answers = answers.len(),
            overall_score,
            weak = weak_points.len(),
            strong = strong_points.len(),
            "analyzed answers"
        );

        ScoreReport {
            overall_score,
            total_correct,
            total_questions,
            category_stats,
            domain_stats,
            weak_points,
            strong_points,
            recommendations,
        }
    }

    /// See [`calculate_progress`].
    pub fn calculate_progress(&self, history: &[ScoreSample]) -> Option<ProgressSummary> {
        calculate_progress(history)
    }

    fn weak_points(&self, categories: &[CategoryStats], domains: &[DomainStats]) -> Vec<AreaPoint> {
        let t = &self.thresholds;
        classify(
            categories,
            domains,
            |total, acc| total >= t.category_min_answers && acc < t.category_weak_below,
            |total, acc| total >= t.domain_min_answers && acc < t.domain_weak_below,
        )
    }

    fn strong_points(&self, categories: &[CategoryStats], domains: &[DomainStats]) -> Vec<AreaPoint> {
        let t = &self.thresholds;
        classify(
            categories,
            domains,
            |total, acc| total >= t.category_min_answers && acc > t.category_strong_above,
            |total, acc| total >= t.domain_min_answers && acc > t.domain_strong_above,
        )
    }

    fn recommendations(&self, weak_points: &[AreaPoint]) -> Vec<Recommendation> {
        let t = &self.thresholds;
        let mut recommendations: Vec<Recommendation> = weak_points
            .iter()
            .flat_map(|point| {
                let priority = if point.accuracy < t.high_priority_below {
                    Priority::High
                } else {
                    Priority::Medium
                };
                suggestions_for(&point.area)
                    .iter()
                    .map(move |suggestion| Recommendation {
                        area: point.area.clone(),
                        recommendation: suggestion.to_string(),
                        priority,
                    })
            })
            .collect();

        if recommendations.len() < t.generic_fill_below {
            recommendations.extend(GENERIC_SUGGESTIONS.iter().map(|suggestion| Recommendation {
                area: GENERAL_AREA.to_string(),
                recommendation: suggestion.to_string(),
                priority: Priority::Low,
            }));
        }

        recommendations.truncate(t.max_recommendations);
        recommendations
    }
}

/// Categories first in discovery order, then domains in table order.
fn classify(
    categories: &[CategoryStats],
    domains: &[DomainStats],
    category_hit: impl Fn(u32, f64) -> bool,
    domain_hit: impl Fn(u32, f64) -> bool,
) -> Vec<AreaPoint> {
    let category_points = categories
        .iter()
        .filter(|c| category_hit(c.total, c.accuracy))
        .map(|c| AreaPoint {
            area: c.category.clone(),
            accuracy: round_to(c.accuracy, 1),
            kind: AreaKind::Category,
        });
    let domain_points = domains
        .iter()
        .filter(|d| domain_hit(d.total, d.accuracy))
        .map(|d| AreaPoint {
            area: d.domain.name().to_string(),
            accuracy: round_to(d.accuracy, 1),
            kind: AreaKind::Domain,
        });
    category_points.chain(domain_points).collect()
}

fn paired_question<'q>(
    position: usize,
    answer: &SubmittedAnswer,
    questions: &'q [Question],
) -> Option<&'q Question> {
    let positional = questions.get(position);
    if positional.is_some_and(|q| q.id == answer.question_id) {
        return positional;
    }
    questions
        .iter()
        .find(|q| q.id == answer.question_id)
        .or(positional)
}

fn resolve_correctness(answer: &SubmittedAnswer, question: Option<&Question>) -> bool {
    if let Some(flag) = answer.is_correct {
        return flag;
    }
    match question {
        Some(q) => q.is_correct(&answer.answer),
        None => {
            warn!(
                question_id = %answer.question_id,
                "no question to check answer against, counting as incorrect"
            );
            false
        }
    }
}
