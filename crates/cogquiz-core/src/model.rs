//! Core data model types for cogquiz.
//!
//! These are the plain-data types exchanged with the application layer:
//! age bands, generated questions, submitted answers, and the fixed mapping
//! from question kinds to cognitive domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Number of candidate answers every question carries.
pub const OPTION_COUNT: usize = 4;

/// Category assigned to answers that arrive without one.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One of the three fixed age ranges, each with its own question catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum AgeBand {
    #[default]
    #[serde(rename = "6-8")]
    SixToEight,
    #[serde(rename = "9-11")]
    NineToEleven,
    #[serde(rename = "12-14")]
    TwelveToFourteen,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [
        AgeBand::SixToEight,
        AgeBand::NineToEleven,
        AgeBand::TwelveToFourteen,
    ];

    /// Map a child's age to a band. Ages outside 6..=14 fall back to 6-8.
    pub fn for_age(age: u32) -> AgeBand {
        match age {
            6..=8 => AgeBand::SixToEight,
            9..=11 => AgeBand::NineToEleven,
            12..=14 => AgeBand::TwelveToFourteen,
            _ => AgeBand::default(),
        }
    }

    /// Lenient label parsing: unrecognized labels normalize to 6-8.
    pub fn from_label_or_default(label: &str) -> AgeBand {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(label, "unknown age band, falling back to 6-8");
            AgeBand::default()
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::SixToEight => "6-8",
            AgeBand::NineToEleven => "9-11",
            AgeBand::TwelveToFourteen => "12-14",
        }
    }

    /// The six question kinds generated for this band.
    pub fn kinds(&self) -> &'static [QuestionKind] {
        match self {
            AgeBand::SixToEight => &[
                QuestionKind::ColorPattern,
                QuestionKind::ShapePattern,
                QuestionKind::AnimalPattern,
                QuestionKind::NumberSequence,
                QuestionKind::PictureAnalogy,
                QuestionKind::SizeOrder,
            ],
            AgeBand::NineToEleven => &[
                QuestionKind::MatrixPattern,
                QuestionKind::NumberSeries,
                QuestionKind::WordAnalogy,
                QuestionKind::PatternCompletion,
                QuestionKind::LogicalSequence,
                QuestionKind::CodeDecoding,
            ],
            AgeBand::TwelveToFourteen => &[
                QuestionKind::AdvancedMatrix,
                QuestionKind::AbstractReasoning,
                QuestionKind::ComplexAnalogy,
                QuestionKind::SpatialReasoning,
                QuestionKind::DeductiveLogic,
                QuestionKind::VerbalReasoning,
            ],
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBand {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "6-8" => Ok(AgeBand::SixToEight),
            "9-11" => Ok(AgeBand::NineToEleven),
            "12-14" => Ok(AgeBand::TwelveToFourteen),
            other => Err(QuizError::UnknownAgeBand(other.to_string())),
        }
    }
}

/// Question difficulty on a 1..=4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(level: u8) -> Result<Self, QuizError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Difficulty(level))
        } else {
            Err(QuizError::InvalidDifficulty(level))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub(crate) const fn of(level: u8) -> Difficulty {
        Difficulty(level)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(2)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QuizError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question type tag. Each age band owns six of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    // 6-8
    ColorPattern,
    ShapePattern,
    AnimalPattern,
    NumberSequence,
    PictureAnalogy,
    SizeOrder,
    // 9-11
    MatrixPattern,
    NumberSeries,
    WordAnalogy,
    PatternCompletion,
    LogicalSequence,
    CodeDecoding,
    // 12-14
    AdvancedMatrix,
    AbstractReasoning,
    ComplexAnalogy,
    SpatialReasoning,
    DeductiveLogic,
    VerbalReasoning,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::ColorPattern => "color_pattern",
            QuestionKind::ShapePattern => "shape_pattern",
            QuestionKind::AnimalPattern => "animal_pattern",
            QuestionKind::NumberSequence => "number_sequence",
            QuestionKind::PictureAnalogy => "picture_analogy",
            QuestionKind::SizeOrder => "size_order",
            QuestionKind::MatrixPattern => "matrix_pattern",
            QuestionKind::NumberSeries => "number_series",
            QuestionKind::WordAnalogy => "word_analogy",
            QuestionKind::PatternCompletion => "pattern_completion",
            QuestionKind::LogicalSequence => "logical_sequence",
            QuestionKind::CodeDecoding => "code_decoding",
            QuestionKind::AdvancedMatrix => "advanced_matrix",
            QuestionKind::AbstractReasoning => "abstract_reasoning",
            QuestionKind::ComplexAnalogy => "complex_analogy",
            QuestionKind::SpatialReasoning => "spatial_reasoning",
            QuestionKind::DeductiveLogic => "deductive_logic",
            QuestionKind::VerbalReasoning => "verbal_reasoning",
        }
    }

    /// The band whose catalog contains this kind.
    pub fn band(&self) -> AgeBand {
        AgeBand::ALL
            .into_iter()
            .find(|band| band.kinds().contains(self))
            .unwrap_or_default()
    }

    /// Every cognitive domain this kind counts toward.
    pub fn domains(&self) -> impl Iterator<Item = CognitiveDomain> + '_ {
        CognitiveDomain::ALL
            .into_iter()
            .filter(move |domain| domain.kinds().contains(self))
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeBand::ALL
            .iter()
            .flat_map(|band| band.kinds().iter().copied())
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QuizError::UnknownQuestionKind(s.to_string()))
    }
}

/// Coarse grouping of question kinds used for domain-level analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitiveDomain {
    #[serde(rename = "Pattern Recognition")]
    PatternRecognition,
    #[serde(rename = "Matrix Reasoning")]
    MatrixReasoning,
    #[serde(rename = "Verbal Analogy")]
    VerbalAnalogy,
    #[serde(rename = "Sequential Reasoning")]
    SequentialReasoning,
    #[serde(rename = "Abstract Reasoning")]
    AbstractReasoning,
    #[serde(rename = "Spatial Reasoning")]
    SpatialReasoning,
}

impl CognitiveDomain {
    pub const ALL: [CognitiveDomain; 6] = [
        CognitiveDomain::PatternRecognition,
        CognitiveDomain::MatrixReasoning,
        CognitiveDomain::VerbalAnalogy,
        CognitiveDomain::SequentialReasoning,
        CognitiveDomain::AbstractReasoning,
        CognitiveDomain::SpatialReasoning,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CognitiveDomain::PatternRecognition => "Pattern Recognition",
            CognitiveDomain::MatrixReasoning => "Matrix Reasoning",
            CognitiveDomain::VerbalAnalogy => "Verbal Analogy",
            CognitiveDomain::SequentialReasoning => "Sequential Reasoning",
            CognitiveDomain::AbstractReasoning => "Abstract Reasoning",
            CognitiveDomain::SpatialReasoning => "Spatial Reasoning",
        }
    }

    /// The fixed domain table.
    ///
    /// `NumberSequence` and `SizeOrder` appear under two domains each, so an
    /// answer to one of them increments both domains' counters.
    pub fn kinds(&self) -> &'static [QuestionKind] {
        match self {
            CognitiveDomain::PatternRecognition => &[
                QuestionKind::ColorPattern,
                QuestionKind::ShapePattern,
                QuestionKind::AnimalPattern,
                QuestionKind::NumberSequence,
                QuestionKind::PatternCompletion,
            ],
            CognitiveDomain::MatrixReasoning => {
                &[QuestionKind::MatrixPattern, QuestionKind::AdvancedMatrix]
            }
            CognitiveDomain::VerbalAnalogy => &[
                QuestionKind::PictureAnalogy,
                QuestionKind::WordAnalogy,
                QuestionKind::ComplexAnalogy,
                QuestionKind::VerbalReasoning,
            ],
            CognitiveDomain::SequentialReasoning => &[
                QuestionKind::NumberSequence,
                QuestionKind::NumberSeries,
                QuestionKind::LogicalSequence,
                QuestionKind::SizeOrder,
            ],
            CognitiveDomain::AbstractReasoning => &[
                QuestionKind::AbstractReasoning,
                QuestionKind::DeductiveLogic,
                QuestionKind::CodeDecoding,
            ],
            CognitiveDomain::SpatialReasoning => {
                &[QuestionKind::SpatialReasoning, QuestionKind::SizeOrder]
            }
        }
    }
}

impl fmt::Display for CognitiveDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated multiple-choice item. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the pool it was generated into.
    pub id: String,
    /// Generator that produced this question.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Display text.
    pub question: String,
    /// Exactly four candidate answers.
    pub options: Vec<String>,
    /// One of `options`.
    pub correct_answer: String,
    pub difficulty: Difficulty,
    /// Human-readable grouping label (e.g. "Color Patterns").
    pub category: String,
}

impl Question {
    /// Check the option-set invariants.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::MalformedQuestion {
                id: self.id.clone(),
                reason: format!(
                    "expected {OPTION_COUNT} options, found {}",
                    self.options.len()
                ),
            });
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuizError::MalformedQuestion {
                id: self.id.clone(),
                reason: format!(
                    "correct answer '{}' missing from options",
                    self.correct_answer
                ),
            });
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// An answer submitted by the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: String,
    #[serde(default = "unknown_category")]
    pub category: String,
    /// The option the child picked.
    #[serde(default)]
    pub answer: String,
    /// Correctness already resolved by the caller, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

fn unknown_category() -> String {
    UNKNOWN_CATEGORY.to_string()
}

impl SubmittedAnswer {
    /// Build an answer to `question`, leaving correctness for the analyzer.
    pub fn to_question(question: &Question, answer: impl Into<String>) -> Self {
        Self {
            question_id: question.id.clone(),
            category: question.category.clone(),
            answer: answer.into(),
            is_correct: None,
        }
    }
}
