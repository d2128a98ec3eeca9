//! Age-banded question generators.
//!
//! Every [`QuestionKind`] maps to one pure generator function taking an RNG.
//! A batch for a band draws a kind uniformly from the band's six kinds for
//! each item, then lets that kind's generator build the question body.
//!
//! Generators come in two flavours:
//! - procedural: derive a pattern from a fixed symbol palette, hide one
//!   element, and sample distractors from the same palette;
//! - canned: choose one of a few hard-coded templates with fixed options.
//!
//! In both cases the correct answer is forced into the option set before the
//! question is returned.

mod early;
mod middle;
mod senior;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::{AgeBand, Difficulty, Question, QuestionKind, OPTION_COUNT};

/// Question text and options before the question is numbered into a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBody {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionBody {
    /// Body with distractors drawn from `palette`.
    pub(crate) fn sampled<R: Rng + ?Sized>(
        rng: &mut R,
        text: String,
        palette: &[&str],
        correct_answer: &str,
    ) -> Self {
        let mut options: Vec<String> = palette
            .choose_multiple(rng, OPTION_COUNT)
            .map(|s| s.to_string())
            .collect();
        force_correct(rng, &mut options, correct_answer);
        Self {
            text,
            options,
            correct_answer: correct_answer.to_string(),
        }
    }
}

/// A hard-coded question with its own option set.
pub(crate) struct Template {
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub answer: &'static str,
}

/// Pick one of `templates` uniformly and render it under `intro`.
pub(crate) fn canned<R: Rng + ?Sized>(
    rng: &mut R,
    intro: &str,
    templates: &[Template],
) -> QuestionBody {
    let template = &templates[rng.random_range(0..templates.len())];
    let text = if intro.is_empty() {
        template.prompt.to_string()
    } else {
        format!("{intro}\n{}", template.prompt)
    };
    let mut options: Vec<String> = template.options.iter().map(|s| s.to_string()).collect();
    force_correct(rng, &mut options, template.answer);
    QuestionBody {
        text,
        options,
        correct_answer: template.answer.to_string(),
    }
}

/// Replace a random option with `correct` unless it is already present.
fn force_correct<R: Rng + ?Sized>(rng: &mut R, options: &mut Vec<String>, correct: &str) {
    if options.iter().any(|o| o == correct) {
        return;
    }
    if options.len() < OPTION_COUNT {
        options.push(correct.to_string());
    } else {
        let slot = rng.random_range(0..options.len());
        options[slot] = correct.to_string();
    }
}

impl QuestionKind {
    /// Category label attached to every question of this kind.
    pub fn category(&self) -> &'static str {
        match self {
            QuestionKind::ColorPattern => "Color Patterns",
            QuestionKind::ShapePattern => "Shape Patterns",
            QuestionKind::AnimalPattern => "Animal Patterns",
            QuestionKind::NumberSequence => "Number Patterns",
            QuestionKind::PictureAnalogy => "Picture Analogies",
            QuestionKind::SizeOrder => "Size Ordering",
            QuestionKind::MatrixPattern => "Matrix Reasoning",
            QuestionKind::NumberSeries => "Number Series",
            QuestionKind::WordAnalogy => "Verbal Reasoning",
            QuestionKind::PatternCompletion => "Pattern Completion",
            QuestionKind::LogicalSequence => "Logical Sequencing",
            QuestionKind::CodeDecoding => "Code Decoding",
            QuestionKind::AdvancedMatrix => "Advanced Matrix",
            QuestionKind::AbstractReasoning => "Abstract Reasoning",
            QuestionKind::ComplexAnalogy => "Complex Analogies",
            QuestionKind::SpatialReasoning => "Spatial Reasoning",
            QuestionKind::DeductiveLogic => "Deductive Logic",
            QuestionKind::VerbalReasoning => "Verbal Reasoning",
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        let level = match self {
            QuestionKind::ColorPattern | QuestionKind::ShapePattern => 1,
            QuestionKind::AnimalPattern
            | QuestionKind::NumberSequence
            | QuestionKind::PictureAnalogy
            | QuestionKind::SizeOrder
            | QuestionKind::MatrixPattern
            | QuestionKind::NumberSeries
            | QuestionKind::PatternCompletion => 2,
            QuestionKind::WordAnalogy
            | QuestionKind::LogicalSequence
            | QuestionKind::CodeDecoding
            | QuestionKind::AdvancedMatrix
            | QuestionKind::AbstractReasoning
            | QuestionKind::ComplexAnalogy
            | QuestionKind::SpatialReasoning
            | QuestionKind::VerbalReasoning => 3,
            QuestionKind::DeductiveLogic => 4,
        };
        Difficulty::of(level)
    }

    /// Run this kind's generator.
    pub fn generate_body<R: Rng + ?Sized>(&self, rng: &mut R) -> QuestionBody {
        match self {
            QuestionKind::ColorPattern => early::color_pattern(rng),
            QuestionKind::ShapePattern => early::shape_pattern(rng),
            QuestionKind::AnimalPattern => early::animal_pattern(rng),
            QuestionKind::NumberSequence => early::number_sequence(rng),
            QuestionKind::PictureAnalogy => early::picture_analogy(rng),
            QuestionKind::SizeOrder => early::size_order(rng),
            QuestionKind::MatrixPattern => middle::matrix_pattern(rng),
            QuestionKind::NumberSeries => middle::number_series(rng),
            QuestionKind::WordAnalogy => middle::word_analogy(rng),
            QuestionKind::PatternCompletion => middle::pattern_completion(rng),
            QuestionKind::LogicalSequence => middle::logical_sequence(rng),
            QuestionKind::CodeDecoding => middle::code_decoding(rng),
            QuestionKind::AdvancedMatrix => senior::advanced_matrix(rng),
            QuestionKind::AbstractReasoning => senior::abstract_reasoning(rng),
            QuestionKind::ComplexAnalogy => senior::complex_analogy(rng),
            QuestionKind::SpatialReasoning => senior::spatial_reasoning(rng),
            QuestionKind::DeductiveLogic => senior::deductive_logic(rng),
            QuestionKind::VerbalReasoning => senior::verbal_reasoning(rng),
        }
    }
}

/// Build a single question of `kind` with the given id.
pub fn generate_question<R: Rng + ?Sized>(kind: QuestionKind, id: String, rng: &mut R) -> Question {
    let body = kind.generate_body(rng);
    let question = Question {
        id,
        kind,
        question: body.text,
        options: body.options,
        correct_answer: body.correct_answer,
        difficulty: kind.difficulty(),
        category: kind.category().to_string(),
    };
    debug_assert!(question.validate().is_ok(), "{question:?}");
    question
}

/// Generate `count` questions for `band`, numbered from 1.
pub fn generate<R: Rng + ?Sized>(band: AgeBand, count: usize, rng: &mut R) -> Vec<Question> {
    generate_from(band, 1, count, rng)
}

/// Generate `count` questions for `band`, numbering ids from `first_number`.
///
/// Ids take the form `{band}-{n}`, so batches appended to an existing pool
/// stay unique when `first_number` continues the pool's numbering.
pub fn generate_from<R: Rng + ?Sized>(
    band: AgeBand,
    first_number: usize,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let kinds = band.kinds();
    (first_number..first_number + count)
        .map(|n| {
            let kind = kinds[rng.random_range(0..kinds.len())];
            generate_question(kind, format!("{band}-{n}"), rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn every_generated_question_holds_its_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for band in AgeBand::ALL {
            for q in generate(band, 300, &mut rng) {
                assert_eq!(q.options.len(), OPTION_COUNT, "{q:?}");
                assert!(q.options.contains(&q.correct_answer), "{q:?}");
                assert!((1..=4).contains(&q.difficulty.level()));
                assert!(q.validate().is_ok());
            }
        }
    }

    #[test]
    fn every_kind_generates_valid_questions() {
        let mut rng = StdRng::seed_from_u64(11);
        for band in AgeBand::ALL {
            for &kind in band.kinds() {
                for i in 0..50 {
                    let q = generate_question(kind, format!("t-{i}"), &mut rng);
                    assert_eq!(q.kind, kind);
                    assert_eq!(q.category, kind.category());
                    assert!(q.validate().is_ok(), "{q:?}");
                }
            }
        }
    }

    #[test]
    fn batch_only_uses_the_bands_kinds() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate(AgeBand::NineToEleven, 200, &mut rng);
        let allowed: HashSet<_> = AgeBand::NineToEleven.kinds().iter().collect();
        assert!(batch.iter().all(|q| allowed.contains(&q.kind)));
        // 200 uniform draws over six kinds hit every kind
        let seen: HashSet<_> = batch.iter().map(|q| q.kind).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn ids_are_unique_and_continue_numbering() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = generate(AgeBand::TwelveToFourteen, 10, &mut rng);
        let second = generate_from(AgeBand::TwelveToFourteen, 11, 5, &mut rng);
        assert_eq!(first[0].id, "12-14-1");
        assert_eq!(second[0].id, "12-14-11");
        let ids: HashSet<_> = first.iter().chain(&second).map(|q| q.id.clone()).collect();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn same_seed_same_batch() {
        let a = generate(AgeBand::SixToEight, 20, &mut StdRng::seed_from_u64(99));
        let b = generate(AgeBand::SixToEight, 20, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn force_correct_replaces_a_slot_when_missing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut options: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        force_correct(&mut rng, &mut options, "z");
        assert_eq!(options.len(), OPTION_COUNT);
        assert!(options.contains(&"z".to_string()));

        let mut present = options.clone();
        force_correct(&mut rng, &mut present, "z");
        assert_eq!(present, options);
    }

    #[test]
    fn difficulty_distribution_differs_per_band() {
        let levels = |band: AgeBand| -> Vec<u8> {
            band.kinds().iter().map(|k| k.difficulty().level()).collect()
        };
        assert!(levels(AgeBand::SixToEight).contains(&1));
        assert!(!levels(AgeBand::TwelveToFourteen).contains(&1));
        assert!(levels(AgeBand::TwelveToFourteen).contains(&4));
    }
}
