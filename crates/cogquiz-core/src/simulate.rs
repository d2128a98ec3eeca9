//! Simulated answers for demos and benchmarks.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::{Question, SubmittedAnswer};

/// Chance of answering a question of the given difficulty level correctly.
pub fn success_probability(level: u8) -> f64 {
    (0.9 - 0.1 * f64::from(level)).clamp(0.0, 1.0)
}

/// Answer every question the way a plausible child might: correctly with
/// [`success_probability`], otherwise with one of the wrong options.
pub fn simulate_answers<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> Vec<SubmittedAnswer> {
    questions
        .iter()
        .map(|q| {
            let hit = rng.random_bool(success_probability(q.difficulty.level()));
            let answer = if hit {
                q.correct_answer.clone()
            } else {
                let wrong: Vec<&String> = q.options.iter().filter(|o| !q.is_correct(o)).collect();
                wrong
                    .choose(rng)
                    .map(|o| o.to_string())
                    .unwrap_or_default()
            };
            SubmittedAnswer::to_question(q, answer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use crate::model::AgeBand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn probability_drops_with_difficulty() {
        assert!((success_probability(1) - 0.8).abs() < 1e-9);
        assert!((success_probability(4) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn answers_follow_question_order_and_options() {
        let mut rng = StdRng::seed_from_u64(21);
        let questions = generator::generate(AgeBand::NineToEleven, 30, &mut rng);
        let answers = simulate_answers(&questions, &mut rng);

        assert_eq!(answers.len(), questions.len());
        for (a, q) in answers.iter().zip(&questions) {
            assert_eq!(a.question_id, q.id);
            assert_eq!(a.category, q.category);
            assert!(q.options.contains(&a.answer));
            assert!(a.is_correct.is_none());
        }
    }

    #[test]
    fn mix_of_right_and_wrong_answers() {
        let mut rng = StdRng::seed_from_u64(5);
        let questions = generator::generate(AgeBand::SixToEight, 200, &mut rng);
        let answers = simulate_answers(&questions, &mut rng);
        let right = answers
            .iter()
            .zip(&questions)
            .filter(|(a, q)| q.is_correct(&a.answer))
            .count();
        assert!(right > 100 && right < 190, "right = {right}");
    }
}
