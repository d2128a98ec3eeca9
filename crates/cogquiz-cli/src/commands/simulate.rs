//! The `cogquiz simulate` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cogquiz_core::simulate::simulate_answers;
use cogquiz_core::{load_config_from, AgeBand, QuestionBank, ResultAnalyzer};

use super::{print_report, record_score};

pub fn execute(
    age: u32,
    count: Option<usize>,
    seed: Option<u64>,
    subject: Option<String>,
    record: bool,
    format: String,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let band = AgeBand::for_age(age);
    let count = count.unwrap_or(config.questions_per_test);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let bank = QuestionBank::from_config(&config);
    let questions = bank.get_questions_with_rng(band, count, &mut rng);
    let answers = simulate_answers(&questions, &mut rng);

    let right = answers
        .iter()
        .zip(&questions)
        .filter(|(a, q)| q.is_correct(&a.answer))
        .count();
    tracing::info!(%band, questions = questions.len(), right, "simulated quiz");

    let report = ResultAnalyzer::from_config(&config).analyze(&answers, &questions);

    if record {
        if let Some(subject) = subject.as_deref() {
            record_score(&config, subject, band, &report)?;
        }
    }

    print_report(&report, &format)
}
