//! The `cogquiz analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use cogquiz_core::{load_config_from, AgeBand, Question, ResultAnalyzer, SubmittedAnswer};

use super::{load_json, print_report, record_score};

pub fn execute(
    questions_path: PathBuf,
    answers_path: PathBuf,
    subject: Option<String>,
    record: bool,
    format: String,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;

    let questions: Vec<Question> = load_json(&questions_path, "questions")?;
    let answers: Vec<SubmittedAnswer> = load_json(&answers_path, "answers")?;
    tracing::debug!(
        questions = questions.len(),
        answers = answers.len(),
        "loaded analysis inputs"
    );

    let analyzer = ResultAnalyzer::from_config(&config);
    let report = analyzer.analyze(&answers, &questions);

    if record {
        if let Some(subject) = subject.as_deref() {
            record_score(&config, subject, band_of(&questions), &report)?;
        }
    }

    print_report(&report, &format)
}

/// Band of the quiz, taken from its first question.
fn band_of(questions: &[Question]) -> AgeBand {
    questions.first().map(|q| q.kind.band()).unwrap_or_default()
}
