//! The `cogquiz questions` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cogquiz_core::{load_config_from, AgeBand, Question, QuestionBank};

pub fn execute(
    age: Option<u32>,
    band: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    format: String,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;

    let band = match (age, band) {
        (Some(age), _) => AgeBand::for_age(age),
        (None, Some(label)) => label.parse::<AgeBand>()?,
        (None, None) => anyhow::bail!("either --age or --band is required"),
    };
    let count = count.unwrap_or(config.questions_per_test);

    let bank = QuestionBank::from_config(&config);
    let questions = match seed {
        Some(seed) => {
            bank.get_questions_with_rng(band, count, &mut StdRng::seed_from_u64(seed))
        }
        None => bank.get_questions(band, count),
    };

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&questions)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write questions to {}", path.display()))?;
        println!(
            "Wrote {} question(s) for ages {band} to {}",
            questions.len(),
            path.display()
        );
        return Ok(());
    }

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&questions)?),
        _ => print_text(band, &questions),
    }

    Ok(())
}

fn print_text(band: AgeBand, questions: &[Question]) {
    println!("{} question(s) for ages {band}\n", questions.len());
    for (n, q) in questions.iter().enumerate() {
        println!(
            "{}. [{}, difficulty {}] {}",
            n + 1,
            q.category,
            q.difficulty,
            q.question
        );
        for (letter, option) in ('a'..='z').zip(&q.options) {
            println!("   {letter}) {option}");
        }
        println!();
    }
}
