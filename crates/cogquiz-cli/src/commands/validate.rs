//! The `cogquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use cogquiz_core::Question;

use super::load_json;

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let questions: Vec<Question> = load_json(&questions_path, "questions")?;
    println!(
        "Questions file: {} ({} questions)",
        questions_path.display(),
        questions.len()
    );

    let mut malformed = 0;
    for q in &questions {
        if let Err(e) = q.validate() {
            println!("  [{}] {e}", q.id);
            malformed += 1;
        }
    }

    if malformed > 0 {
        anyhow::bail!("{malformed} malformed question(s) found");
    }
    println!("All questions valid.");
    Ok(())
}
