//! The `cogquiz progress` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use cogquiz_core::history::HistoryStore;
use cogquiz_core::load_config_from;

pub fn execute(subject: String, format: String, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let store = HistoryStore::load(&config.history_path)?;
    let records = store.for_subject(&subject);
    let summary = store.progress_for(&subject);

    match format.as_str() {
        "json" => {
            let value = json!({
                "subject": subject,
                "records": records,
                "progress": summary,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        "markdown" | "md" => {
            println!("## Progress for {subject}\n");
            match &summary {
                Some(summary) => println!("{}", summary.to_markdown()),
                None => println!("{}", not_enough(records.len())),
            }
        }
        _ => {
            if records.is_empty() {
                println!("No tests recorded for {subject}.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Taken", "Ages", "Score", "Correct"]);
            for r in &records {
                table.add_row(vec![
                    Cell::new(r.taken_at.format("%Y-%m-%d %H:%M")),
                    Cell::new(r.age_band),
                    Cell::new(format!("{:.2}%", r.report.overall_score)),
                    Cell::new(format!(
                        "{}/{}",
                        r.report.total_correct, r.report.total_questions
                    )),
                ]);
            }
            println!("{table}");

            match summary {
                Some(s) => println!(
                    "\n{} tests: {:.2}% -> {:.2}% ({:+.2}), average {:.2}%, {}",
                    s.test_count,
                    s.first_score,
                    s.latest_score,
                    s.improvement,
                    s.average_score,
                    s.trend
                ),
                None => println!("\n{}", not_enough(records.len())),
            }
        }
    }

    Ok(())
}

fn not_enough(found: usize) -> String {
    format!("Not enough tests to measure progress (need 2, found {found}).")
}
