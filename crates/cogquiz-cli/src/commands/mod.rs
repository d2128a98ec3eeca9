pub mod analyze;
pub mod init;
pub mod progress;
pub mod questions;
pub mod simulate;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use serde::de::DeserializeOwned;

use cogquiz_core::history::{HistoryStore, ScoreRecord};
use cogquiz_core::{AgeBand, CogquizConfig, ScoreReport};

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {what} in {}", path.display()))
}

/// Print a score report in the requested format.
pub fn print_report(report: &ScoreReport, format: &str) -> Result<()> {
    match format {
        "markdown" | "md" => println!("{}", report.to_markdown()),
        "json" => println!("{}", serde_json::to_string_pretty(report)?),
        _ => print_report_text(report),
    }
    Ok(())
}

fn print_report_text(report: &ScoreReport) {
    println!(
        "Score: {:.2}% ({}/{} correct)",
        report.overall_score, report.total_correct, report.total_questions
    );

    if !report.category_stats.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Correct", "Total", "Accuracy"]);
        for c in &report.category_stats {
            table.add_row(vec![
                Cell::new(&c.category),
                Cell::new(c.correct),
                Cell::new(c.total),
                Cell::new(format!("{:.1}%", c.accuracy)),
            ]);
        }
        println!("\n{table}");
    }

    let touched: Vec<_> = report.domain_stats.iter().filter(|d| d.total > 0).collect();
    if !touched.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Domain", "Correct", "Total", "Accuracy"]);
        for d in touched {
            table.add_row(vec![
                Cell::new(d.domain),
                Cell::new(d.correct),
                Cell::new(d.total),
                Cell::new(format!("{:.1}%", d.accuracy)),
            ]);
        }
        println!("\n{table}");
    }

    if !report.strong_points.is_empty() {
        println!("\nStrengths:");
        for p in &report.strong_points {
            println!("  {} ({:.1}%)", p.area, p.accuracy);
        }
    }
    if !report.weak_points.is_empty() {
        println!("\nNeeds practice:");
        for p in &report.weak_points {
            println!("  {} ({:.1}%)", p.area, p.accuracy);
        }
    }
    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for r in &report.recommendations {
            println!("  [{}] {}: {}", r.priority, r.area, r.recommendation);
        }
    }
}

/// Append a report to the configured history store.
pub fn record_score(
    config: &CogquizConfig,
    subject: &str,
    band: AgeBand,
    report: &ScoreReport,
) -> Result<()> {
    let mut store = HistoryStore::load(&config.history_path)?;
    store.append(ScoreRecord::new(subject, band, report.clone()));
    store.save()?;
    eprintln!(
        "Recorded score for {subject} in {} ({} test(s))",
        store.path().display(),
        store.for_subject(subject).len()
    );
    Ok(())
}
