//! The `cogquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("cogquiz.toml").exists() {
        println!("cogquiz.toml already exists, skipping.");
    } else {
        std::fs::write("cogquiz.toml", SAMPLE_CONFIG)?;
        println!("Created cogquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: cogquiz questions --age 7 --output quiz.json");
    println!("  2. Run: cogquiz simulate --age 7 --subject demo --record");
    println!("  3. Run: cogquiz progress --subject demo");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# cogquiz configuration

# Questions generated per age band when its pool is first used
pool_size = 500
questions_per_test = 10
history_path = "./cogquiz-history.json"

[thresholds]
category_min_answers = 3
category_weak_below = 50.0
category_strong_above = 80.0
domain_min_answers = 5
domain_weak_below = 60.0
domain_strong_above = 75.0
high_priority_below = 40.0
generic_fill_below = 3
max_recommendations = 5
"#;
