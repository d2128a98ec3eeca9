//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cogquiz(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cogquiz").unwrap();
    cmd.current_dir(dir)
        .env("COGQUIZ_HISTORY", dir.join("history.json"))
        .env("HOME", dir);
    cmd
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

fn question_json(id: &str, kind: &str, category: &str) -> String {
    format!(
        r#"{{"id":"{id}","type":"{kind}","question":"?","options":["a","b","c","d"],"correct_answer":"a","difficulty":2,"category":"{category}"}}"#
    )
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cognitive quiz"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cogquiz"));
}

#[test]
fn questions_as_json() {
    let dir = TempDir::new().unwrap();
    let output = cogquiz(dir.path())
        .args(["questions", "--age", "7", "--count", "5", "--seed", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let questions = stdout_json(&output.stdout);
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for q in questions {
        assert!(q["id"].as_str().unwrap().starts_with("6-8-"));
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
    }
}

#[test]
fn seeded_questions_are_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        cogquiz(dir.path())
            .args(["questions", "--band", "12-14", "--count", "8", "--seed", "42", "--format", "json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn questions_as_text() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .args(["questions", "--band", "9-11", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 question(s) for ages 9-11"))
        .stdout(predicate::str::contains("   a) "));
}

#[test]
fn questions_reject_unknown_band() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .args(["questions", "--band", "3-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("3-5"));
}

#[test]
fn questions_need_age_or_band() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path()).arg("questions").assert().failure();
}

#[test]
fn written_questions_validate() {
    let dir = TempDir::new().unwrap();
    let quiz = dir.path().join("quiz").join("q.json");

    cogquiz(dir.path())
        .args(["questions", "--age", "13", "--count", "12", "--output"])
        .arg(&quiz)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 question(s)"));

    cogquiz(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&quiz)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 questions"))
        .stdout(predicate::str::contains("All questions valid"));
}

#[test]
fn validate_reports_malformed_questions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    let bad = r#"{"id":"bad-1","type":"word_analogy","question":"?","options":["a","b","c","d"],"correct_answer":"z","difficulty":3,"category":"Verbal Reasoning"}"#;
    std::fs::write(
        &path,
        format!(
            "[{},{}]",
            question_json("ok-1", "color_pattern", "Color Patterns"),
            bad
        ),
    )
    .unwrap();

    cogquiz(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[bad-1]"))
        .stderr(predicate::str::contains("1 malformed question(s)"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .args(["validate", "--questions", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn analyze_scores_answers() {
    let dir = TempDir::new().unwrap();
    let questions: Vec<String> = (1..=5)
        .map(|n| question_json(&format!("q{n}"), "color_pattern", "Color Patterns"))
        .collect();
    let answers: Vec<String> = (1..=5)
        .map(|n| {
            let pick = if n == 1 { "a" } else { "b" };
            format!(r#"{{"question_id":"q{n}","category":"Color Patterns","answer":"{pick}"}}"#)
        })
        .collect();
    let q_path = dir.path().join("q.json");
    let a_path = dir.path().join("a.json");
    std::fs::write(&q_path, format!("[{}]", questions.join(","))).unwrap();
    std::fs::write(&a_path, format!("[{}]", answers.join(","))).unwrap();

    let output = cogquiz(dir.path())
        .arg("analyze")
        .arg("--questions")
        .arg(&q_path)
        .arg("--answers")
        .arg(&a_path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output.stdout);
    assert_eq!(report["overall_score"], 20.0);
    assert_eq!(report["weak_points"][0]["area"], "Color Patterns");
    assert_eq!(report["weak_points"][0]["accuracy"], 20.0);

    cogquiz(dir.path())
        .arg("analyze")
        .arg("--questions")
        .arg(&q_path)
        .arg("--answers")
        .arg(&a_path)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Score:** 20.00% (1/5 correct)"));
}

#[test]
fn record_requires_subject() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .args(["simulate", "--age", "8", "--record"])
        .assert()
        .failure();
}

#[test]
fn simulate_records_and_progress_reads_back() {
    let dir = TempDir::new().unwrap();

    for seed in ["1", "2"] {
        cogquiz(dir.path())
            .args(["simulate", "--age", "10", "--count", "20", "--seed", seed])
            .args(["--subject", "ana", "--record"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Score:"));
    }
    assert!(dir.path().join("history.json").exists());

    let output = cogquiz(dir.path())
        .args(["progress", "--subject", "ana", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let progress = stdout_json(&output.stdout);
    assert_eq!(progress["records"].as_array().unwrap().len(), 2);
    assert_eq!(progress["progress"]["test_count"], 2);

    cogquiz(dir.path())
        .args(["progress", "--subject", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 tests:"));
}

#[test]
fn progress_without_history() {
    let dir = TempDir::new().unwrap();
    cogquiz(dir.path())
        .args(["progress", "--subject", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tests recorded for nobody"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    cogquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cogquiz.toml"));
    assert!(dir.path().join("cogquiz.toml").exists());

    cogquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // the generated config is picked up by later commands
    cogquiz(dir.path())
        .args(["questions", "--age", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 question(s) for ages 9-11"));
}
