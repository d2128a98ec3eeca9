//! cogquiz CLI: generate quizzes, analyze answers, and track progress.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "cogquiz",
    version,
    about = "Children's cognitive quiz generator and result analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample questions for an age or age band
    Questions {
        /// Child's age in years (mapped to a band)
        #[arg(long, conflicts_with = "band", required_unless_present = "band")]
        age: Option<u32>,

        /// Age band label: 6-8, 9-11, 12-14
        #[arg(long)]
        band: Option<String>,

        /// Number of questions (default: questions_per_test from config)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the questions as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze submitted answers against their questions
    Analyze {
        /// Questions JSON file
        #[arg(long)]
        questions: PathBuf,

        /// Answers JSON file
        #[arg(long)]
        answers: PathBuf,

        /// Child identifier for the history store
        #[arg(long)]
        subject: Option<String>,

        /// Append the result to the history store
        #[arg(long, requires = "subject")]
        record: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a quiz, answer it with simulated answers, and analyze it
    Simulate {
        /// Child's age in years
        #[arg(long)]
        age: u32,

        /// Number of questions (default: questions_per_test from config)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Child identifier for the history store
        #[arg(long)]
        subject: Option<String>,

        /// Append the result to the history store
        #[arg(long, requires = "subject")]
        record: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show score history and progress for a child
    Progress {
        /// Child identifier
        #[arg(long)]
        subject: String,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a questions file for malformed questions
    Validate {
        /// Questions JSON file
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create a starter cogquiz.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cogquiz=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Questions {
            age,
            band,
            count,
            seed,
            format,
            output,
            config,
        } => commands::questions::execute(age, band, count, seed, format, output, config),
        Commands::Analyze {
            questions,
            answers,
            subject,
            record,
            format,
            config,
        } => commands::analyze::execute(questions, answers, subject, record, format, config),
        Commands::Simulate {
            age,
            count,
            seed,
            subject,
            record,
            format,
            config,
        } => commands::simulate::execute(age, count, seed, subject, record, format, config),
        Commands::Progress {
            subject,
            format,
            config,
        } => commands::progress::execute(subject, format, config),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
