//! Wordle Opening-Word Analyzer - CLI
//!
//! Prints the letter distribution and the best near-disjoint opening words, and
//! exports them as CSV files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_openers::{
    analysis::{build_distribution, rank_words},
    commands::{Report, analyze_word, build_report, export_report},
    core::Word,
    output::{
        print_analysis_result, print_letter_distribution, print_selections, print_top_words,
    },
    wordlists::{self, EMBEDDED_SOURCE, GUESSABLE, PLAYABLE},
};

#[derive(Parser)]
#[command(
    name = "wordle_openers",
    about = "Rank Wordle opening guesses by letter coverage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Playable words (letter statistics): 'embedded' (default) or path to file
    #[arg(short, long, global = true, default_value = EMBEDDED_SOURCE)]
    playable: String,

    /// Guessable words (ranked): 'embedded' (default) or path to file
    #[arg(short, long, global = true, default_value = EMBEDDED_SOURCE)]
    guessable: String,

    /// Directory for CSV exports
    #[arg(short, long, global = true, default_value = "out")]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: distribution, ranking and overlap selections (default)
    Report {
        /// Print only, do not write CSV files
        #[arg(long)]
        no_export: bool,

        /// Also print the N best ranked words
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Analyze the letter coverage of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Load both word lists from their configured sources
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let playable = wordlists::resolve(&cli.playable, PLAYABLE)
        .with_context(|| format!("Failed to load playable words from '{}'", cli.playable))?;
    let guessable = wordlists::resolve(&cli.guessable, GUESSABLE)
        .with_context(|| format!("Failed to load guessable words from '{}'", cli.guessable))?;

    log::info!(
        "{} playable words, {} guessable words",
        playable.len(),
        guessable.len()
    );
    Ok((playable, guessable))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (playable, guessable) = load_wordlists(&cli)?;

    let command = cli.command.unwrap_or(Commands::Report {
        no_export: false,
        top: None,
    });

    match command {
        Commands::Report { no_export, top } => {
            let out_dir = (!no_export).then_some(cli.out_dir.as_path());
            run_report_command(&playable, &guessable, out_dir, top)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &playable, &guessable),
    }
}

fn run_report_command(
    playable: &[Word],
    guessable: &[Word],
    out_dir: Option<&Path>,
    top: Option<usize>,
) -> Result<()> {
    let report = with_spinner(
        format!("Ranking {} words...", guessable.len()),
        || build_report(playable, guessable),
    )??;

    print_report(&report, top);

    if let Some(dir) = out_dir {
        export_report(&report, dir)
            .with_context(|| format!("Failed to export to {}", dir.display()))?;
    }

    Ok(())
}

fn print_report(report: &Report, top: Option<usize>) {
    print_letter_distribution(&report.distribution);
    if let Some(n) = top {
        print_top_words(&report.ranked, n);
    }
    print_selections(&report.selections);
}

fn run_analyze_command(word: &str, playable: &[Word], guessable: &[Word]) -> Result<()> {
    let distribution = build_distribution(playable);
    let ranked = rank_words(guessable, &distribution)?;

    let result = analyze_word(word, &distribution, &ranked, playable.len())?;
    print_analysis_result(&result);
    Ok(())
}

/// Run `work` behind a terminal spinner
fn with_spinner<T>(message: String, work: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = work();
    spinner.finish_and_clear();
    Ok(result)
}
