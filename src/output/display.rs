//! Display functions for command results

use super::formatters::{create_progress_bar, letter_label};
use crate::analysis::{LetterDistribution, RankedWords, Selection};
use crate::commands::AnalysisResult;
use colored::Colorize;

/// Print `LETTER: count` for every letter in distribution order
pub fn print_letter_distribution(distribution: &LetterDistribution) {
    println!("{}", "Letter Distribution".bright_cyan().bold());
    for (letter, indices) in distribution.iter() {
        println!("{}: {}", letter_label(letter), indices.len());
    }
}

/// Print each selection under its heading
pub fn print_selections(selections: &[Selection]) {
    for selection in selections {
        println!("\n{}", selection.overlap.heading().bright_cyan().bold());
        for word in &selection.words {
            println!("{word}");
        }
    }
}

/// Print the `n` best ranked words with their coverage scores
pub fn print_top_words(ranked: &RankedWords, n: usize) {
    println!(
        "\n{}",
        format!("Top {} Optimal Words", n.min(ranked.len()))
            .bright_cyan()
            .bold()
    );
    for (i, entry) in ranked.top(n).iter().enumerate() {
        println!(
            "{:>4}. {} {}",
            i + 1,
            entry.word.text().to_uppercase().bright_yellow(),
            entry.score
        );
    }
}

/// Print the coverage analysis of a single word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "COVERAGE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(result.score as f64, result.total_playable as f64, 30);

    println!("\n📊 Against {} playable words:", result.total_playable);
    println!(
        "   Coverage:    [{}] {}",
        bar.green(),
        format!("{} words ({:.1}%)", result.score, result.coverage_percent()).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   Rank:        {} of {}", rank + 1, result.total_ranked),
        None => println!("   Rank:        {}", "not in guessable list".yellow()),
    }

    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    for &(letter, count) in &result.letters {
        let bar = create_progress_bar(count as f64, result.total_playable as f64, 20);
        println!("   {}: [{}] {count}", letter_label(letter), bar.green());
    }
}
