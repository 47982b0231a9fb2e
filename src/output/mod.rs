//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

use crate::commands::{BenchResult, DuelOutcome, DuelResult};
use crate::core::Word;
use crate::engine::RandomPair;
use colored::Colorize;

/// Render a ladder as `cat → cot → dog`
#[must_use]
pub fn format_ladder(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<&str>>()
        .join(" → ")
}

/// Print a found path (or its absence) between two words
pub fn print_path(start: &Word, end: &Word, path: Option<&[Word]>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        start.text().bright_yellow().bold(),
        end.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match path {
        Some(path) => {
            println!("\n  {}", format_ladder(path).green());
            println!("\n{} words, {} moves", path.len(), path.len() - 1);
        }
        None => println!("\n{}", "No path exists between these words".red()),
    }
}

/// Print a sampled pair with its difficulty score
pub fn print_pair(pair: &RandomPair, difficulty: Option<f64>) {
    println!(
        "\n{} → {} (optimal ladder: {} words)",
        pair.start.text().bright_yellow().bold(),
        pair.end.text().bright_yellow().bold(),
        pair.optimal_length
    );
    if let Some(score) = difficulty {
        println!("Difficulty score: {score:.1}");
    }
}

/// Print the transcript and outcome of a duel
pub fn print_duel_result(result: &DuelResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Duel over after {} turns", result.turns);
    println!("{}", "─".repeat(60).cyan());

    println!("\nFirst:  {}", format_ladder(&result.first_ladder));
    println!("Second: {}", format_ladder(&result.second_ladder));
    println!();

    match result.outcome {
        DuelOutcome::FirstWins => println!("{}", "🏆 First contestant wins!".green().bold()),
        DuelOutcome::SecondWins => println!("{}", "🏆 Second contestant wins!".green().bold()),
        DuelOutcome::Draw => println!("{}", "Draw: turn budget exhausted".yellow()),
    }
}

/// Print benchmark statistics
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" Pathfinding Benchmark ");
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Pairs requested:     {}", result.requested);
    println!("  Pairs solved:        {}", result.solved);
    println!("  Average ladder:      {:.2} words", result.average_length);
    println!("  Throughput:          {:.1} pairs/s", result.pairs_per_second);
    println!("  Elapsed:             {:.2?}", result.duration);

    let agreement = if result.disagreements == 0 {
        "A* and BFS agreed on every pair".green()
    } else {
        format!("{} length disagreements", result.disagreements).red()
    };
    println!("  Cross-check:         {agreement}");

    if !result.length_distribution.is_empty() {
        println!("\n  Ladder length distribution:");
        let mut lengths: Vec<(&usize, &usize)> = result.length_distribution.iter().collect();
        lengths.sort();
        for (length, count) in lengths {
            let bar = "█".repeat(*count);
            println!("    {length:>2} words │ {count:>4} {}", bar.cyan());
        }
    }
    println!();
}
