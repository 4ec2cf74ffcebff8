//! Display functions for command results

use super::formatters::format_elapsed;
use crate::commands::SolveReport;
use colored::Colorize;

/// Print the input summary and the outcome of a solve run
pub fn print_solve_report(report: &SolveReport) {
    let outcome = &report.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        outcome.start_word().to_string().to_uppercase().bright_yellow().bold(),
        outcome.end_word().to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("Vocabulary size (words of required length): {}", report.vocabulary_size);
    println!("Maximum chain length: {}", report.max_chain_length);

    println!();
    if outcome.is_interrupted_by_timeout() {
        println!("{}", "Search was interrupted by timeout".yellow().bold());
    }

    if outcome.is_empty() {
        println!(
            "{}",
            format!(
                "❌ No chain found: {} -> ... -> {}",
                outcome.start_word(),
                outcome.end_word()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ Chain of {} words found!", outcome.chain().len())
                .green()
                .bold()
        );
        println!();

        for word in outcome.chain() {
            println!("  {word}");
        }
    }

    println!();
    println!("Execution time: {}", format_elapsed(report.elapsed));
}
