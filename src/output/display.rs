//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, rejection_line};
use crate::commands::{CheckResult, SolutionsResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the verdict for a single checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.input.trim().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(Some(accepted)) => println!(
            "{}",
            format!(
                "✅ '{}' is a valid word worth {} points {}",
                accepted.text,
                accepted.score_delta,
                length_badge(accepted.score_delta)
            )
            .green()
            .bold()
        ),
        Ok(None) => println!("{}", "Nothing to check: the word is blank".yellow()),
        Err(rejection) => println!("{}", format!("❌ {}", rejection_line(rejection)).red().bold()),
    }
}

/// Print every answer for a root word, grouped by length
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No valid words can be made from this root.".red());
        return;
    }

    println!("\n📊 {} words, {} points available", result.count(), result.max_score);

    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in &result.words {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let most = by_length.values().copied().max().unwrap_or(1);
    for (length, count) in by_length.iter().rev() {
        let bar = create_progress_bar(*count as f64, most as f64, 30);
        println!("   {} {} {count:4}", length_badge(*length), bar.green());
    }

    let shown = limit.unwrap_or(result.words.len());
    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for word in result.words.iter().take(shown) {
        println!("   {} {}", length_badge(word.chars().count()), word);
    }
    if result.words.len() > shown {
        println!("   ...and {} more", result.words.len() - shown);
    }
}
