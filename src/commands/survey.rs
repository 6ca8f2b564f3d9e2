//! Survey every root word - how playable is the word list?
//!
//! Finds the solutions for each root word and ranks the roots by how many
//! answers they allow.

use super::solutions::find_solutions;
use crate::dictionary::WordListDictionary;
use crate::round::Rules;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Roots with fewer answers than this are flagged as hard
const HARD_ROOT_THRESHOLD: usize = 10;

/// Solutions summary for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub max_score: usize,
}

/// Statistics from surveying a root word list
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Most solutions first
    pub summaries: Vec<RootSummary>,
    pub average_solutions: f64,
    pub average_max_score: f64,
    pub best_root: Option<RootSummary>,
    pub hardest_roots: Vec<RootSummary>,
    pub unplayable: usize,
    pub total_time: Duration,
}

/// Find solutions for every root word (or the first `limit` of them)
pub fn run_survey(
    roots: &[String],
    dictionary: &WordListDictionary,
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map(|style| style.progress_chars("█▓▒░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let total_start = Instant::now();
    let mut summaries = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        let result = find_solutions(root, dictionary, rules);
        summaries.push(RootSummary {
            root: result.root,
            solutions: result.words.len(),
            max_score: result.max_score,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    summaries.sort_by(|a, b| b.solutions.cmp(&a.solutions).then_with(|| a.root.cmp(&b.root)));

    let total_roots = summaries.len();
    let (average_solutions, average_max_score) = if total_roots > 0 {
        (
            summaries.iter().map(|s| s.solutions).sum::<usize>() as f64 / total_roots as f64,
            summaries.iter().map(|s| s.max_score).sum::<usize>() as f64 / total_roots as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let best_root = summaries.first().cloned();

    let mut hardest_roots: Vec<RootSummary> = summaries
        .iter()
        .filter(|s| s.solutions < HARD_ROOT_THRESHOLD)
        .cloned()
        .collect();
    hardest_roots.sort_by_key(|s| s.solutions);
    hardest_roots.truncate(10);

    let unplayable = summaries.iter().filter(|s| s.solutions == 0).count();

    SurveyStatistics {
        total_roots,
        summaries,
        average_solutions,
        average_max_score,
        best_root,
        hardest_roots,
        unplayable,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Root words surveyed: {}", stats.total_roots);
    println!(
        "  Average answers:     {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("  Average max score:   {:.1}", stats.average_max_score);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.unplayable > 0 {
        println!(
            "  Unplayable roots:    {}",
            stats.unplayable.to_string().red().bold()
        );
    }

    println!("\n📈 {}", "Answers per Root".bright_cyan().bold());
    let max_count = stats
        .summaries
        .iter()
        .map(|s| s.solutions)
        .max()
        .unwrap_or(1)
        .max(1);
    for summary in stats.summaries.iter().take(15) {
        let bar_len = (summary.solutions * 40 / max_count).max(usize::from(summary.solutions > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!(
            "  {:<12} {bar} {:4} (max {})",
            summary.root, summary.solutions, summary.max_score
        );
    }

    if let Some(best) = &stats.best_root {
        println!("\n✨ {}", "Richest Root".green().bold());
        println!(
            "  {} with {} answers worth {} points",
            best.root.to_uppercase().bright_green(),
            best.solutions,
            best.max_score
        );
    }

    if !stats.hardest_roots.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Roots (fewer than {HARD_ROOT_THRESHOLD} answers)")
                .yellow()
                .bold()
        );
        for summary in stats.hardest_roots.iter().take(5) {
            println!(
                "  {} ({} answers)",
                summary.root.to_uppercase().yellow(),
                summary.solutions
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn survey_ranks_roots_by_solutions() {
        let dictionary = WordListDictionary::from_words(
            ["silk", "worm", "work", "milk", "note", "tone"],
            "en",
        );
        let stats = run_survey(
            &roots(&["notebook", "silkworm", "zzzzzzzz"]),
            &dictionary,
            &Rules::default(),
            None,
        );

        assert_eq!(stats.total_roots, 3);
        assert_eq!(stats.summaries[0].root, "silkworm");
        assert_eq!(stats.summaries[0].solutions, 4);
        assert_eq!(stats.summaries[1].root, "notebook");
        assert_eq!(stats.summaries[1].solutions, 2);
        assert_eq!(stats.unplayable, 1);
        assert_eq!(stats.best_root.as_ref().map(|s| s.max_score), Some(16));
    }

    #[test]
    fn survey_respects_limit() {
        let dictionary = WordListDictionary::embedded();
        let all = crate::wordlists::embedded_root_words();
        let stats = run_survey(&all, &dictionary, &Rules::default(), Some(3));
        assert_eq!(stats.total_roots, 3);
    }

    #[test]
    fn hardest_roots_sorted_ascending() {
        let dictionary = WordListDictionary::from_words(["silk", "worm", "note"], "en");
        let stats = run_survey(
            &roots(&["silkworm", "notebook", "zzzzzzzz"]),
            &dictionary,
            &Rules::default(),
            None,
        );

        let counts: Vec<usize> = stats.hardest_roots.iter().map(|s| s.solutions).collect();
        assert_eq!(counts, vec![0, 1, 2]);
    }

    #[test]
    fn empty_survey() {
        let dictionary = WordListDictionary::embedded();
        let stats = run_survey(&[], &dictionary, &Rules::default(), None);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.best_root.is_none());
        assert!(stats.average_solutions.abs() < f64::EPSILON);
    }
}
