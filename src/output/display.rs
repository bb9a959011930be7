//! Display functions for command results

use super::formatters::{create_progress_bar, format_letters, format_points, percent};
use crate::commands::{CheckReport, FillResult, PoolSummary, ScoreReport};
use crate::game::RoundSummary;
use crate::madlibs::FilledStory;
use colored::Colorize;

/// Print the end of a round: score, missed words and the story
pub fn print_round_summary(summary: &RoundSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROUND OVER:".bright_cyan().bold(),
        summary.player.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(f64::from(summary.score), f64::from(summary.possible), 30);
    println!(
        "\n🐝 Score:  [{}] {} / {} ({:.1}%)",
        bar.green(),
        summary.score.to_string().bright_yellow().bold(),
        summary.possible,
        percent(summary.score, summary.possible)
    );
    println!("   Words found: {}", summary.found);

    if summary.missed > 0 {
        println!(
            "   You missed {} words. Here's a few: {}",
            summary.missed,
            summary.missed_sample.join(", ").bright_white()
        );
    } else {
        println!("   {}", "You found every word!".bright_green().bold());
    }

    println!("\n{} ◡̈\n", "Ready for your story".bright_cyan().bold());
    print_story(&summary.story);
}

/// Print a filled story, highlighting any blanks left unfilled
pub fn print_story(story: &FilledStory) {
    println!("{}", story.text);

    for unknown in &story.unknown {
        println!("{} {}", "⚠".yellow(), format!("left unfilled: {unknown}").yellow());
    }
}

/// Print the result of scoring a single word
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring: {} as {} in {}",
        report.word.to_uppercase().bright_yellow().bold(),
        report.category.to_string().cyan(),
        format_letters(&report.pool)
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        Ok((earned, possible)) => {
            println!("\n  Letters: {}", format_points(&report.letters));
            println!(
                "{}",
                format!("\n✅ {earned} points ({possible} possible in this pool)")
                    .green()
                    .bold()
            );
        }
        Err(err) => {
            println!("{}", format!("\n❌ {err}").red().bold());
        }
    }
}

/// Print the result of filling a story
pub fn print_fill_result(result: &FillResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filled {} blanks, {} from your words",
        result.placeholders,
        result.story.guesses_used()
    );
    if !result.untagged.is_empty() {
        println!(
            "{}",
            format!("Unused (unknown words): {}", result.untagged.join(", ")).yellow()
        );
    }
    println!("{}\n", "─".repeat(60).cyan());

    print_story(&result.story);
}

/// Print per-pool summaries
pub fn print_pool_summaries(summaries: &[PoolSummary]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER POTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for summary in summaries {
        println!(
            "\n🍯 {}  {} words ({} playable), {} points possible",
            format_letters(&summary.key).bright_yellow().bold(),
            summary.words,
            summary.playable,
            summary.max_possible.to_string().bright_green()
        );

        let points: Vec<(char, u32)> = summary.letters.iter().map(|&(l, _, p)| (l, p)).collect();
        println!("   Points:  {}", format_points(&points));

        let counts: Vec<String> = summary
            .letters
            .iter()
            .map(|(l, c, _)| format!("{}{c}", l.to_ascii_uppercase()))
            .collect();
        println!("   Counts:  {}", counts.join(" ").bright_black());

        if let Some((word, points)) = &summary.best_word {
            println!("   Best:    {} ({points} points)", word.to_uppercase());
        }

        let categories: Vec<String> = summary
            .per_category
            .iter()
            .map(|(c, n)| format!("{c}: {n}"))
            .collect();
        println!("   By type: {}", categories.join(" | "));
    }
}

/// Print the data audit report
pub fn print_check_report(report: &CheckReport) {
    println!(
        "\nChecked {} pools and {} words",
        report.pools_checked, report.words_checked
    );

    if report.is_clean() {
        println!("{}", "✅ Game data is consistent".green().bold());
        return;
    }

    println!(
        "{}",
        format!("❌ {} problems found:", report.findings.len())
            .red()
            .bold()
    );
    for finding in &report.findings {
        println!("   • {finding}");
    }
}
