//! Simple interactive CLI mode
//!
//! Text-based round without the TUI

use crate::core::{CategorizedWords, LetterPool, Lexicon};
use crate::game::{Command, GameConfig, GuessError, HintError, Round};
use crate::output::display::print_round_summary;
use crate::output::formatters::{create_progress_bar, format_letters};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run one round on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(
    pool: &LetterPool,
    lexicon: &Lexicon,
    filler: &CategorizedWords,
    template: &str,
    config: GameConfig,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Letter Pot - Spelling Bee MadLibs                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let name = match get_user_input(&mut input, "Player name")? {
        Some(name) if !name.is_empty() => name,
        Some(_) => "Player".to_string(),
        None => return Ok(()),
    };

    let mut round = Round::new(name.clone(), pool, lexicon, filler, config);

    println!(
        "\nOkay, {}... your letters are {}\n",
        name.bright_white().bold(),
        format_letters(pool.key()).bright_yellow().bold()
    );
    println!("Each letter can be used once per word, and words need at least 4 letters.");
    println!("Type a word, or 'word:category' to pick its part of speech");
    println!("(noun, plural noun, verb, adjective, pronoun).");
    println!(
        "Type 'HELP' for a hint ({} per game) or 'DONE' when you're out.\n",
        round.config().hint_budget
    );

    loop {
        let Some(line) = get_user_input(&mut input, "Give me a word (or HELP or DONE)")? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Done) => break,
            Ok(Command::Help) => match round.hint(rng) {
                Ok(masked) => {
                    println!("💡 Here is your hint: {}", masked.bright_cyan().bold());
                    println!(
                        "   {} hints left\n",
                        round.session().hints_remaining()
                    );
                }
                Err(HintError::NoHintsLeft) => {
                    println!("{}\n", "You have used up all your hints".yellow());
                }
                Err(HintError::Exhausted) => {
                    println!("{}\n", "You've found every word - nothing left to hint!".green());
                }
            },
            Ok(Command::Guess { word, category }) => match round.guess(&word, category) {
                Ok(accepted) => {
                    let bar = create_progress_bar(
                        f64::from(accepted.total),
                        f64::from(accepted.possible),
                        30,
                    );
                    println!(
                        "✓ {} as {} for {} points",
                        accepted.word.to_uppercase().bright_white().bold(),
                        accepted.category.to_string().cyan(),
                        accepted.earned.to_string().bright_green().bold()
                    );
                    println!(
                        "  [{}] You've found {} out of {} possible.\n",
                        bar.green(),
                        accepted.total,
                        accepted.possible
                    );
                }
                Err(GuessError::AlreadyGuessed(word)) => {
                    println!("{}\n", format!("You've already guessed \"{word}\".").yellow());
                }
                Err(GuessError::Invalid(err)) => {
                    println!("{} {}\n", "❌".red(), err.to_string().red());
                }
            },
            Err(err) => {
                println!("{} {}\n", "❌".red(), err.to_string().red());
            }
        }
    }

    let summary = round.finish(template, rng);
    print_round_summary(&summary);

    Ok(())
}

/// Prompt and read one trimmed line, `None` at end of input
fn get_user_input<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
