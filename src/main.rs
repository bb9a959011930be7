//! Letter Pot - CLI
//!
//! Spelling-bee MadLibs with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use letterpot::{
    commands::{FillConfig, fill_story, run_check, run_simple, score_command, summarize_pools},
    core::{Category, LetterPool},
    game::{GameConfig, Round},
    output::{print_check_report, print_fill_result, print_pool_summaries, print_score_report},
    wordlists::{
        GameData, STORY,
        loader::{load_pool_from_file, load_template},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letterpot",
    about = "Spelling-bee word game with rarity-weighted scoring and MadLibs stories",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pool key, e.g. 'ehprsyz' (default: a random embedded pool)
    #[arg(short, long, global = true)]
    pool: Option<String>,

    /// Custom pool file: key on the first line, then 'word: category, ...' lines
    #[arg(long, global = true)]
    pool_file: Option<PathBuf>,

    /// Story template file (default: the embedded story)
    #[arg(short, long, global = true)]
    story: Option<PathBuf>,

    /// Hints per round
    #[arg(long, global = true, default_value_t = GameConfig::default().hint_budget)]
    hints: usize,

    /// Seed for reproducible hints, story fills and pool choice
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Player name
        #[arg(short, long, default_value = "Player")]
        name: String,
    },

    /// Simple CLI mode (line-by-line prompts without TUI)
    Simple,

    /// Score a single word against the pool
    Score {
        /// The word to score
        word: String,

        /// Part of speech: noun, plural noun, verb, adjective, pronoun
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Fill the story with the given words
    Fill {
        /// Comma-separated words, e.g. 'hyper,zephyrs,spry'
        #[arg(short, long, value_delimiter = ',')]
        guesses: Vec<String>,
    },

    /// Summarize every pool
    Pools,

    /// Audit the game data for consistency
    Check,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut data = GameData::embedded()?;
    let custom_key = match &cli.pool_file {
        Some(path) => {
            let custom = load_pool_from_file(path)?;
            let key = custom.pool.key().to_string();
            data.insert_custom(custom);
            Some(key)
        }
        None => None,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let template = match &cli.story {
        Some(path) => load_template(path)?,
        None => STORY.to_string(),
    };

    let config = GameConfig::new(cli.hints);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        name: "Player".to_string(),
    });

    let pool_key = custom_key.or(cli.pool);

    match command {
        Commands::Play { name } => {
            use letterpot::interactive::{App, run_tui};

            let pool = select_pool(&data, pool_key.as_deref(), &mut rng)?;
            let round = Round::new(name, pool, data.lexicon(), data.filler(), config);
            run_tui(App::new(round, template, rng))
        }
        Commands::Simple => {
            let pool = select_pool(&data, pool_key.as_deref(), &mut rng)?;
            run_simple(
                pool,
                data.lexicon(),
                data.filler(),
                &template,
                config,
                &mut rng,
            )
        }
        Commands::Score { word, category } => {
            let pool = select_pool(&data, pool_key.as_deref(), &mut rng)?;
            print_score_report(&score_command(pool, data.lexicon(), &word, category));
            Ok(())
        }
        Commands::Fill { guesses } => {
            let fill = FillConfig::new(guesses, config.default_filler.as_str());
            let result = fill_story(&template, &fill, data.lexicon(), data.filler(), &mut rng);
            print_fill_result(&result);
            Ok(())
        }
        Commands::Pools => {
            print_pool_summaries(&summarize_pools(data.pools(), data.lexicon()));
            Ok(())
        }
        Commands::Check => {
            let report = run_check(data.pools(), data.lexicon(), data.filler(), true);
            print_check_report(&report);
            if !report.is_clean() {
                bail!("game data has {} problems", report.findings.len());
            }
            Ok(())
        }
    }
}

/// Pool to play: the given key, or a random one
fn select_pool<'d>(
    data: &'d GameData,
    key: Option<&str>,
    rng: &mut StdRng,
) -> Result<&'d LetterPool> {
    match key {
        Some(key) => {
            let key = key.trim().to_lowercase();
            data.pool(&key).with_context(|| {
                let known: Vec<&str> = data.pools().iter().map(LetterPool::key).collect();
                format!("unknown pool '{key}' (available: {})", known.join(", "))
            })
        }
        None => data.random_pool(rng).context("no pools available"),
    }
}
