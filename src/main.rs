//! Wordle - CLI
//!
//! Play Wordle in a full-screen TUI or a plain line-based mode, or score a
//! single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_play::{
    commands::{run_simple, score_words},
    interactive::{App, run_tui},
    output::print_score,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_play",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line) instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for picking secret words, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Dictionary::embedded().context("built-in word list is empty"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(cli.wordlist.as_ref())?;
            run_tui(App::new(&dictionary, make_rng(cli.seed)))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(cli.wordlist.as_ref())?;
            let mut rng = make_rng(cli.seed);
            run_simple(&dictionary, &mut rng, io::stdin().lock(), &mut io::stdout())
                .context("game loop failed")
        }
        Commands::Score { guess, secret } => {
            let result = score_words(&guess, &secret).context("cannot score these words")?;
            print_score(&result.guess, &result.secret, &result.feedback);
            Ok(())
        }
    }
}
