//! Wordle Unlimited - CLI
//!
//! Play in a TUI or a plain line-mode terminal, score single guesses, and
//! build or decode challenge links.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_unlimited::{
    challenge::{pick_target, token_from_query},
    commands::{decode_challenge, make_challenge, run_simple, score_guess},
    config::{DEFAULT_BASE_URL, Settings, WordlistSource},
    dictionary::Dictionary,
    game::{GameState, InputController},
    output::{DEFAULT_TITLE, print_challenge, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_unlimited",
    about = "Unlimited Wordle in the terminal, with shareable challenge links",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Challenge token or link to play instead of a random word
    #[arg(short, long, global = true)]
    challenge: Option<String>,

    /// Title used in shared results
    #[arg(long, global = true, default_value = DEFAULT_TITLE)]
    title: String,

    /// Base URL for challenge links
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,
        /// The secret word
        target: String,
    },

    /// Create a challenge link for a word
    Challenge {
        /// Word the challenged player must find
        word: String,
    },

    /// Decode a challenge token or link
    Decode {
        /// Token or full challenge link
        token: String,
    },
}

/// Set up `env_logger` per the verbosity flags
///
/// With `to_terminal` false, logging is only enabled when a log file is given
/// so it cannot corrupt the alternate screen.
fn init_logging(
    verbose: &Verbosity<WarnLevel>,
    log_file: Option<&Path>,
    to_terminal: bool,
) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbose.log_level_filter());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if to_terminal => {
            builder.target(env_logger::Target::Stderr);
        }
        None => return Ok(()),
    }

    builder.try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let is_tui = matches!(command, Commands::Play);
    init_logging(&cli.verbose, cli.log_file.as_deref(), !is_tui)?;

    let settings = Settings {
        title: cli.title,
        base_url: cli.base_url,
        challenge: cli.challenge,
    };

    match command {
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Challenge { word } => {
            let info = make_challenge(&word, &settings.base_url)?;
            print_challenge(&info);
            Ok(())
        }
        Commands::Decode { token } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            match decode_challenge(&token, &dictionary)? {
                Some(word) => println!("{}", word.text().to_uppercase()),
                None => println!("No challenge in input"),
            }
            Ok(())
        }
        Commands::Play => run_play_command(&cli.wordlist, settings),
        Commands::Simple => run_simple_command(&cli.wordlist, &settings),
    }
}

fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let source = WordlistSource::from_arg(wordlist);
    debug!("Loading word list from {source:?}");
    let dictionary = source.load()?;
    info!("Loaded {} accepted words", dictionary.len());
    Ok(dictionary)
}

/// First game: the challenged word when the token checks out, else random
fn first_game<'a>(dictionary: &'a Dictionary, settings: &Settings) -> GameState<'a> {
    let token = settings
        .challenge
        .as_deref()
        .map(|input| token_from_query(input).unwrap_or(input));
    let target = pick_target(token, dictionary, &mut rand::rng());
    GameState::new(dictionary, target)
}

fn run_simple_command(wordlist: &str, settings: &Settings) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let mut controller = InputController::new(first_game(&dictionary, settings));
    run_simple(&mut controller, settings, &mut rand::rng()).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(wordlist: &str, settings: Settings) -> Result<()> {
    use wordle_unlimited::interactive::{App, run_tui};

    let dictionary = load_dictionary(wordlist)?;
    let game = first_game(&dictionary, &settings);
    let app = App::new(game, settings);
    run_tui(app, &mut rand::rng())
}
