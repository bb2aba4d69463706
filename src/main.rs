//! Word Scramble - CLI
//!
//! Find every word hidden in a random root word, in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use word_scramble::{
    commands::{CheckConfig, check_word, run_simple},
    dictionary::{Dictionary, WordSet},
    logging::{self, log_destination},
    output::print_check_result,
    session::SessionController,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find the words hidden inside a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited file of root words (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Newline-delimited file of valid words (default: built-in dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for choosing root words, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log debug output (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr (the TUI only logs with one)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,

        /// Words to treat as already found
        #[arg(short, long)]
        used: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let destination = log_destination(
        matches!(command, Commands::Play),
        cli.log_file.as_deref(),
    );
    logging::init(&destination, cli.verbose)?;

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    match command {
        Commands::Check { root, word, used } => {
            let config = CheckConfig::new(&root, &word).with_used_words(used);
            run_check_command(&config, &dictionary)
        }
        Commands::Play => {
            let controller = new_controller(cli.words.as_deref(), dictionary, cli.seed)?;
            run_play_command(controller)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simple => {
            let mut controller = new_controller(cli.words.as_deref(), dictionary, cli.seed)?;
            run_simple(&mut controller, io::stdin().lock(), io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load root words from `path`, or the built-in list
///
/// A supplied file that cannot be read is fatal: without root words there is no game.
fn load_start_words(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load root words from {}", path.display()))?,
        None => words_from_slice(START_WORDS),
    };
    info!("Loaded {} root words", words.len());
    Ok(words)
}

fn load_dictionary(path: Option<&Path>) -> Result<WordSet> {
    let dictionary = match path {
        Some(path) => WordSet::from_words(
            load_from_file(path)
                .with_context(|| format!("Could not load dictionary from {}", path.display()))?,
        ),
        None => WordSet::embedded(),
    };
    info!("Dictionary holds {} words", dictionary.len());
    Ok(dictionary)
}

fn new_controller<D: Dictionary>(
    words_path: Option<&Path>,
    dictionary: D,
    seed: Option<u64>,
) -> Result<SessionController<D>> {
    let words = load_start_words(words_path)?;
    Ok(match seed {
        Some(seed) => SessionController::with_seed(words, dictionary, seed),
        None => SessionController::new(words, dictionary),
    })
}

fn run_check_command<D: Dictionary>(config: &CheckConfig, dictionary: &D) -> Result<ExitCode> {
    let result = check_word(config, dictionary);
    print_check_result(&mut io::stdout().lock(), &result)?;
    Ok(if result.result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_play_command<D: Dictionary>(controller: SessionController<D>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(controller);
    run_tui(app)
}
