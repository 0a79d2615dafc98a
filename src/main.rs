//! Assembly: Endgame - CLI
//!
//! Terminal hangman with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use endgame::{
    commands::run_simple,
    core::Word,
    game::Session,
    providers::{FarewellTexts, LivesPool, RandomWordProvider},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "endgame",
    about = "Guess the word before the programming world falls to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (no TUI)
    Simple,
}

/// Load the word pool based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    use endgame::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    anyhow::ensure!(
        !words.is_empty(),
        "wordlist '{wordlist_mode}' contains no usable words"
    );

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let pool = LivesPool::standard();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, &pool),
        Commands::Simple => run_simple_command(&words, &pool),
    }
}

fn run_play_command(words: &[Word], pool: &LivesPool) -> Result<()> {
    use endgame::interactive::{App, run_tui};

    let app = App::new(words, pool)?;
    run_tui(app)
}

fn run_simple_command(words: &[Word], pool: &LivesPool) -> Result<()> {
    let provider = RandomWordProvider::new(words);
    let mut session = Session::new(provider, pool.max_wrong_guesses())?;
    let farewells = FarewellTexts::new(pool.names());

    run_simple(&mut session, pool, &farewells)
}
