//! Snowman Meltdown - CLI
//!
//! Classic line-based mode by default, or a full-screen TUI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use snowman_meltdown::{
    assets::{Vocabulary, loader::load_from_file, snowman_stages},
    console::run_classic,
    interactive::{App, run_tui},
    session::RandomWordSource,
};

#[derive(Parser)]
#[command(
    name = "snowman_meltdown",
    about = "Guess the word before the snowman melts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Word list file (one word per line) instead of the built-in words
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based game (default)
    Classic,

    /// Full-screen terminal interface
    Tui,
}

fn load_vocabulary(path: Option<&str>) -> Result<Vocabulary> {
    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to load word list {path}"))
        }
        None => Ok(Vocabulary::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();

    let vocabulary = load_vocabulary(cli.words.as_deref())?;
    let stages = snowman_stages();
    log::debug!("{} words, {} stages", vocabulary.len(), stages.len());

    let words = cli
        .seed
        .map_or_else(RandomWordSource::from_entropy, RandomWordSource::seeded);

    // Default to classic mode if no command given
    let stats = match cli.command.unwrap_or(Commands::Classic) {
        Commands::Classic => run_classic(&vocabulary, &stages, words)?,
        Commands::Tui => run_tui(App::new(&vocabulary, &stages, words))?,
    };

    log::info!("played {} rounds, won {}", stats.rounds, stats.wins);
    Ok(())
}
