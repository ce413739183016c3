//! Terminal front-end for Epic Adventure Quest.

mod console;

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use eaq_core::config::DEFAULT_SAVE_PATH;
use eaq_core::{
    JsonFileStore, QuestConfig, QuestSession, RandomSource, SeededRandom, ThreadRandom,
};

use crate::console::{Palette, TerminalConsole};

#[derive(Parser)]
#[command(
    name = "eaq",
    about = "Epic Adventure Quest: a branching text adventure in a mystical forest",
    version
)]
struct Cli {
    /// Save file to load from and write to
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    save_file: PathBuf,

    /// RNG seed for reproducible encounters
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pause after each line of text
    #[arg(long)]
    fast: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn config(&self) -> QuestConfig {
        let mut config = QuestConfig::default().with_save_path(&self.save_file);
        if self.fast {
            config = config.with_pacing(Duration::ZERO);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = cli.config();
    let palette = Palette::new(!cli.no_color);
    let console = TerminalConsole::new(io::stdin().lock(), io::stdout(), palette, config.pacing);
    let store = JsonFileStore::new(&config.save_path)
        .with_inventory_capacity(config.inventory_capacity);
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let mut session = QuestSession::new(config, console, rng, store);
    let summary = session.run().map_err(|e| e.to_string())?;
    log::debug!("session ended after {} rounds", summary.rounds);
    Ok(())
}
