//! Yahtzee for the terminal.

mod logging;
mod rules;
mod text;

use std::io::{self, IsTerminal};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use yz_engine::{EngineResult, Game, GameConfig, IoMode};
use yz_tui::TerminalAdapter;

use crate::text::TextAdapter;

#[derive(Parser)]
#[command(
    name = "yahtzee",
    about = "The dice game Yahtzee, for one player",
    version
)]
struct Cli {
    /// Print the rules of the game and exit
    #[arg(long)]
    rules: bool,

    /// RNG seed for reproducible dice (overrides YAHTZEE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Front end to play with
    #[arg(long, value_enum, default_value_t = Interface::Auto)]
    interface: Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Interface {
    /// Pick from the environment
    Auto,
    /// Line-oriented prompts
    Text,
    /// Full-screen terminal
    Terminal,
}

impl Interface {
    fn mode(self) -> IoMode {
        match self {
            Interface::Text => IoMode::Text,
            Interface::Terminal => IoMode::Terminal,
            Interface::Auto if !io::stdout().is_terminal() => IoMode::Text,
            Interface::Auto => IoMode::from_env(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if cli.rules {
        rules::print();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let mut config = GameConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut game = Game::new(&config);

    let mode = cli.interface.mode();
    info!(?mode, seed = ?config.seed, "starting");
    match mode {
        IoMode::Text => {
            let stdin = io::stdin();
            let mut adapter = TextAdapter::new(stdin.lock(), io::stdout());
            game.run(&mut adapter)
        }
        // no graphical front end; the terminal one stands in
        IoMode::Terminal | IoMode::Graphical => {
            let mut adapter = TerminalAdapter::open()?;
            game.run(&mut adapter)
        }
    }
}
