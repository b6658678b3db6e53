mod app;
mod cli;
mod command;
mod config;
mod console;
mod consts;
mod game;
mod highscores;
mod logging;
mod screens;
mod util;
use crate::app::App;
use crate::cli::{CliAction, USAGE};
use crate::console::{CrosstermEvents, TuiConsole};
use crate::game::CollisionPolicy;
use crate::highscores::HighScoreStore;
use anyhow::Context;
use ratatui::DefaultTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match CliAction::from_parser(lexopt::Parser::from_env()) {
        Ok(CliAction::Run(args)) => args,
        Ok(CliAction::Help) => {
            print!("{USAGE}");
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("termsnake {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(e) => anyhow::bail!("{e}\nTry `termsnake --help` for more information"),
    };
    let config = args.load_config().context("Failed to load configuration")?;
    if let Some(ref path) = config.files.log_file {
        logging::init(path, args.verbose)
            .with_context(|| format!("Failed to set up logging to {}", path.display()))?;
    }
    log::debug!("Configuration: {config:?}");
    let store = HighScoreStore::new(config.files.high_scores_file);
    log::info!("High scores are kept in {}", store.path().display());
    // Fail on a corrupt table before taking over the terminal
    store.load()?;
    let terminal = ratatui::init();
    let r = play(terminal, store, config.game.collision);
    ratatui::restore();
    r
}

fn play(
    terminal: DefaultTerminal,
    store: HighScoreStore,
    policy: CollisionPolicy,
) -> anyhow::Result<()> {
    let console = TuiConsole::new(terminal, CrosstermEvents)?;
    App::new(console, store, policy, rand::rng()).run()?;
    Ok(())
}
