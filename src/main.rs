//! Rewind - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, Config, GameState, Report, logging, replay, run_tui};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Tui { reverse } => {
            let config = config.with_reverse_flag(reverse);
            logging::init_file(config.log_file(), config.log_filter()).with_context(|| {
                format!("Failed to open log file {}", config.log_file().display())
            })?;
            run_tui(GameState::with_reverse_display(*config.reverse_history()))
        }
        Command::Play {
            cells,
            jump,
            reverse,
            json,
        } => {
            let config = config.with_reverse_flag(reverse);
            logging::init_stderr(config.log_filter());
            let game = replay(&cells, jump, *config.reverse_history())?;
            print!("{}", Report::from_game(&game).render(json)?);
            Ok(())
        }
    }
}
