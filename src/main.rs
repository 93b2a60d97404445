//! m,k tic-tac-toe
//!
//! Desktop board, terminal game and self-check harness for the search engine.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use mnk::config::AppConfig;
use mnk::ui::MnkApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    match cli.command {
        None => run_gui(config),
        Some(Command::Gui { overrides, seat }) => {
            overrides.apply(&mut config)?;
            if let Some(seat) = seat {
                config.ui.seat = seat;
            }
            run_gui(config)
        }
        Some(Command::Play { overrides }) => {
            overrides.apply(&mut config)?;
            cli::run_play(&config)
        }
        Some(Command::Check) => cli::run_check(),
    }
}

/// Open the desktop board
fn run_gui(config: AppConfig) -> Result<()> {
    info!(
        size = config.game.size,
        win_length = config.game.win_length,
        solver = ?config.engine.solver,
        "starting desktop board"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("m,k tic-tac-toe"),
        ..Default::default()
    };

    eframe::run_native(
        "mnk",
        options,
        Box::new(move |cc| Ok(Box::new(MnkApp::new(cc, config)?))),
    )
    .map_err(|err| anyhow!("desktop board failed: {err}"))
}
