//! Connect-K - unified CLI
//!
//! Plays or replays connect-K games in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_connectk::GameSession;
use strictly_connectk_cli::{Cli, Command, GameConfig, render_board, render_status, run};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Play { size } => run_play(&config, size),
        Command::Replay { size, moves, json } => run_replay(&config, size, &moves, json),
    }
}

/// Run the interactive game loop on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig, size: Option<usize>) -> Result<()> {
    let mut session = config.new_session(size)?;
    info!(size = session.size(), "Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Replay a move sequence and print the final position
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, size: Option<usize>, moves: &[usize], json: bool) -> Result<()> {
    let size = size.unwrap_or(*config.default_size());
    let session = GameSession::replay(size, moves)?;
    info!(steps = session.current_step(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print!("{}", render_board(&session));
        println!("{}", render_status(&session));
    }
    Ok(())
}
