//! Strictly Connect-K terminal front end
//!
//! Configuration, rendering and a command loop around
//! [`strictly_connectk::GameSession`]. No game rules live here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod repl;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use render::{render_board, render_moves, render_status};
pub use repl::{Command as ReplCommand, CommandError, Flow, HELP, execute, run};
