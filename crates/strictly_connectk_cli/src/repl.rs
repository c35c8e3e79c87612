//! Line-oriented command loop driving a session.

use crate::render::{render_board, render_moves, render_status};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_connectk::GameSession;
use tracing::{debug, instrument, warn};

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  play <cell>        place a mark on a cell index (0-based, row-major)
  move <col> <row>   place a mark by 1-based coordinates
  jump <step>        view the board after <step> moves (0 = start)
  resize <n>         start over on an n x n board (5 <= n <= 100)
  rematch            start over on the same board
  sort               toggle the move list order
  moves              show the move list
  board              show the board
  help               show this text
  quit               leave the game
";

/// Command verbs, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Play,
    Move,
    Jump,
    Resize,
    Rematch,
    Sort,
    Moves,
    Board,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

/// A parsed user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark on a cell index.
    Play(usize),
    /// Place a mark at 1-based `(col, row)`.
    Place {
        /// Column, starting at 1.
        col: usize,
        /// Row, starting at 1.
        row: usize,
    },
    /// Jump to a history step.
    Jump(usize),
    /// Start over with a new board size.
    Resize(usize),
    /// Start over with the same size.
    Rematch,
    /// Toggle move list order.
    Sort,
    /// Show the move list.
    Moves,
    /// Show the board.
    Board,
    /// Show help.
    Help,
    /// Leave the loop.
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// The line held no command.
    #[display("Empty command")]
    Empty,

    /// The verb is not recognised.
    #[display("Unknown command `{}`, type `help` for a list", _0)]
    UnknownVerb(String),

    /// A required argument is missing.
    #[display("`{}` needs {}", verb, argument)]
    MissingArgument {
        /// Command verb.
        verb: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An argument is not a non-negative integer.
    #[display("`{}` is not a number! Please try again!", _0)]
    NotANumber(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let verb =
            Verb::from_str(word).map_err(|_| CommandError::UnknownVerb(word.to_string()))?;

        let mut number = |verb: &'static str, argument: &'static str| {
            let raw = words
                .next()
                .ok_or(CommandError::MissingArgument { verb, argument })?;
            raw.parse::<usize>()
                .map_err(|_| CommandError::NotANumber(raw.to_string()))
        };

        Ok(match verb {
            Verb::Play => Command::Play(number("play", "a cell index")?),
            Verb::Move => {
                let col = number("move", "a column")?;
                let row = number("move", "a row")?;
                Command::Place { col, row }
            }
            Verb::Jump => Command::Jump(number("jump", "a step")?),
            Verb::Resize => Command::Resize(number("resize", "a size")?),
            Verb::Rematch => Command::Rematch,
            Verb::Sort => Command::Sort,
            Verb::Moves => Command::Moves,
            Verb::Board => Command::Board,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        })
    }
}

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Applies one command to the session and returns the text to show.
#[instrument(skip(session))]
pub fn execute(session: &mut GameSession, command: Command) -> (String, Flow) {
    let board_view = |session: &GameSession| {
        format!("{}{}\n", render_board(session), render_status(session))
    };

    let text = match command {
        Command::Play(cell) => match session.apply_move(cell) {
            Ok(_) => board_view(session),
            Err(e) => format!("{}\n", e),
        },
        Command::Place { col, row } => {
            let cell = col
                .checked_sub(1)
                .zip(row.checked_sub(1))
                .and_then(|(c, r)| session.board().index(r, c));
            match cell {
                Some(cell) => return execute(session, Command::Play(cell)),
                None => format!("({}, {}) is not on the board\n", col, row),
            }
        }
        Command::Jump(step) => match session.jump_to(step) {
            Ok(()) => board_view(session),
            Err(e) => format!("{}\n", e),
        },
        Command::Resize(size) => match session.resize(size) {
            Ok(()) => board_view(session),
            Err(e) => format!("{}\n", e),
        },
        Command::Rematch => {
            session.rematch();
            board_view(session)
        }
        Command::Sort => {
            session.toggle_sort_order();
            let order = if session.sort_ascending() { "Ascending" } else { "Descending" };
            format!("Sort: {}\n{}", order, render_moves(session))
        }
        Command::Moves => render_moves(session),
        Command::Board => board_view(session),
        Command::Help => HELP.to_string(),
        Command::Quit => return (String::new(), Flow::Quit),
    };
    (text, Flow::Continue)
}

/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Fails only if reading input or writing output fails.
#[instrument(skip_all, fields(size = session.size()))]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(output, "{}{}", render_board(session), render_status(session))?;
    writeln!(output, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Unparsed command");
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Executing");
        let (text, flow) = execute(session, command);
        write!(output, "{}", text)?;
        if flow == Flow::Quit {
            break;
        }
    }
    output.flush()
}
