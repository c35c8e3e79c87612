//! Game rules for connect-K.
//!
//! Pure functions over board snapshots. Rules are kept apart from the
//! session so they can be checked in isolation and reused by contracts.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Axis, WinResult, detect_win, win_point};
