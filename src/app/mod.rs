//! Application module - the view-synchronization component
//!
//! [`ActivityBoard`] ties the backend client, the pure renderer and the
//! notice slot together behind the `Surface` and `Confirm` seams.
//! [`TerminalSurface`] is the surface the command-line front end commits to;
//! [`command::run`] drives one CLI command through the board.

pub mod board;
pub mod command;
pub mod terminal;

pub use board::{ActivityBoard, LoadOutcome, MutationStatus, GENERIC_ERROR_TEXT};
pub use command::{Command, run};
pub use terminal::TerminalSurface;
