//! Core Connect Four game logic: board representation with sentinel border,
//! players, moves, move ordering and board events.

mod board;
mod events;
mod moves;
mod ordering;
mod player;

pub use board::{BoardConfig, ConnectBoard, GameOutcome, COLS, ROWS, WIN_LENGTH};
pub use events::{BoardEvent, BoardObserver};
pub use moves::{ConnectMove, Coord};
pub use ordering::{center_out, MoveOrdering};
pub use player::Player;
