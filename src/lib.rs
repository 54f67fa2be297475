//! # Connect Four Engine
//!
//! A Connect Four board model paired with a game-independent depth-limited
//! search (minimax with alpha-beta pruning).
//!
//! ## Modules
//!
//! - [`search`] — Board capability contract, scores, alpha-beta and plain minimax engines
//! - [`game`] — Connect Four board with sentinel border, players, moves, events
//! - [`ai`] — Agents that pick moves on a live board
//! - [`session`] — A game in progress with move history and take-back
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
pub mod session;
