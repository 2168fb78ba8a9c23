//! Self-Play Harness
//!
//! Alternates two players from the starting position until the game ends,
//! appends one outcome line per game to a stats file, and starts over.
//!
//! # Usage
//!
//! ```bash
//! # Neural search (white) against the reference engine (black), forever
//! cargo run -p selfplay --release
//!
//! # Ten games with a trained linear oracle and a fixed seed
//! cargo run -p selfplay --release -- --oracle weights.json --games 10 --seed 7
//! ```
//!
//! Each player tracks its own board; the absolute board in the
//! [`GameRecord`](chess_core::GameRecord) is the referee. Players that search
//! the rotated mailbox board go through [`bridge`] for every move.

pub mod bridge;
mod config;
mod error;
mod game;
mod player;
mod stats;

pub use bridge::{CoordinateBridge, Orientation};
pub use config::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use stats::*;
