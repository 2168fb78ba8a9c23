//! Reference Chess Engine
//!
//! Iterative-deepening alpha-beta with a material and placement evaluation.
//! This is the fixed opponent the neural search is measured against.

mod eval;
mod search;

pub use eval::{evaluate, move_value, piece_value, MATE};
pub use search::{ReferenceSearcher, MAX_DEPTH};
