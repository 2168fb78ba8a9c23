//! Neural Network Search Engine
//!
//! Negamax with alpha-beta pruning over the rotated mailbox board. Leaf
//! positions are not evaluated by hand-written rules: every node encodes all
//! of its children and hands them to a [`ScoreOracle`] in one batch.
//!
//! # Oracles
//!
//! - [`LinearOracle`]: per-piece weights with optional square bonuses, loaded
//!   from a JSON artifact or built from the default material table.
//! - `OnnxOracle` (feature `onnx`): a model exported to ONNX taking an
//!   `(N, 64)` batch of piece codes.

mod error;
mod features;
mod oracle;
mod search;

#[cfg(feature = "onnx")]
mod onnx_oracle;

pub use error::*;
pub use features::*;
pub use oracle::*;
pub use search::*;

#[cfg(feature = "onnx")]
pub use onnx_oracle::OnnxOracle;
