//! Board text to oracle input.
//!
//! Each square becomes one small integer:
//! - `.` is 0
//! - `p n b r q k` are 1..=6
//! - `P N B R Q K` are 7..=12

use crate::error::EncodingError;
use mailbox::Position;

/// Squares on the board, and so entries in a feature vector.
pub const SQUARES: usize = 64;

/// Distinct values a feature vector entry can take.
pub const PIECE_CODES: usize = 13;

/// One encoded position, rank by rank in board text order.
pub type FeatureVector = [u8; SQUARES];

const SYMBOLS: &[u8; PIECE_CODES] = b".pnbrqkPNBRQK";

/// Code of a board symbol, `None` outside the board alphabet.
pub fn piece_code(symbol: char) -> Option<u8> {
    let byte = u8::try_from(symbol).ok()?;
    SYMBOLS.iter().position(|&s| s == byte).map(|i| i as u8)
}

/// Encodes board text. Whitespace is ignored; what remains must be exactly
/// 64 board symbols. With `mirror` set every rank is reversed.
pub fn encode(board_text: &str, mirror: bool) -> Result<FeatureVector, EncodingError> {
    let mut out = [0u8; SQUARES];
    let mut count = 0usize;
    for ch in board_text.chars().filter(|c| !c.is_whitespace()) {
        let code = piece_code(ch).ok_or(EncodingError::BadSymbol(ch))?;
        if let Some(slot) = out.get_mut(count) {
            *slot = code;
        }
        count += 1;
    }
    if count != SQUARES {
        return Err(EncodingError::BadLength(count));
    }
    Ok(if mirror { mirrored(&out) } else { out })
}

/// Encodes a mailbox position as seen by its side to move.
pub fn encode_position(pos: &Position, mirror: bool) -> Result<FeatureVector, EncodingError> {
    encode(&pos.board_text(), mirror)
}

/// Reverses every rank of the 8×8 grid. Applying it twice is the identity.
pub fn mirrored(features: &FeatureVector) -> FeatureVector {
    let mut out = *features;
    for rank in out.chunks_exact_mut(8) {
        rank.reverse();
    }
    out
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod features_tests;
