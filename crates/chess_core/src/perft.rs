use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let (buf, rest) = match layers.split_first_mut() {
            Some(split) if depth > 0 => split,
            _ => return 1,
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }
        let moves = std::mem::take(buf);
        let nodes: u64 = moves
            .iter()
            .map(|&mv| inner(&pos.play(mv), depth - 1, rest))
            .sum();
        *buf = moves;
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
