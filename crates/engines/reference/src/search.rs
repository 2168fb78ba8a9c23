//! Iterative deepening negamax with alpha-beta pruning

use chess_core::TimeControl;
use mailbox::{MailboxMove, Position};
use std::cmp::Reverse;
use std::time::Duration;
use tracing::debug;

use crate::eval::{evaluate, move_value, MATE};

/// Deepest iteration tried when time allows.
pub const MAX_DEPTH: u32 = 32;

const INFINITY: i32 = MATE * 2;
const CHECK_INTERVAL: u64 = 256;

/// Result of one deepening iteration.
struct SearchOutcome {
    /// Best move found (if any moves exist)
    best_move: Option<(MailboxMove, i32)>,
    /// True if the iteration was stopped early due to time
    stopped: bool,
}

/// Time-bounded searcher. Depth 1 always completes so a move is returned
/// whenever one exists, however small the budget.
#[derive(Debug, Clone)]
pub struct ReferenceSearcher {
    /// Node counter for statistics
    nodes: u64,
    max_depth: u32,
}

impl Default for ReferenceSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceSearcher {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Caps the deepening loop.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches for at most `think` and returns the best move of the deepest
    /// completed iteration with its score.
    pub fn search(&mut self, pos: &Position, think: Duration) -> Option<(MailboxMove, i32)> {
        let mut tc = TimeControl::new(Some(think)).with_check_interval(CHECK_INTERVAL);
        tc.start();
        self.search_with(pos, &tc)
    }

    /// Like [`ReferenceSearcher::search`] with a caller-owned time control,
    /// so the search can also be stopped from outside.
    pub fn search_with(&mut self, pos: &Position, tc: &TimeControl) -> Option<(MailboxMove, i32)> {
        self.nodes = 0;
        let mut best: Option<(MailboxMove, i32)> = None;

        for depth in 1..=self.max_depth {
            let previous = best.map(|(mv, _)| mv);
            let outcome = self.root(pos, depth, previous, tc, depth > 1);
            if outcome.stopped {
                break;
            }
            best = outcome.best_move;
            let Some((_, score)) = best else {
                break;
            };
            debug!(depth, score, nodes = self.nodes, "reference iteration complete");
            if score.abs() >= MATE / 2 {
                break;
            }
        }
        best
    }

    fn root(
        &mut self,
        pos: &Position,
        depth: u32,
        previous: Option<MailboxMove>,
        tc: &TimeControl,
        timed: bool,
    ) -> SearchOutcome {
        let mut moves = ordered_moves(pos);
        // The previous iteration's choice is searched first.
        if let Some(i) = previous.and_then(|pv| moves.iter().position(|&m| m == pv)) {
            let pv = moves.remove(i);
            moves.insert(0, pv);
        }

        let mut best: Option<(MailboxMove, i32)> = None;
        let mut alpha = -INFINITY;
        for mv in moves {
            self.nodes += 1;
            let (score, stopped) =
                self.negamax(&pos.apply(mv), depth - 1, -INFINITY, -alpha, tc, timed);
            if stopped {
                return SearchOutcome {
                    best_move: best,
                    stopped: true,
                };
            }
            let score = -score;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        SearchOutcome {
            best_move: best,
            stopped: false,
        }
    }

    /// Returns (score, stopped) where stopped indicates if search was aborted due to time.
    fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        tc: &TimeControl,
        timed: bool,
    ) -> (i32, bool) {
        // Our king was taken on the previous ply.
        if !pos.cells().contains(&b'K') {
            return (-MATE, false);
        }
        if depth == 0 {
            return (evaluate(pos), false);
        }
        if timed && (tc.is_stopped() || (tc.should_check_time(self.nodes) && tc.check_time())) {
            return (0, true);
        }

        let moves = ordered_moves(pos);
        if moves.is_empty() {
            return (evaluate(pos), false);
        }

        let mut best = -INFINITY;
        for mv in moves {
            self.nodes += 1;
            let (score, stopped) = self.negamax(&pos.apply(mv), depth - 1, -beta, -alpha, tc, timed);
            if stopped {
                return (best, true);
            }
            let score = -score;

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        (best, false)
    }
}

fn ordered_moves(pos: &Position) -> Vec<MailboxMove> {
    let mut moves = pos.gen_moves();
    moves.sort_by_key(|&mv| Reverse(move_value(pos, mv)));
    moves
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
