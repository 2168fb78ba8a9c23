//! The players a game loop can alternate.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::time::Duration;

use chess_core::{
    move_to_uci, parse_pseudo_legal_move, parse_uci_move, ChessError, Color, GameRecord, Move,
};
use mailbox::Position;
use neural_engine::{ScoreOracle, SearchEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reference_engine::ReferenceSearcher;
use tracing::debug;

use crate::bridge::{to_internal, CoordinateBridge, Orientation};
use crate::error::PlayerError;

/// Produces the next move of a game.
pub trait Player {
    /// Picks a move for the side to move in `game`.
    fn play(&mut self, game: &GameRecord) -> Result<Move, PlayerError>;

    fn name(&self) -> &str;

    /// Called before the first move of every game.
    fn new_game(&mut self) {}
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A mailbox board kept in step with a game record.
#[derive(Debug, Clone, Default)]
struct MailboxBoard {
    pos: Position,
    applied: usize,
}

impl MailboxBoard {
    /// Applies the record's moves this board has not seen yet, each turned
    /// into the orientation of the side that played it.
    fn sync(&mut self, game: &GameRecord) -> Result<&Position, PlayerError> {
        let moves = game.moves();
        if moves.len() < self.applied {
            *self = Self::default();
        }
        for (ply, &mv) in moves.iter().enumerate().skip(self.applied) {
            let mover = if ply % 2 == 0 { Color::White } else { Color::Black };
            let internal = to_internal(Orientation::for_mover(mover), &move_to_uci(mv))?;
            self.pos = self.pos.try_apply(internal)?;
            self.applied += 1;
        }
        Ok(&self.pos)
    }
}

/// Negamax over the mailbox board with a score oracle.
pub struct SearchPlayer {
    oracle: Rc<dyn ScoreOracle>,
    depth_range: RangeInclusive<u32>,
    depth: u32,
    rng: StdRng,
    board: MailboxBoard,
    name: String,
}

impl SearchPlayer {
    /// A player searching to a fixed depth.
    pub fn new(oracle: Rc<dyn ScoreOracle>, depth: u32) -> Self {
        let depth = depth.max(1);
        let name = format!("search-{}", oracle.name());
        Self {
            oracle,
            depth_range: depth..=depth,
            depth,
            rng: rng_from(Some(0)),
            board: MailboxBoard::default(),
            name,
        }
    }

    /// Draws a new depth from `range` at the start of every game.
    pub fn with_depth_range(mut self, range: RangeInclusive<u32>, seed: Option<u64>) -> Self {
        let lo = (*range.start()).max(1);
        let hi = (*range.end()).max(lo);
        self.depth_range = lo..=hi;
        self.depth = lo;
        self.rng = rng_from(seed);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for SearchPlayer {
    fn play(&mut self, game: &GameRecord) -> Result<Move, PlayerError> {
        let bridge = CoordinateBridge::new(game.side_to_move());
        let pos = self.board.sync(game)?;

        let result = SearchEngine::new(self.oracle.as_ref()).search_root(pos, self.depth)?;
        let best = result
            .best_move
            .ok_or_else(|| PlayerError::NoMove(self.name.clone()))?;
        let text = bridge.own_to_external(best);
        debug!(
            depth = self.depth,
            value = result.value,
            nodes = result.nodes,
            mv = %text,
            "search player"
        );
        Ok(parse_pseudo_legal_move(game.board(), &text)?)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.board = MailboxBoard::default();
        self.depth = self.rng.gen_range(self.depth_range.clone());
    }
}

/// The reference engine thinking for a fixed time per move.
pub struct ReferencePlayer {
    searcher: ReferenceSearcher,
    secs_range: (f64, f64),
    think: Duration,
    rng: StdRng,
    board: MailboxBoard,
}

impl ReferencePlayer {
    pub fn new(think: Duration) -> Self {
        let secs = think.as_secs_f64();
        Self {
            searcher: ReferenceSearcher::new(),
            secs_range: (secs, secs),
            think,
            rng: rng_from(Some(0)),
            board: MailboxBoard::default(),
        }
    }

    /// Draws a new think time, in seconds, from `[lo, hi]` every game.
    pub fn with_secs_range(mut self, lo: f64, hi: f64, seed: Option<u64>) -> Self {
        let lo = lo.max(0.0);
        self.secs_range = (lo, hi.max(lo));
        self.think = Duration::from_secs_f64(lo);
        self.rng = rng_from(seed);
        self
    }

    /// Caps the search depth, mostly so tests finish quickly.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.searcher = self.searcher.with_max_depth(depth);
        self
    }

    pub fn think_time(&self) -> Duration {
        self.think
    }
}

impl Player for ReferencePlayer {
    fn play(&mut self, game: &GameRecord) -> Result<Move, PlayerError> {
        let bridge = CoordinateBridge::new(game.side_to_move());
        let pos = self.board.sync(game)?;

        let (best, score) = self
            .searcher
            .search(pos, self.think)
            .ok_or_else(|| PlayerError::NoMove(self.name().to_string()))?;
        let text = bridge.own_to_external(best);
        debug!(
            score,
            nodes = self.searcher.nodes(),
            mv = %text,
            "reference player"
        );
        Ok(parse_pseudo_legal_move(game.board(), &text)?)
    }

    fn name(&self) -> &str {
        "reference"
    }

    fn new_game(&mut self) {
        self.board = MailboxBoard::default();
        let (lo, hi) = self.secs_range;
        let secs = if hi > lo { self.rng.gen_range(lo..=hi) } else { lo };
        self.think = Duration::from_secs_f64(secs);
    }
}

/// Where an [`InteractivePlayer`] reads its lines from.
pub trait LineSource {
    /// Appends one line to `buf`, returning 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin for one line at a time, so two players can share it.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads moves as long algebraic text, one per line, asking again until a
/// legal one is given.
pub struct InteractivePlayer<R, W> {
    input: R,
    output: W,
}

impl InteractivePlayer<Stdin, Stdout> {
    /// A player on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> InteractivePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Player for InteractivePlayer<R, W> {
    fn play(&mut self, game: &GameRecord) -> Result<Move, PlayerError> {
        writeln!(self.output, "{}", game.board())?;
        loop {
            write!(self.output, "your turn: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::Interrupted);
            }
            match parse_uci_move(game.board(), line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(ChessError::IllegalMove(_)) => writeln!(self.output, "not a legal move")?,
                Err(_) => writeln!(self.output, "cannot parse move")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
