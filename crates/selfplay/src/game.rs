//! Game loop for self-play between two players

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chess_core::{both_kings_present, move_to_uci, Color, GameRecord};
use tracing::{debug, info, warn};

use crate::error::{GameError, PlayerError};
use crate::player::Player;
use crate::stats::StatsLog;

/// Seat at the board. Side A plays white, side B black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn color(self) -> Color {
        match self {
            Side::A => Color::White,
            Side::B => Color::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::A => "A",
            Side::B => "B",
        })
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    /// The side failed to produce a legal move and loses
    Exception(Side),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side}"),
            Outcome::Draw => f.write_str("-"),
            Outcome::Exception(side) => write!(f, "{side}-exception"),
        }
    }
}

/// Seconds each side spent producing its moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideTimes {
    pub a: f64,
    pub b: f64,
}

impl SideTimes {
    pub fn add(&mut self, side: Side, secs: f64) {
        match side {
            Side::A => self.a += secs,
            Side::B => self.b += secs,
        }
    }
}

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub times: SideTimes,
    pub record: GameRecord,
}

/// Alternates two players game after game, logging every result.
pub struct GameLoop {
    player_a: Box<dyn Player>,
    player_b: Box<dyn Player>,
    stats: StatsLog,
    stop: Arc<AtomicBool>,
}

impl GameLoop {
    pub fn new(player_a: Box<dyn Player>, player_b: Box<dyn Player>, stats: StatsLog) -> Self {
        Self {
            player_a,
            player_b,
            stats,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that ends the loop before the next move once set. The game in
    /// progress is dropped without a stats line.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Plays one game from the starting position. Returns `None` when play
    /// was interrupted.
    pub fn play_game(&mut self) -> Option<GameSummary> {
        let mut game = GameRecord::new();
        let mut times = SideTimes::default();
        self.player_a.new_game();
        self.player_b.new_game();

        loop {
            for side in [Side::A, Side::B] {
                if self.stop.load(Ordering::Relaxed) {
                    return None;
                }
                let player = match side {
                    Side::A => self.player_a.as_mut(),
                    Side::B => self.player_b.as_mut(),
                };

                let start = Instant::now();
                let produced = player
                    .play(&game)
                    .and_then(|mv| game.push(mv).map_err(PlayerError::from));
                match produced {
                    Ok(_) => {}
                    Err(PlayerError::Interrupted) => {
                        info!(%side, "play interrupted");
                        return None;
                    }
                    Err(error) => {
                        warn!(%side, player = player.name(), %error, "player failed");
                        return Some(GameSummary {
                            outcome: Outcome::Exception(side),
                            times,
                            record: game,
                        });
                    }
                }
                let secs = start.elapsed().as_secs_f64();
                times.add(side, secs);

                let board = game.board();
                let rendered = board.render();
                let mv = game.last_move().map(move_to_uci).unwrap_or_default();
                info!(%side, mv = %mv, secs, "move");
                debug!("\n{rendered}");

                let outcome = if board.is_checkmate() {
                    Some(Outcome::Win(side))
                } else if board.is_stalemate() || board.can_claim_fifty_moves() {
                    Some(Outcome::Draw)
                } else if !both_kings_present(&rendered) {
                    Some(Outcome::Win(side))
                } else {
                    None
                };
                if let Some(outcome) = outcome {
                    return Some(GameSummary {
                        outcome,
                        times,
                        record: game,
                    });
                }
            }
        }
    }

    /// Plays games until `max_games` are done (forever when `None`) or play
    /// is interrupted. Returns the number of games logged.
    pub fn run(&mut self, max_games: Option<u64>) -> Result<u64, GameError> {
        let mut played = 0u64;
        while max_games.map_or(true, |n| played < n) {
            let Some(summary) = self.play_game() else {
                break;
            };
            self.stats.append(summary.outcome, summary.times)?;
            played += 1;
            info!(
                game = played,
                outcome = %summary.outcome,
                plies = summary.record.len(),
                a_secs = summary.times.a,
                b_secs = summary.times.b,
                "game finished"
            );
        }
        Ok(played)
    }
}
