//! The Faritany game engine.
//!
//! `Faritany` owns the board, the scores and the turn, and is the only thing
//! that mutates them. A move goes through these steps:
//!
//! 1. **Place**: reject occupied or off-board cells, write the mover's
//!    active stone, emit `new-point`.
//! 2. **Detect**: enumerate every loop through the new stone, shortest
//!    first (`cycles::traverse`).
//! 3. **Capture**: for each loop, flip the enclosed active opponent stones
//!    and credit the mover, emitting `new-path` then `score-change`.
//! 4. **Turn**: if no loop captured anything, pass the turn and emit
//!    `switch-turn`. A capturing move lets the mover play again.
//!
//! ## Usage
//!
//! ```
//! use faritany::{Faritany, FaritanyConfig, Player};
//!
//! let mut game = Faritany::new(FaritanyConfig::square(5)).unwrap();
//! assert!(game.add_point(2, 2));
//! assert!(!game.add_point(2, 2));
//! assert_eq!(game.get_point(2, 2).unwrap(), 1);
//! assert_eq!(game.current_player(), Player::Second);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::capture::{enclosed_opponents, Capture};
use super::cycles::traverse;
use super::snapshot::Snapshot;
use crate::board::{Board, Stone};
use crate::core::{FaritanyConfig, Player, Point, Scores};
use crate::error::{FaritanyError, Result};
use crate::events::{EventChannel, EventKind, GameEvent};

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the stone went.
    pub point: Point,
    /// Who placed it.
    pub player: Player,
    /// Capturing loops in resolution order. Loops that enclosed nothing are
    /// not listed.
    pub captures: Vec<Capture>,
    /// Whether the turn passed to the opponent.
    pub turn_switched: bool,
}

impl MoveOutcome {
    /// Total stones captured by this move.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captures.iter().map(Capture::count).sum()
    }
}

/// Faritany rule engine.
#[derive(Debug)]
pub struct Faritany {
    board: Board,
    current: Player,
    scores: Scores,
    channel: EventChannel,
}

impl Default for Faritany {
    /// Empty 30x30 game, first player to move.
    fn default() -> Self {
        let config = FaritanyConfig::default();
        Self::with_board(Board::new(config.rows, config.columns))
    }
}

impl Faritany {
    /// Create a game with an empty board.
    ///
    /// Fails with `InvalidDimensions` for zero-sized boards.
    pub fn new(config: FaritanyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_board(Board::new(config.rows, config.columns)))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current: Player::First,
            scores: Scores::new(),
            channel: EventChannel::new(),
        }
    }

    // === Moves ===

    /// Place the current player's stone at `(row, column)`.
    ///
    /// Returns `false`, changing nothing, when the cell is occupied (active
    /// or captured) or off the board.
    pub fn add_point(&mut self, row: usize, column: usize) -> bool {
        match self.try_add_point(row, column) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "move rejected");
                false
            }
        }
    }

    /// Place the current player's stone, reporting what happened.
    pub fn try_add_point(&mut self, row: usize, column: usize) -> Result<MoveOutcome> {
        let point = Point::new(row, column);
        if self.board.get(point)?.is_some() {
            return Err(FaritanyError::Occupied { row, column });
        }

        let player = self.current;
        self.board.set(point, Stone::active(player))?;
        debug!(%player, %point, "stone placed");
        self.channel.emit(&GameEvent::NewPoint { point, player });

        let captures = self.resolve_captures(point, player)?;
        let turn_switched = captures.is_empty();
        if turn_switched {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            point,
            player,
            captures,
            turn_switched,
        })
    }

    /// Resolve every loop through `root` in ascending length order.
    ///
    /// Stones flipped by a shorter loop are no longer active when a longer
    /// loop is examined, so no stone is scored twice.
    fn resolve_captures(&mut self, root: Point, mover: Player) -> Result<Vec<Capture>> {
        let mut captures = Vec::new();

        for path in traverse(&self.board, root) {
            let captured = enclosed_opponents(&self.board, &path, mover);
            if captured.is_empty() {
                continue;
            }

            let amount = u32::try_from(captured.len()).unwrap_or(u32::MAX);
            self.scores.add(mover, amount);
            for &point in &captured {
                self.board.capture(point)?;
            }
            debug!(
                %mover,
                captured = captured.len(),
                loop_len = path.len(),
                first = self.scores.first(),
                second = self.scores.second(),
                "loop captured stones"
            );

            self.channel.emit(&GameEvent::NewPath {
                path: path.clone(),
                player: mover,
            });
            self.channel.emit(&GameEvent::score_change(&self.scores));
            captures.push(Capture { path, captured });
        }

        Ok(captures)
    }

    fn switch_turn(&mut self) {
        self.current = self.current.opponent();
        debug!(player = %self.current, "turn switched");
        self.channel.emit(&GameEvent::SwitchTurn {
            player: self.current,
        });
    }

    // === Board queries ===

    /// Signed code at `(row, column)`: `0` empty, `+n` active, `-n` captured.
    pub fn get_point(&self, row: usize, column: usize) -> Result<i8> {
        self.board.code(Point::new(row, column))
    }

    /// Typed cell contents at a point.
    pub fn cell(&self, point: Point) -> Result<Option<Stone>> {
        self.board.get(point)
    }

    /// Flat row-major snapshot of every code.
    #[must_use]
    pub fn disposition(&self) -> Vec<i8> {
        self.board.disposition()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// Owned copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows(),
            columns: self.columns(),
            disposition: self.disposition(),
            scores: self.scores,
            current_player: self.current,
        }
    }

    // === Turn and score queries ===

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Check if the first player is to move.
    #[must_use]
    pub fn is_first_player_turn(&self) -> bool {
        self.current == Player::First
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Stones captured by the first player.
    #[must_use]
    pub fn first_player_score(&self) -> u32 {
        self.scores.first()
    }

    /// Stones captured by the second player.
    #[must_use]
    pub fn second_player_score(&self) -> u32 {
        self.scores.second()
    }

    // === Events ===

    /// Register the handler for a named channel, replacing any previous one.
    ///
    /// Names are `new-point`, `new-path`, `score-change`, `switch-turn` and
    /// `game-over`; anything else fails with `InvalidChannel`.
    pub fn on(&mut self, name: &str, handler: impl FnMut(&GameEvent) + 'static) -> Result<()> {
        self.channel.on(name, handler)
    }

    /// Register the handler for a channel, replacing any previous one.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.channel.subscribe(kind, handler);
    }

    /// Remove a channel's handler. Returns whether one was registered.
    pub fn off(&mut self, kind: EventKind) -> bool {
        self.channel.off(kind)
    }
}
