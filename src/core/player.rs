//! Player identification and per-player score storage.
//!
//! ## Player
//!
//! Faritany is strictly a two-player game, so `Player` is a closed enum
//! rather than an index. Its `code()` is the magnitude used for stones on
//! the board (`1` or `2`).
//!
//! ## Scores
//!
//! Per-player capture counters indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; stones are coded `1`.
    #[default]
    First,
    /// Stones are coded `2`.
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Board code magnitude for this player's stones.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }

    /// Look up a player by the magnitude of a board code.
    ///
    /// ```
    /// use faritany::core::Player;
    ///
    /// assert_eq!(Player::from_code(1), Some(Player::First));
    /// assert_eq!(Player::from_code(-2), Some(Player::Second));
    /// assert_eq!(Player::from_code(0), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code.unsigned_abs() {
            1 => Some(Player::First),
            2 => Some(Player::Second),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// 0-based index, for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.code())
    }
}

/// Capture counters for both players.
///
/// Counters only ever grow; the engine adds to them and never resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Create zeroed scores.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0; 2] }
    }

    /// First player's score.
    #[must_use]
    pub const fn first(&self) -> u32 {
        self.data[0]
    }

    /// Second player's score.
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.data[1]
    }

    /// Credit `amount` captured stones to `player`.
    ///
    /// Saturates rather than wrapping; a board large enough to overflow
    /// `u32` cannot be allocated anyway.
    pub fn add(&mut self, player: Player, amount: u32) {
        let score = &mut self.data[player.index()];
        *score = score.saturating_add(amount);
    }

    /// Iterate over (Player, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(|p| (p, self.data[p.index()]))
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
