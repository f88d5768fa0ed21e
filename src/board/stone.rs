//! Stones and their signed board codes.
//!
//! A cell's state is two independent facts: who owns the stone and whether
//! it has been captured. Collaborators still see the compact signed code:
//!
//! | code | meaning |
//! |------|---------|
//! | `0`  | empty |
//! | `+1` / `+2` | active stone of player 1 / 2 |
//! | `-1` / `-2` | captured stone of player 1 / 2 |

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// A stone on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub owner: Player,
    pub captured: bool,
}

impl Stone {
    /// An active (uncaptured) stone.
    #[must_use]
    pub const fn active(owner: Player) -> Self {
        Self { owner, captured: false }
    }

    /// A captured stone.
    #[must_use]
    pub const fn captured(owner: Player) -> Self {
        Self { owner, captured: true }
    }

    /// Signed board code: owner magnitude, negated once captured.
    #[must_use]
    pub const fn code(self) -> i8 {
        if self.captured {
            -self.owner.code()
        } else {
            self.owner.code()
        }
    }

    /// Decode a non-zero board code.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match Player::from_code(code) {
            Some(owner) => Some(Self { owner, captured: code < 0 }),
            None => None,
        }
    }

    /// The same stone after capture.
    #[must_use]
    pub const fn into_captured(self) -> Self {
        Self::captured(self.owner)
    }

    /// Active stone owned by someone other than `player`.
    #[must_use]
    pub fn is_capturable_by(self, player: Player) -> bool {
        !self.captured && self.owner != player
    }
}

/// Board code of an optional stone (`0` for empty).
#[must_use]
pub fn cell_code(cell: Option<Stone>) -> i8 {
    cell.map_or(0, Stone::code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_codes() {
        assert_eq!(Stone::active(Player::First).code(), 1);
        assert_eq!(Stone::active(Player::Second).code(), 2);
        assert_eq!(Stone::captured(Player::First).code(), -1);
        assert_eq!(Stone::captured(Player::Second).code(), -2);
        assert_eq!(cell_code(None), 0);
    }

    #[test]
    fn test_code_decodes_to_same_stone() {
        for code in [-2i8, -1, 1, 2] {
            let stone = Stone::from_code(code).unwrap();
            assert_eq!(stone.code(), code);
            assert_eq!(stone.owner.code(), code.abs());
            assert_eq!(stone.captured, code < 0);
        }
        assert_eq!(Stone::from_code(0), None);
    }

    #[test]
    fn test_capture_keeps_owner() {
        let stone = Stone::active(Player::Second).into_captured();
        assert_eq!(stone.owner, Player::Second);
        assert!(stone.captured);
    }

    #[test]
    fn test_capturable() {
        assert!(Stone::active(Player::Second).is_capturable_by(Player::First));
        assert!(!Stone::active(Player::First).is_capturable_by(Player::First));
        assert!(!Stone::captured(Player::Second).is_capturable_by(Player::First));
    }
}
