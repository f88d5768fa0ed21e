//! Engine event types.
//!
//! Events tell collaborators (renderers, score boards) what a move did.
//! There are exactly five channels, each with a stable string name:
//!
//! | kind | name | payload |
//! |------|------|---------|
//! | `NewPoint` | `new-point` | placed point and its owner |
//! | `NewPath` | `new-path` | capturing loop and the mover |
//! | `ScoreChange` | `score-change` | both players' scores |
//! | `SwitchTurn` | `switch-turn` | player now to move |
//! | `GameOver` | `game-over` | final scores |
//!
//! The rules never declare the game over, so `GameOver` is never emitted by
//! the engine. The channel exists so collaborators can register for it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Player, Point, Scores};
use crate::error::FaritanyError;
use crate::rules::Path;

/// The closed set of event channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    NewPoint,
    NewPath,
    ScoreChange,
    SwitchTurn,
    GameOver,
}

impl EventKind {
    /// Every channel.
    pub const ALL: [EventKind; 5] = [
        EventKind::NewPoint,
        EventKind::NewPath,
        EventKind::ScoreChange,
        EventKind::SwitchTurn,
        EventKind::GameOver,
    ];

    /// Number of channels.
    pub const COUNT: usize = Self::ALL.len();

    /// Channel name as used by `Faritany::on`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::NewPoint => "new-point",
            EventKind::NewPath => "new-path",
            EventKind::ScoreChange => "score-change",
            EventKind::SwitchTurn => "switch-turn",
            EventKind::GameOver => "game-over",
        }
    }

    /// Slot index for handler storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            EventKind::NewPoint => 0,
            EventKind::NewPath => 1,
            EventKind::ScoreChange => 2,
            EventKind::SwitchTurn => 3,
            EventKind::GameOver => 4,
        }
    }
}

impl FromStr for EventKind {
    type Err = FaritanyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FaritanyError::InvalidChannel(s.to_string()))
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An event emitted during a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A stone was placed.
    NewPoint { point: Point, player: Player },

    /// A loop captured at least one stone.
    NewPath { path: Path, player: Player },

    /// Scores after a capture.
    ScoreChange { first: u32, second: u32 },

    /// The turn passed to `player`.
    SwitchTurn { player: Player },

    /// The game ended.
    GameOver { first: u32, second: u32 },
}

impl GameEvent {
    /// Score-change event carrying both counters.
    #[must_use]
    pub fn score_change(scores: &Scores) -> Self {
        GameEvent::ScoreChange {
            first: scores.first(),
            second: scores.second(),
        }
    }

    /// Which channel this event is delivered on.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::NewPoint { .. } => EventKind::NewPoint,
            GameEvent::NewPath { .. } => EventKind::NewPath,
            GameEvent::ScoreChange { .. } => EventKind::ScoreChange,
            GameEvent::SwitchTurn { .. } => EventKind::SwitchTurn,
            GameEvent::GameOver { .. } => EventKind::GameOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_parse() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>().unwrap(), kind);
            assert_eq!(format!("{}", kind), kind.name());
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_channel() {
        let err = "new-move".parse::<EventKind>().unwrap_err();
        assert_eq!(err, FaritanyError::InvalidChannel("new-move".into()));
        assert!("NEW-POINT".parse::<EventKind>().is_err());
        assert!("".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_indices_are_distinct_slots() {
        let mut seen = [false; EventKind::COUNT];
        for kind in EventKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }

    #[test]
    fn test_event_kind() {
        let event = GameEvent::NewPoint { point: Point::new(1, 1), player: Player::First };
        assert_eq!(event.kind(), EventKind::NewPoint);

        let mut scores = Scores::new();
        scores.add(Player::Second, 2);
        let event = GameEvent::score_change(&scores);
        assert_eq!(event, GameEvent::ScoreChange { first: 0, second: 2 });
        assert_eq!(event.kind(), EventKind::ScoreChange);

        let event = GameEvent::SwitchTurn { player: Player::Second };
        assert_eq!(event.kind(), EventKind::SwitchTurn);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::NewPoint { point: Point::new(3, 4), player: Player::Second };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
