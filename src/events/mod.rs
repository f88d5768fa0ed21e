//! Event channel: the five engine events and their handler slots.

pub mod channel;
pub mod event;

pub use channel::{EventChannel, EventHandler};
pub use event::{EventKind, GameEvent};
