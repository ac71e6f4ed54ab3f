use std::fmt;

use super::state::Position;
use crate::collections::QueueError;

/// Misuse of the game engine.
///
/// These signal a bug in the calling code. Losing a round is not an error,
/// see [`TickOutcome::GameOver`](super::TickOutcome::GameOver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Both dimensions must be at least 2 and the area must fit in memory
    InvalidDimensions { width: usize, height: usize },
    AlreadyStarted,
    NotStarted,
    PositionOutOfBounds(Position),
    Queue(QueueError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
            GameError::AlreadyStarted => write!(f, "attempting to start an already started game"),
            GameError::NotStarted => {
                write!(f, "attempting to interact with a game that hasn't started yet")
            }
            GameError::PositionOutOfBounds(pos) => write!(
                f,
                "attempting to start a game with an invalid position: ({}, {})",
                pos.x, pos.y
            ),
            GameError::Queue(err) => write!(f, "snake body: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Queue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QueueError> for GameError {
    fn from(err: QueueError) -> Self {
        GameError::Queue(err)
    }
}
