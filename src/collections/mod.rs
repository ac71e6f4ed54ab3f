//! Fixed-capacity containers used by the game core

pub mod queue;

pub use queue::{BoundedQueue, Iter, QueueError};
