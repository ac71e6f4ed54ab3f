use super::action::{Axis, Direction};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one step along `movement`
    pub fn stepped(&self, movement: Movement) -> Self {
        self.moved_by(movement.dx, movement.dy)
    }
}

/// Per-tick displacement of the snake head.
///
/// Always one of `(0,0)`, `(0,±1)` or `(±1,0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    pub dx: i32,
    pub dy: i32,
}

impl Movement {
    /// The snake has not been aimed yet
    pub const STILL: Movement = Movement { dx: 0, dy: 0 };

    pub fn is_still(&self) -> bool {
        *self == Self::STILL
    }

    /// Axis currently in motion, if any
    pub fn axis(&self) -> Option<Axis> {
        if self.dx != 0 {
            Some(Axis::Horizontal)
        } else if self.dy != 0 {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}

impl From<Direction> for Movement {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_stepped_follows_direction() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.stepped(Direction::Up.into()), Position::new(2, 3));
        assert_eq!(pos.stepped(Direction::Down.into()), Position::new(2, 1));
        assert_eq!(pos.stepped(Movement::STILL), pos);
    }

    #[test]
    fn test_movement_axis() {
        assert_eq!(Movement::STILL.axis(), None);
        assert!(Movement::STILL.is_still());
        assert_eq!(Movement::from(Direction::Left).axis(), Some(Axis::Horizontal));
        assert_eq!(Movement::from(Direction::Up).axis(), Some(Axis::Vertical));
        assert_eq!(Movement::from(Direction::None), Movement::STILL);
    }
}
