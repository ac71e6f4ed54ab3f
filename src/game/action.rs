/// Direction requested by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No request this frame
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Axis a movement runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction.
    ///
    /// The y axis grows upward, so `Up` is `(0, 1)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The axis this direction moves along, `None` for [`Direction::None`]
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Direction::None => None,
            Direction::Up | Direction::Down => Some(Axis::Vertical),
            Direction::Left | Direction::Right => Some(Axis::Horizontal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::None.delta(), (0, 0));
        assert_eq!(Direction::Up.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (0, -1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_axis() {
        assert_eq!(Direction::Up.axis(), Some(Axis::Vertical));
        assert_eq!(Direction::Down.axis(), Some(Axis::Vertical));
        assert_eq!(Direction::Left.axis(), Some(Axis::Horizontal));
        assert_eq!(Direction::Right.axis(), Some(Axis::Horizontal));
        assert_eq!(Direction::None.axis(), None);
    }
}
