use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    action::Direction,
    config::GameConfig,
    error::GameError,
    state::{CollisionType, Movement, Position},
};
use crate::collections::BoundedQueue;

/// Target length of a freshly started snake
pub const INITIAL_LENGTH: usize = 2;

/// Random draws tried before food placement falls back to a board scan
const MAX_FOOD_ATTEMPTS: usize = 256;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake has not been aimed yet, nothing moved
    Idle,
    /// The head advanced one cell
    Moved { ate_food: bool },
    /// The round is over and the game is no longer started
    GameOver(CollisionType),
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::GameOver(_))
    }
}

/// The game engine that handles all game logic.
///
/// Board dimensions are fixed at creation. Each round begins with
/// [`start`](Self::start) and ends when [`update`](Self::update) reports
/// [`TickOutcome::GameOver`]; the engine can then be started again.
pub struct GameEngine {
    width: i32,
    height: i32,
    started: bool,
    movement: Movement,
    head: Position,
    food: Option<Position>,
    target_length: usize,
    /// Occupied cells, tail first, head last
    body: BoundedQueue<Position>,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded food generator
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        match config.seed {
            Some(seed) => Self::with_seed(config.grid_width, config.grid_height, seed),
            None => Self::new(config.grid_width, config.grid_height),
        }
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self, GameError> {
        let invalid = GameError::InvalidDimensions { width, height };
        if width < 2 || height < 2 {
            return Err(invalid);
        }

        let w = i32::try_from(width).map_err(|_| invalid)?;
        let h = i32::try_from(height).map_err(|_| invalid)?;
        let area = width.checked_mul(height).ok_or(invalid)?;

        // The snake can never be longer than the board, so appends never overflow
        let body = BoundedQueue::new(area)?;

        Ok(Self {
            width: w,
            height: h,
            started: false,
            movement: Movement::STILL,
            head: Position::new(0, 0),
            food: None,
            target_length: INITIAL_LENGTH,
            body,
            rng,
        })
    }

    /// Begin a round with the head at `(x, y)`
    pub fn start(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let head = Position::new(x, y);
        if !self.is_in_bounds(head) {
            return Err(GameError::PositionOutOfBounds(head));
        }

        self.head = head;
        self.movement = Movement::STILL;
        self.target_length = INITIAL_LENGTH;
        self.body.clear();
        self.body.append(head)?;
        self.started = true;
        self.respawn_food();

        debug!(
            "round started at ({}, {}) on a {}x{} board, food at {:?}",
            x, y, self.width, self.height, self.food
        );

        Ok(())
    }

    /// Aim the snake.
    ///
    /// Returns `Ok(true)` if the movement changed. Requests along the axis
    /// already in motion are ignored, which rules out reversing into the
    /// snake's own neck.
    pub fn set_direction(&mut self, direction: Direction) -> Result<bool, GameError> {
        self.ensure_started()?;

        let Some(axis) = direction.axis() else {
            return Ok(false);
        };

        if self.movement.axis() == Some(axis) {
            return Ok(false);
        }

        self.movement = direction.into();
        Ok(true)
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) -> Result<TickOutcome, GameError> {
        self.ensure_started()?;

        if self.movement.is_still() {
            return Ok(TickOutcome::Idle);
        }

        let next = self.head.stepped(self.movement);

        if let Some(collision) = self.check_collision(next) {
            self.started = false;
            info!(
                "game over: {:?} at ({}, {}) with length {}",
                collision,
                next.x,
                next.y,
                self.body.len()
            );
            return Ok(TickOutcome::GameOver(collision));
        }

        let ate_food = self.food == Some(next);
        if ate_food {
            self.target_length += 1;
            self.respawn_food();
        }

        if self.body.len() >= self.target_length {
            self.body.pop_oldest()?;
        }

        self.body.append(next)?;
        self.head = next;

        // A full spawn region may have opened up after the move
        if self.food.is_none() {
            self.respawn_food();
        }

        Ok(TickOutcome::Moved { ate_food })
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, next: Position) -> Option<CollisionType> {
        if !self.is_in_bounds(next) {
            return Some(CollisionType::Wall);
        }

        // The tail moves out of the way this tick unless the snake is growing
        let mut cells = self.body.iter();
        if self.body.len() >= self.target_length {
            cells.next();
        }

        if cells.any(|&cell| cell == next) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Place food inside `[0, width-1) x [0, height-1)`, away from the body
    /// and from the cell the head moves into next.
    fn respawn_food(&mut self) {
        let next = self.head.stepped(self.movement);
        let (max_x, max_y) = (self.width - 1, self.height - 1);

        for attempt in 0..MAX_FOOD_ATTEMPTS {
            let candidate = Position::new(self.rng.gen_range(0..max_x), self.rng.gen_range(0..max_y));
            if self.is_free_for_food(candidate, next) {
                trace!("food spawned at {:?} after {} draws", candidate, attempt + 1);
                self.food = Some(candidate);
                return;
            }
        }

        debug!(
            "no food spot found in {} random draws, scanning the board",
            MAX_FOOD_ATTEMPTS
        );

        let scanned = (0..max_y)
            .flat_map(|y| (0..max_x).map(move |x| Position::new(x, y)))
            .find(|&candidate| self.is_free_for_food(candidate, next));

        if scanned.is_none() {
            warn!("no free cell left for food");
        }

        self.food = scanned;
    }

    fn is_free_for_food(&self, candidate: Position, next: Position) -> bool {
        candidate != next && !self.body.contains(&candidate)
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.started {
            Ok(())
        } else {
            Err(GameError::NotStarted)
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Number of cells the snake occupies
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Current food cell. `None` before the first start, or when no free
    /// spawn cell was left.
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Occupied cells from tail to head
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Visit occupied cells from tail to head with a caller context
    pub fn for_each_segment<C, F>(&self, context: &mut C, mut visitor: F)
    where
        F: FnMut(&mut C, Position),
    {
        self.body.for_each(context, |context, &cell| visitor(context, cell));
    }
}
