//! Shared types module - grid data structures and game constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 40x20 grid surrounded by a one-cell wall ring:
//!
//! - **Playable cells**: x in 1..=40, y in 1..=20
//! - **Wall ring**: x in {0, 41} or y in {0, 21}
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_SNAKE_LENGTH` | 51 | Body arena capacity |
//! | `WIN_LENGTH` | 50 | Body length that wins the episode |
//! | `MAX_OBSTACLES` | 20 | Obstacle arena capacity |
//! | `SPEED_BOOST_DURATION` | 3s | Speed boost window after a gold apple |
//! | `FOOD_SPAWN_ATTEMPTS` | 1000 | Placement budget for food |
//! | `OBSTACLE_SPAWN_ATTEMPTS` | 100 | Placement budget for obstacles |
//!
//! # Movement Timing
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so vertical
//! steps use a longer delay than horizontal steps to keep the apparent
//! speed constant:
//!
//! - `MOVE_DELAY_HORIZONTAL`: 100ms per step heading Left/Right
//! - `MOVE_DELAY_VERTICAL`: 170ms per step heading Up/Down
//!
//! Both delays are halved while a speed boost is active.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, FoodKind, Position, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Grid dimensions
//! assert_eq!(GRID_WIDTH, 40);
//! assert_eq!(GRID_HEIGHT, 20);
//!
//! // Directions know their unit step and their opposite
//! assert_eq!(Direction::Right.delta(), (1, 0));
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//!
//! // A 180-degree reversal is rejected, everything else is allowed
//! assert!(!Direction::Right.can_turn_to(Direction::Left));
//! assert!(Direction::Right.can_turn_to(Direction::Up));
//!
//! // Food kinds carry their reward table
//! assert_eq!(FoodKind::Gold.score_value(), 50);
//! assert_eq!(FoodKind::Green.growth(), 2);
//!
//! let p = Position::new(20, 10);
//! assert_eq!((p.x, p.y), (20, 10));
//! ```

use std::time::Duration;

/// Playfield width in cells (x in 1..=GRID_WIDTH is playable)
pub const GRID_WIDTH: i16 = 40;

/// Playfield height in cells (y in 1..=GRID_HEIGHT is playable)
pub const GRID_HEIGHT: i16 = 20;

/// Maximum snake body length (arena capacity)
pub const MAX_SNAKE_LENGTH: usize = 51;

/// Body length that wins the episode
pub const WIN_LENGTH: usize = 50;

/// Maximum number of obstacles on the field
pub const MAX_OBSTACLES: usize = 20;

/// How long a speed boost stays active after eating a gold apple
pub const SPEED_BOOST_DURATION: Duration = Duration::from_secs(3);

/// Placement attempts before food spawning gives up and keeps the last sample
pub const FOOD_SPAWN_ATTEMPTS: u32 = 1000;

/// Placement attempts before obstacle spawning gives up without placing
pub const OBSTACLE_SPAWN_ATTEMPTS: u32 = 100;

/// Obstacles must not land within this half-open Chebyshev radius of the
/// active food (keeps the food reachable)
pub const OBSTACLE_FOOD_CLEARANCE: i16 = 3;

/// Step delay while heading Left/Right
pub const MOVE_DELAY_HORIZONTAL: Duration = Duration::from_millis(100);

/// Step delay while heading Up/Down
pub const MOVE_DELAY_VERTICAL: Duration = Duration::from_millis(170);

/// A cell coordinate on the grid
///
/// Playable cells are `1..=GRID_WIDTH` x `1..=GRID_HEIGHT`; coordinates on
/// the surrounding ring (0 or `GRID_WIDTH + 1` / `GRID_HEIGHT + 1`) are
/// wall cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// The four movement directions
///
/// Up decreases y, Down increases y (screen coordinates, row 0 on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in turn order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step `(dx, dy)` for one move in this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// ```
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The 180-degree reverse of this direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Whether a requested direction change is legal from this heading
    ///
    /// Only the exact opposite is rejected; repeating the current heading
    /// is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert!(Direction::Up.can_turn_to(Direction::Left));
    /// assert!(Direction::Up.can_turn_to(Direction::Up));
    /// assert!(!Direction::Up.can_turn_to(Direction::Down));
    /// ```
    pub fn can_turn_to(self, requested: Direction) -> bool {
        requested != self.opposite()
    }

    /// True for Left/Right headings
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// The four apple kinds and their effects
///
/// | Kind | Glyph | Score | Growth | Extra effect |
/// |------|-------|-------|--------|--------------|
/// | Regular | `*` | +10 | +1 | - |
/// | Green | `$` | +20 | +2 | - |
/// | Gold | `@` | +50 | +1 | speed boost |
/// | Blue | `#` | +15 | +1 | new obstacle |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Regular,
    Green,
    Gold,
    Blue,
}

impl FoodKind {
    /// All kinds, in counter-index order
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Regular,
        FoodKind::Green,
        FoodKind::Gold,
        FoodKind::Blue,
    ];

    /// Points awarded for eating this kind
    pub const fn score_value(self) -> u32 {
        match self {
            FoodKind::Regular => 10,
            FoodKind::Green => 20,
            FoodKind::Gold => 50,
            FoodKind::Blue => 15,
        }
    }

    /// Body segments gained from eating this kind
    pub const fn growth(self) -> usize {
        match self {
            FoodKind::Regular => 1,
            FoodKind::Green => 2,
            FoodKind::Gold => 1,
            FoodKind::Blue => 1,
        }
    }

    /// Stable index for per-kind counters
    pub const fn index(self) -> usize {
        match self {
            FoodKind::Regular => 0,
            FoodKind::Green => 1,
            FoodKind::Gold => 2,
            FoodKind::Blue => 3,
        }
    }
}

/// Episode status
///
/// `Running` is the initial state; the other three are terminal. `Quit` is
/// only ever set by the driver in response to a quit input, never by the
/// transition engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
    Quit,
    Won,
}

impl GameStatus {
    /// True once the episode has ended (no further ticks are legal)
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}
