//! Food spawning.
//!
//! At most one food item exists at a time (`Option<Food>` on the game
//! state). Spawning draws the kind first from a fixed discrete table, then
//! samples positions best-effort: after the attempt budget runs out the
//! last sampled cell is kept even if it overlaps something, rather than
//! looping forever on a crowded field.

use rand::Rng;

use tui_snake_types::{FoodKind, Position, FOOD_SPAWN_ATTEMPTS, GRID_HEIGHT, GRID_WIDTH};

use crate::obstacles::ObstacleField;
use crate::snake::Snake;

/// An active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Spawn a replacement food item on a cell that is free of the snake
    /// and of obstacles (best-effort within `FOOD_SPAWN_ATTEMPTS`).
    ///
    /// The kind is drawn before any position sampling so the reward odds
    /// never depend on how crowded the field is: 60% Regular, 15% Green,
    /// 10% Gold, 15% Blue.
    pub fn spawn<R: Rng>(rng: &mut R, snake: &Snake, obstacles: &ObstacleField) -> Self {
        let kind = roll_kind(rng);

        let mut position = random_cell(rng);
        let mut attempts = 1;
        while attempts < FOOD_SPAWN_ATTEMPTS
            && (snake.occupies(position) || obstacles.occupies(position))
        {
            position = random_cell(rng);
            attempts += 1;
        }

        Self { position, kind }
    }
}

fn roll_kind<R: Rng>(rng: &mut R) -> FoodKind {
    match rng.gen_range(0..100) {
        0..=59 => FoodKind::Regular,
        60..=74 => FoodKind::Green,
        75..=84 => FoodKind::Gold,
        _ => FoodKind::Blue,
    }
}

/// Uniform sample over the playable area.
pub(crate) fn random_cell<R: Rng>(rng: &mut R) -> Position {
    Position::new(rng.gen_range(1..=GRID_WIDTH), rng.gen_range(1..=GRID_HEIGHT))
}
