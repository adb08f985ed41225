//! Static obstacles.
//!
//! Obstacles are permanent for the episode. The field is a bounded arena
//! in insertion order (creation order is also draw order); blue apples
//! trigger a best-effort placement that silently gives up when the budget
//! runs out or the field is full.

use arrayvec::ArrayVec;
use rand::Rng;

use tui_snake_types::{Position, MAX_OBSTACLES, OBSTACLE_FOOD_CLEARANCE, OBSTACLE_SPAWN_ATTEMPTS};

use crate::food::{random_cell, Food};
use crate::snake::Snake;

/// The set of placed obstacles, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    cells: ArrayVec<Position, MAX_OBSTACLES>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed obstacles in creation order.
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.is_full()
    }

    /// Whether any obstacle occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.cells.iter().any(|&p| p == pos)
    }

    /// Insert an obstacle at an exact cell. Returns false once the field
    /// is at capacity.
    pub fn add(&mut self, pos: Position) -> bool {
        self.cells.try_push(pos).is_ok()
    }

    /// Sample a free cell and place an obstacle there, rejecting cells on
    /// the snake, on an existing obstacle, or within the clearance zone of
    /// the active food.
    ///
    /// Best-effort: returns false without placing when the field is full
    /// or no valid cell turns up within `OBSTACLE_SPAWN_ATTEMPTS`.
    pub fn try_place<R: Rng>(&mut self, rng: &mut R, snake: &Snake, food: Option<&Food>) -> bool {
        if self.is_full() {
            return false;
        }

        for _ in 0..OBSTACLE_SPAWN_ATTEMPTS {
            let candidate = random_cell(rng);
            if snake.occupies(candidate)
                || self.occupies(candidate)
                || too_close_to_food(candidate, food)
            {
                continue;
            }
            return self.add(candidate);
        }
        false
    }
}

fn too_close_to_food(candidate: Position, food: Option<&Food>) -> bool {
    food.map_or(false, |f| {
        (candidate.x - f.position.x).abs() < OBSTACLE_FOOD_CLEARANCE
            && (candidate.y - f.position.y).abs() < OBSTACLE_FOOD_CLEARANCE
    })
}
