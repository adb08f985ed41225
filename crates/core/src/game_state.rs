//! Game state and tick orchestration.
//!
//! This module ties the core components together: snake, food, obstacles,
//! and the speed boost. One `advance` call per tick mutates the state in
//! place and reports the resulting status. The in-tick ordering is
//! load-bearing: fatal collisions are checked before the win condition,
//! and the win condition before any food handling, so a tick that both
//! collides and lands on food reports `Over` without awarding anything.

use std::time::Duration;

use rand::Rng;

use tui_snake_types::{
    Direction, FoodKind, GameStatus, Position, GRID_HEIGHT, GRID_WIDTH, WIN_LENGTH,
};

use crate::boost::SpeedBoost;
use crate::food::Food;
use crate::obstacles::ObstacleField;
use crate::snake::Snake;

/// Complete episode state.
///
/// The entity fields are public for the rendering and input seams (the
/// view reads them every frame, the driver steers through
/// [`Snake::steer`]); score, status, and the apple counters only change
/// through the transition engine and stay behind getters.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Food>,
    pub obstacles: ObstacleField,
    pub speed_boost: SpeedBoost,
    score: u32,
    status: GameStatus,
    apples_eaten: u32,
    apples_by_kind: [u32; 4],
}

impl GameState {
    /// Fresh episode: three segments horizontally centered heading right,
    /// no food yet, no obstacles, score 0, status Running.
    pub fn new() -> Self {
        let center = Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2);
        Self {
            snake: Snake::new(center, 3, Direction::Right),
            food: None,
            obstacles: ObstacleField::new(),
            speed_boost: SpeedBoost::new(),
            score: 0,
            status: GameStatus::Running,
            apples_eaten: 0,
            apples_by_kind: [0; 4],
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Total apples eaten this episode.
    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    /// Apples of one kind eaten this episode.
    pub fn apples_of(&self, kind: FoodKind) -> u32 {
        self.apples_by_kind[kind.index()]
    }

    /// End the episode on a quit input. Only the driver calls this; the
    /// engine never produces `Quit` on its own. Terminal statuses are
    /// never overwritten.
    pub fn quit(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Quit;
        }
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// 1. Move the snake.
    /// 2. Fatal collision (wall, self, obstacle)? -> `Over`, nothing else
    ///    runs this tick.
    /// 3. Reached the win length? -> `Won`, nothing else runs this tick.
    /// 4. Head on the active food? -> apply the reward table.
    /// 5. No active food? -> spawn a replacement.
    /// 6. Clear the speed boost once its window has elapsed.
    ///
    /// # Panics
    ///
    /// Panics when called after the episode has ended.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, now: Duration) -> GameStatus {
        assert_eq!(
            self.status,
            GameStatus::Running,
            "advance called on a finished episode"
        );

        self.snake.advance();

        if self.fatal_collision() {
            self.status = GameStatus::Over;
            return self.status;
        }

        if self.snake.len() >= WIN_LENGTH {
            self.status = GameStatus::Won;
            return self.status;
        }

        if self.head_on_food() {
            self.handle_food_eaten(rng, now);
        }

        if self.food.is_none() {
            self.food = Some(Food::spawn(rng, &self.snake, &self.obstacles));
        }

        self.speed_boost.expire(now);

        self.status
    }

    fn fatal_collision(&self) -> bool {
        self.snake.hits_wall()
            || self.snake.hits_self()
            || self.obstacles.occupies(self.snake.head())
    }

    fn head_on_food(&self) -> bool {
        self.food.map_or(false, |f| f.position == self.snake.head())
    }

    /// Apply the reward table for the food under the head, then consume it.
    fn handle_food_eaten<R: Rng>(&mut self, rng: &mut R, now: Duration) {
        let eaten = match self.food {
            Some(food) => food,
            None => return,
        };

        self.apples_eaten += 1;
        self.apples_by_kind[eaten.kind.index()] += 1;
        self.score += eaten.kind.score_value();
        self.snake.grow(eaten.kind.growth());

        match eaten.kind {
            FoodKind::Gold => self.speed_boost.activate(now),
            FoodKind::Blue => {
                // The eaten food is still the active food as far as the
                // obstacle clearance check is concerned.
                self.obstacles.try_place(rng, &self.snake, self.food.as_ref());
            }
            FoodKind::Regular | FoodKind::Green => {}
        }

        self.food = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
