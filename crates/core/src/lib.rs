//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state transitions, and simulation
//! logic. It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same RNG seed and tick sequence produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation tick processing (all arenas are inline)
//!
//! # Module Structure
//!
//! - [`snake`]: Body arena, movement, growth, and wall/self collision checks
//! - [`food`]: Weighted apple kinds and rejection-sampled placement
//! - [`obstacles`]: Fixed-capacity obstacle field with clearance-aware placement
//! - [`boost`]: Timestamped speed boost window
//! - [`game_state`]: Complete episode state and the per-tick transition
//!
//! # Game Rules
//!
//! - **Grid**: 40x20 playable cells ringed by a lethal wall
//! - **Apples**: Red +10 points / +1 length, Green +20 / +2, Gold +50 / +1 and
//!   a 3 second speed boost, Blue +15 / +1 and a new obstacle on the field
//! - **Win**: reach length 50
//! - **Loss**: drive the head into a wall, the body, or an obstacle
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tui_snake_core::GameState;
//! use tui_snake_types::GameStatus;
//!
//! let mut game = GameState::new();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! // One tick: the snake moves, food appears.
//! let status = game.advance(&mut rng, Duration::ZERO);
//! assert_eq!(status, GameStatus::Running);
//! assert!(game.food.is_some());
//! ```
//!
//! # Timing
//!
//! The simulation is turn-stepped: nothing moves between [`GameState::advance`]
//! calls. The driver owns the clock and passes elapsed time into `advance` as
//! plain data; horizontal ticks fire every 100ms, vertical ticks every 170ms,
//! and an active speed boost halves either delay.

pub mod boost;
pub mod food;
pub mod game_state;
pub mod obstacles;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use boost::SpeedBoost;
pub use food::Food;
pub use game_state::GameState;
pub use obstacles::ObstacleField;
pub use snake::Snake;
