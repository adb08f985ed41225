//! Integration tests for the full game loop

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tui_snake::core::{Food, GameState};
use tui_snake::input::handle_key_event;
use tui_snake::types::{
    Direction, FoodKind, GameStatus, Position, GRID_HEIGHT, GRID_WIDTH, MAX_OBSTACLES,
    MAX_SNAKE_LENGTH, WIN_LENGTH,
};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Keep the active food out of the snake's straight-line path so a test can
/// tick without triggering eats or respawns.
fn park_food(game: &mut GameState) {
    game.food = Some(Food {
        position: Position::new(1, 1),
        kind: FoodKind::Regular,
    });
}

/// Put food of the given kind directly ahead of the head.
fn feed(game: &mut GameState, kind: FoodKind) {
    let head = game.snake.head();
    let (dx, dy) = game.snake.direction.delta();
    game.food = Some(Food {
        position: Position::new(head.x + dx, head.y + dy),
        kind,
    });
}

/// Turn away from the wall whenever the heading points out of the field, so
/// a steered walk only ends through genuine hazards (body or obstacles).
fn steer_off_walls(game: &mut GameState) {
    let head = game.snake.head();
    let next = match game.snake.direction {
        Direction::Right if head.x >= GRID_WIDTH => Some(if head.y >= GRID_HEIGHT {
            Direction::Up
        } else {
            Direction::Down
        }),
        Direction::Down if head.y >= GRID_HEIGHT => Some(if head.x <= 1 {
            Direction::Right
        } else {
            Direction::Left
        }),
        Direction::Left if head.x <= 1 => Some(if head.y <= 1 {
            Direction::Down
        } else {
            Direction::Up
        }),
        Direction::Up if head.y <= 1 => Some(if head.x >= GRID_WIDTH {
            Direction::Left
        } else {
            Direction::Right
        }),
        _ => None,
    };
    if let Some(dir) = next {
        game.snake.steer(dir);
    }
}

#[test]
fn test_episode_spawns_steers_and_eats() {
    let mut game = GameState::new();
    let mut rng = rng(11);

    // First tick puts food on the board.
    assert_eq!(game.advance(&mut rng, Duration::ZERO), GameStatus::Running);
    assert!(game.food.is_some());

    // Steer down through the reversal filter.
    game.snake.steer(Direction::Down);
    park_food(&mut game);
    game.advance(&mut rng, Duration::ZERO);
    game.advance(&mut rng, Duration::ZERO);
    assert_eq!(game.snake.direction, Direction::Down);

    // Eat a regular apple placed in the path.
    feed(&mut game, FoodKind::Regular);
    game.advance(&mut rng, Duration::ZERO);

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 10);
    assert_eq!(game.snake.len(), 4);
    assert_eq!(game.apples_eaten(), 1);
    assert!(game.food.is_some(), "a replacement apple spawned");
}

#[test]
fn test_running_into_the_wall_ends_the_episode() {
    let mut game = GameState::new();
    let mut rng = rng(5);
    park_food(&mut game);

    let mut ticks = 0;
    while game.status() == GameStatus::Running {
        game.advance(&mut rng, Duration::ZERO);
        ticks += 1;
        assert!(ticks <= GRID_WIDTH as u32, "snake should die at the wall");
    }

    assert_eq!(game.status(), GameStatus::Over);
    assert_eq!(game.snake.head().x, GRID_WIDTH + 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_reversal_is_rejected_and_straight_death_avoided_by_turning() {
    let mut game = GameState::new();
    let mut rng = rng(5);
    park_food(&mut game);

    // Heading right, a left request is dropped by the steering filter.
    game.snake.steer(Direction::Left);
    assert_eq!(game.snake.direction, Direction::Right);

    // A legal turn is honored on the next tick.
    game.snake.steer(Direction::Down);
    game.advance(&mut rng, Duration::ZERO);
    assert_eq!(game.snake.head(), Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2 + 1));
}

#[test]
fn test_two_presses_in_one_window_apply_at_most_one_turn() {
    let mut game = GameState::new();
    let mut rng = rng(13);
    park_food(&mut game);
    game.advance(&mut rng, Duration::ZERO);
    let head = game.snake.head();

    // Up and Left land within a single movement window. Only the latest
    // request survives the buffer, and it is filtered against the heading
    // the snake is actually traveling, so the pair cannot fold the head
    // back into the neck.
    let mut requested = None;
    for key in [KeyEvent::from(KeyCode::Up), KeyEvent::from(KeyCode::Left)] {
        if let Some(dir) = handle_key_event(key) {
            requested = Some(dir);
        }
    }
    if let Some(dir) = requested.take() {
        game.snake.steer(dir);
    }
    game.advance(&mut rng, Duration::ZERO);

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.snake.direction, Direction::Right);
    assert_eq!(game.snake.head(), Position::new(head.x + 1, head.y));

    // A lone press in the next window turns as usual.
    requested = handle_key_event(KeyEvent::from(KeyCode::Up));
    if let Some(dir) = requested.take() {
        game.snake.steer(dir);
    }
    game.advance(&mut rng, Duration::ZERO);

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.snake.direction, Direction::Up);
}

#[test]
fn test_winning_at_the_target_length() {
    let mut game = GameState::new();
    let mut rng = rng(3);

    // Grow to one under the target, then eat one more apple.
    game.snake.grow(WIN_LENGTH - 4);
    feed(&mut game, FoodKind::Regular);
    assert_eq!(game.advance(&mut rng, Duration::ZERO), GameStatus::Running);
    assert_eq!(game.snake.len(), WIN_LENGTH);

    assert_eq!(game.advance(&mut rng, Duration::ZERO), GameStatus::Won);
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.status().is_terminal());
}

#[test]
fn test_gold_apple_boost_window_opens_and_closes() {
    let mut game = GameState::new();
    let mut rng = rng(9);

    feed(&mut game, FoodKind::Gold);
    game.advance(&mut rng, Duration::from_secs(10));

    assert_eq!(game.score(), 50);
    assert!(game.speed_boost.is_active(Duration::from_secs(11)));

    park_food(&mut game);
    game.advance(&mut rng, Duration::from_secs(14));
    assert!(!game.speed_boost.is_active(Duration::from_secs(14)));
}

#[test]
fn test_a_full_meal_of_every_apple_kind() {
    let mut game = GameState::new();
    let mut rng = rng(21);
    let now = Duration::from_secs(1);

    feed(&mut game, FoodKind::Regular);
    game.advance(&mut rng, now);
    feed(&mut game, FoodKind::Green);
    game.advance(&mut rng, now);
    feed(&mut game, FoodKind::Gold);
    game.advance(&mut rng, now);
    feed(&mut game, FoodKind::Blue);
    game.advance(&mut rng, now);

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 10 + 20 + 50 + 15);
    assert_eq!(game.snake.len(), 3 + 1 + 2 + 1 + 1);
    assert_eq!(game.apples_eaten(), 4);
    for kind in FoodKind::ALL {
        assert_eq!(game.apples_of(kind), 1);
    }
    assert_eq!(game.obstacles.len(), 1);
    assert!(game.speed_boost.is_active(now));
}

#[test]
fn test_quit_request_ends_the_episode_without_a_result_screen_state() {
    let mut game = GameState::new();
    let mut rng = rng(2);

    game.advance(&mut rng, Duration::ZERO);
    game.quit();

    assert_eq!(game.status(), GameStatus::Quit);
    assert!(game.status().is_terminal());
}

#[test]
fn test_long_random_playthroughs_keep_the_books_straight() {
    for seed in 0..20 {
        let mut game = GameState::new();
        let mut rng = rng(seed);
        let mut now = Duration::ZERO;

        for _ in 0..500 {
            if game.status() != GameStatus::Running {
                break;
            }

            // Random steering through the same filter the driver uses,
            // then a nudge so the walk does not end on a trivial wall strike.
            game.snake.steer(Direction::ALL[rng.gen_range(0..4)]);
            steer_off_walls(&mut game);

            now += Duration::from_millis(100);
            game.advance(&mut rng, now);

            // Book-keeping invariants hold on every tick.
            assert!(game.snake.len() <= MAX_SNAKE_LENGTH);
            assert!(game.obstacles.len() <= MAX_OBSTACLES);
            assert_eq!(
                game.apples_eaten(),
                FoodKind::ALL.iter().map(|&k| game.apples_of(k)).sum::<u32>()
            );
            assert_eq!(
                game.score(),
                FoodKind::ALL
                    .iter()
                    .map(|&k| game.apples_of(k) * k.score_value())
                    .sum::<u32>()
            );
            if game.status() == GameStatus::Running {
                assert!(game.food.is_some());
                let head = game.snake.head();
                assert!((1..=GRID_WIDTH).contains(&head.x));
                assert!((1..=GRID_HEIGHT).contains(&head.y));
            }
        }
    }
}
