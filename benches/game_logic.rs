use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_snake::core::{Food, GameState, ObstacleField, Snake};
use tui_snake::types::{Direction, FoodKind, GameStatus, Position, GRID_WIDTH};

fn bench_advance(c: &mut Criterion) {
    let mut game = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut now = Duration::ZERO;

    c.bench_function("game_advance", |b| {
        b.iter(|| {
            if game.status() != GameStatus::Running {
                game = GameState::new();
            }
            now += Duration::from_millis(100);
            game.advance(&mut rng, black_box(now));
        })
    });
}

fn bench_food_spawn(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let snake = Snake::new(Position::new(GRID_WIDTH / 2, 10), 3, Direction::Right);
    let obstacles = ObstacleField::new();

    c.bench_function("food_spawn", |b| {
        b.iter(|| Food::spawn(&mut rng, black_box(&snake), black_box(&obstacles)))
    });
}

fn bench_obstacle_placement(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let snake = Snake::new(Position::new(GRID_WIDTH / 2, 10), 3, Direction::Right);
    let food = Food {
        position: Position::new(5, 5),
        kind: FoodKind::Blue,
    };

    c.bench_function("obstacle_try_place", |b| {
        b.iter(|| {
            let mut field = ObstacleField::new();
            field.try_place(&mut rng, black_box(&snake), Some(&food))
        })
    });
}

fn bench_collision_checks(c: &mut Criterion) {
    // A long straight body stresses the self-collision scan.
    let snake = Snake::new(Position::new(GRID_WIDTH, 10), 40, Direction::Right);

    c.bench_function("wall_and_self_checks", |b| {
        b.iter(|| black_box(&snake).hits_wall() || black_box(&snake).hits_self())
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_food_spawn,
    bench_obstacle_placement,
    bench_collision_checks
);
criterion_main!(benches);
