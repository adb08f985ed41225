//! Terminal snake runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{Direction, GameStatus, MOVE_DELAY_HORIZONTAL, MOVE_DELAY_VERTICAL};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Delay until the next movement tick. Horizontal travel ticks faster than
/// vertical to compensate for terminal glyph aspect ratio, and an active
/// speed boost halves either delay.
fn movement_delay(direction: Direction, boosted: bool) -> Duration {
    let base = if direction.is_horizontal() {
        MOVE_DELAY_HORIZONTAL
    } else {
        MOVE_DELAY_VERTICAL
    };
    if boosted {
        base / 2
    } else {
        base
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::new();
    let mut rng = rand::thread_rng();
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_welcome_into(Viewport::new(w, h), &mut fb);
    term.draw_swap(&mut fb)?;
    wait_for_key()?;

    let origin = Instant::now();
    let mut last_tick = Instant::now();

    // Steering requests are buffered: the latest one in a movement window
    // wins, and at most one change is applied right before each advance.
    let mut requested: Option<Direction> = None;

    while game.status() == GameStatus::Running {
        let now = origin.elapsed();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, now, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next movement tick.
        let tick_duration = movement_delay(game.snake.direction, game.speed_boost.is_active(now));
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        game.quit();
                    } else if let Some(dir) = handle_key_event(key) {
                        requested = Some(dir);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick when the movement delay for the current heading has elapsed.
        if game.status() == GameStatus::Running {
            let now = origin.elapsed();
            let delay = movement_delay(game.snake.direction, game.speed_boost.is_active(now));
            if last_tick.elapsed() >= delay {
                last_tick = Instant::now();
                if let Some(dir) = requested.take() {
                    game.snake.steer(dir);
                }
                game.advance(&mut rng, origin.elapsed());
            }
        }
    }

    // Final screen, shown until a key press.
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    match game.status() {
        GameStatus::Over => {
            view.render_game_over_into(&game, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            wait_for_key()?;
        }
        GameStatus::Won => {
            view.render_victory_into(&game, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            wait_for_key()?;
        }
        GameStatus::Quit | GameStatus::Running => {}
    }

    Ok(())
}
