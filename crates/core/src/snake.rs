//! Snake body and movement.
//!
//! The body lives in a fixed-capacity arena (`ArrayVec`) ordered head-first,
//! so the tick path never touches the heap. Moving is an O(length) shift:
//! every segment copies its predecessor and only the head advances by rule.

use arrayvec::ArrayVec;
use tui_snake_types::{Direction, Position, GRID_HEIGHT, GRID_WIDTH, MAX_SNAKE_LENGTH};

/// Head-first snake body plus the current heading.
///
/// `direction` stays public for reads and scripted setups; live steering
/// goes through [`Snake::steer`], which drops requests that would reverse
/// the heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: ArrayVec<Position, MAX_SNAKE_LENGTH>,
    pub direction: Direction,
}

impl Snake {
    /// Build a straight snake of `length` segments with the given head,
    /// trailing away opposite to `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0 or exceeds `MAX_SNAKE_LENGTH`.
    pub fn new(head: Position, length: usize, direction: Direction) -> Self {
        assert!(
            (1..=MAX_SNAKE_LENGTH).contains(&length),
            "snake length {length} outside 1..={MAX_SNAKE_LENGTH}"
        );
        let (dx, dy) = direction.delta();
        let mut body = ArrayVec::new();
        for i in 0..length {
            let i = i as i16;
            body.push(Position::new(head.x - dx * i, head.y - dy * i));
        }
        Self { body, direction }
    }

    /// Head position (element 0).
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All live segments, head first.
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Current body length.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Apply a steering request, dropping it if it would reverse the
    /// current heading.
    pub fn steer(&mut self, requested: Direction) {
        if self.direction.can_turn_to(requested) {
            self.direction = requested;
        }
    }

    /// Move one cell in the current heading.
    ///
    /// Each segment takes its predecessor's place (the tail cell is given
    /// up), then the head steps by the heading's unit vector. Length is
    /// unchanged; growth is a separate operation.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        let (dx, dy) = self.direction.delta();
        self.body[0].x += dx;
        self.body[0].y += dy;
    }

    /// Append `amount` segments at the current tail position, silently
    /// clamped at the arena capacity.
    ///
    /// The copies occupy the same cell until subsequent moves unfold them.
    pub fn grow(&mut self, amount: usize) {
        let tail = self.body[self.body.len() - 1];
        for _ in 0..amount {
            if self.body.try_push(tail).is_err() {
                break;
            }
        }
    }

    /// Whether any segment (head included) occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.iter().any(|&p| p == pos)
    }

    /// Whether the head sits on the wall ring.
    pub fn hits_wall(&self) -> bool {
        let head = self.head();
        head.x <= 0 || head.x >= GRID_WIDTH + 1 || head.y <= 0 || head.y >= GRID_HEIGHT + 1
    }

    /// Whether the head overlaps any other live segment.
    ///
    /// A length-1 snake can never collide with itself.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body[1..].iter().any(|&p| p == head)
    }
}
