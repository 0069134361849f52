use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside a square grid of side `grid`.
    #[must_use]
    pub fn is_within_bounds(self, grid: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i32::from(grid) && self.y < i32::from(grid)
    }

    /// Returns this position wrapped onto the torus on both axes.
    #[must_use]
    pub fn wrapped(self, grid: u16) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(grid)),
            y: wrap_axis(self.y, i32::from(grid)),
        }
    }

    /// Returns the neighboring position one cell along `direction`, unwrapped.
    #[must_use]
    pub fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake state: ordered body segments plus the live direction.
///
/// The direction field doubles as the pending direction for the next step;
/// `steer` validates against it, so two quick perpendicular inputs between
/// ticks chain their reversal checks the way the arcade original did.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake of `len` connected cells with the head at `head`,
    /// trailing away opposite to `direction`. Segments wrap onto the torus,
    /// so a head near the edge of a small grid still yields in-bounds cells.
    #[must_use]
    pub fn new(head: Position, direction: Direction, len: usize, grid: u16) -> Self {
        let mut body = VecDeque::with_capacity(len.max(1));
        let mut cell = head;
        for _ in 0..len.max(1) {
            body.push_back(cell.wrapped(grid));
            cell = cell.shifted(direction.opposite());
        }

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Applies a direction request, ignoring exact reversals.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Returns the wrapped head position for the next step.
    #[must_use]
    pub fn next_head(&self, grid: u16) -> Position {
        self.head().shifted(self.direction).wrapped(grid)
    }

    /// Prepends a new head segment; the tail stays (growth).
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail segment, keeping body length constant after a move.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
