use rand::Rng;

use crate::config::{NORMAL_FOOD_POINTS, SPECIAL_FOOD_POINTS, SPECIAL_FOOD_PROBABILITY};
use crate::snake::{Position, Snake};

/// Food variant on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Normal,
    /// Rarer variant worth more points, grants ghost mode when eaten.
    Special,
}

/// Spawn-position policy for fresh food.
///
/// The arcade original draws a uniformly random cell with no regard for the
/// snake body, so food can land under the snake. `Anywhere` reproduces that;
/// `FreeCellsOnly` samples from unoccupied cells instead.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodPlacement {
    Anywhere,
    FreeCellsOnly,
}

/// The single food item active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Creates a normal food at `position`.
    #[must_use]
    pub fn normal(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Normal,
        }
    }

    /// Creates a special food at `position`.
    #[must_use]
    pub fn special(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Special,
        }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self.kind {
            FoodKind::Normal => NORMAL_FOOD_POINTS,
            FoodKind::Special => SPECIAL_FOOD_POINTS,
        }
    }

    /// Spawns the next food item: special with fixed probability, positioned
    /// according to `placement`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: u16,
        placement: FoodPlacement,
        snake: &Snake,
    ) -> Self {
        let position = match placement {
            FoodPlacement::Anywhere => random_position(rng, grid),
            FoodPlacement::FreeCellsOnly => free_position(rng, grid, snake),
        };

        if rng.gen_bool(SPECIAL_FOOD_PROBABILITY) {
            Self::special(position)
        } else {
            Self::normal(position)
        }
    }
}

/// Draws a uniformly random cell anywhere on the grid.
fn random_position<R: Rng + ?Sized>(rng: &mut R, grid: u16) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(grid)),
        y: rng.gen_range(0..i32::from(grid)),
    }
}

/// Draws a uniformly random cell not currently occupied by the snake.
///
/// A ghost-mode snake can grow to cover the whole board; with no free cell
/// left this falls back to an unconstrained draw instead of panicking.
fn free_position<R: Rng + ?Sized>(rng: &mut R, grid: u16, snake: &Snake) -> Position {
    let mut candidates = Vec::new();

    for y in 0..i32::from(grid) {
        for x in 0..i32::from(grid) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return random_position(rng, grid);
    }

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}
