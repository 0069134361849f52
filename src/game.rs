use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GHOST_DURATION, INITIAL_SNAKE_LEN, INITIAL_SPEED_MS, MIN_SPEED_MS, SPEED_DECREMENT_MS,
    SPEED_STEP_SCORE,
};
use crate::food::{Food, FoodKind, FoodPlacement};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// The renderer reads the public fields; the only mutating entry points are
/// `step`, `steer`, `expire_ghost`, and `reset`, all driven from the single
/// event loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Best score across sessions; captured at game over, survives `reset`.
    pub high_score: u32,
    /// Current base tick interval in milliseconds.
    pub speed_ms: u64,
    pub ghost_active: bool,
    pub status: GameStatus,
    grid: u16,
    placement: FoodPlacement,
    /// Pending one-shot ghost expiries. A second special pickup pushes a new
    /// deadline without cancelling the first, so the earlier one still fires
    /// and may cut the second ghost window short.
    ghost_deadlines: Vec<Instant>,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: u16, placement: FoodPlacement, high_score: u32) -> Self {
        Self::with_rng(grid, placement, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: u16, placement: FoodPlacement, high_score: u32, seed: u64) -> Self {
        Self::with_rng(grid, placement, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: u16, placement: FoodPlacement, high_score: u32, rng: StdRng) -> Self {
        Self {
            snake: initial_snake(grid),
            food: initial_food(grid),
            score: 0,
            high_score,
            speed_ms: INITIAL_SPEED_MS,
            ghost_active: false,
            status: GameStatus::Running,
            grid,
            placement,
            ghost_deadlines: Vec::new(),
            rng,
        }
    }

    /// Advances the session by one tick. No-op once the game is over.
    pub fn step(&mut self, now: Instant) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.expire_ghost(now);

        let new_head = self.snake.next_head(self.grid);

        // Collision is checked against the whole current body, tail cell
        // included, and the snake stays put on a fatal move.
        if !self.ghost_active && self.snake.occupies(new_head) {
            self.status = GameStatus::GameOver;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            return;
        }

        self.snake.push_head(new_head);

        if new_head == self.food.position {
            self.score += self.food.points();

            if self.food.kind == FoodKind::Special {
                self.ghost_active = true;
                self.ghost_deadlines.push(now + GHOST_DURATION);
            }

            // Speed-up triggers on the post-award total, not per pickup.
            if self.score % SPEED_STEP_SCORE == 0 {
                self.speed_ms = self
                    .speed_ms
                    .saturating_sub(SPEED_DECREMENT_MS)
                    .max(MIN_SPEED_MS);
            }

            self.food = Food::spawn(&mut self.rng, self.grid, self.placement, &self.snake);
        } else {
            self.snake.drop_tail();
        }
    }

    /// Applies a direction request. Ignored once the game is over, so a late
    /// keypress cannot leak into the next session.
    pub fn steer(&mut self, direction: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }
        self.snake.steer(direction);
    }

    /// Clears ghost mode once any pending deadline has elapsed.
    ///
    /// Called every loop iteration, independent of game ticks, so the ghost
    /// window is wall-clock bounded rather than tick-counted.
    pub fn expire_ghost(&mut self, now: Instant) {
        if self.ghost_deadlines.iter().any(|deadline| *deadline <= now) {
            self.ghost_active = false;
        }
        self.ghost_deadlines.retain(|deadline| *deadline > now);
    }

    /// Restores the initial session state, keeping the high score and RNG.
    /// Pending ghost deadlines from the old session are cancelled.
    pub fn reset(&mut self) {
        self.snake = initial_snake(self.grid);
        self.food = initial_food(self.grid);
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.ghost_active = false;
        self.status = GameStatus::Running;
        self.ghost_deadlines.clear();
    }

    /// Returns the current tick interval: base speed, shortened by a fifth
    /// while ghost mode is active.
    #[must_use]
    pub fn effective_interval(&self) -> Duration {
        let ms = if self.ghost_active {
            self.speed_ms * 4 / 5
        } else {
            self.speed_ms
        };
        Duration::from_millis(ms)
    }

    /// Returns the grid side length in cells.
    #[must_use]
    pub fn grid(&self) -> u16 {
        self.grid
    }
}

fn initial_snake(grid: u16) -> Snake {
    let head = Position {
        x: i32::from(grid / 2),
        y: i32::from(grid / 2),
    };
    Snake::new(head, Direction::Right, INITIAL_SNAKE_LEN, grid)
}

fn initial_food(grid: u16) -> Food {
    Food::normal(Position {
        x: i32::from(grid) * 3 / 4,
        y: i32::from(grid / 2),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::{GHOST_DURATION, INITIAL_SPEED_MS, MIN_SPEED_MS};
    use crate::food::{Food, FoodPlacement};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus};

    fn test_state(seed: u64) -> GameState {
        GameState::new_with_seed(20, FoodPlacement::Anywhere, 0, seed)
    }

    #[test]
    fn initial_session_matches_arcade_layout() {
        let state = test_state(1);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(state.food, Food::normal(Position { x: 15, y: 10 }));
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS);
        assert!(!state.ghost_active);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn plain_step_keeps_length_and_score() {
        let mut state = test_state(2);

        state.step(Instant::now());

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position { x: 11, y: 10 });
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn eating_normal_food_scores_ten_and_grows() {
        let mut state = test_state(3);
        state.food = Food::normal(Position { x: 11, y: 10 });

        state.step(Instant::now());

        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn self_collision_ends_game_and_captures_high_score() {
        let mut state = test_state(4);
        state.score = 70;
        // Closed loop: head moving left into its own body.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
            ],
            Direction::Left,
        );
        let head_before = state.snake.head();

        state.step(Instant::now());

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 70);
        // Fatal step leaves the snake in place.
        assert_eq!(state.snake.head(), head_before);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn ghost_mode_ignores_self_collision() {
        let mut state = test_state(5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
            ],
            Direction::Left,
        );
        state.ghost_active = true;

        state.step(Instant::now());

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position { x: 1, y: 2 });
    }

    #[test]
    fn special_food_grants_timed_ghost_mode() {
        let mut state = test_state(6);
        state.food = Food::special(Position { x: 11, y: 10 });
        let t0 = Instant::now();

        state.step(t0);

        assert_eq!(state.score, 50);
        assert!(state.ghost_active);

        state.expire_ghost(t0 + GHOST_DURATION - Duration::from_millis(1));
        assert!(state.ghost_active);

        state.expire_ghost(t0 + GHOST_DURATION);
        assert!(!state.ghost_active);
    }

    #[test]
    fn second_special_pickup_races_with_first_deadline() {
        let mut state = test_state(7);
        let t0 = Instant::now();

        state.food = Food::special(Position { x: 11, y: 10 });
        state.step(t0);
        assert!(state.ghost_active);

        // Second pickup two seconds later does not cancel the first deadline.
        state.food = Food::special(Position { x: 12, y: 10 });
        state.step(t0 + Duration::from_secs(2));
        assert!(state.ghost_active);

        // The first deadline fires and clears the flag early.
        state.expire_ghost(t0 + GHOST_DURATION);
        assert!(!state.ghost_active);
    }

    #[test]
    fn speed_drops_only_on_multiples_of_thirty() {
        let mut state = test_state(8);
        state.score = 20;
        state.food = Food::normal(Position { x: 11, y: 10 });

        // 20 + 10 = 30: one decrement.
        state.step(Instant::now());
        assert_eq!(state.score, 30);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS - 10);

        // 30 + 10 = 40: no decrement.
        state.food = Food::normal(state.snake.next_head(20));
        state.step(Instant::now());
        assert_eq!(state.score, 40);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS - 10);

        // 40 + 50 = 90: multiple of 30 again.
        state.food = Food::special(state.snake.next_head(20));
        state.step(Instant::now());
        assert_eq!(state.score, 90);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS - 20);
    }

    #[test]
    fn speed_never_drops_below_the_floor() {
        let mut state = test_state(9);
        state.speed_ms = MIN_SPEED_MS + 5;
        state.score = 20;
        state.food = Food::normal(Position { x: 11, y: 10 });

        state.step(Instant::now());
        assert_eq!(state.speed_ms, MIN_SPEED_MS);

        state.score = 20;
        state.food = Food::normal(state.snake.next_head(20));
        state.step(Instant::now());
        assert_eq!(state.speed_ms, MIN_SPEED_MS);
    }

    #[test]
    fn ghost_mode_shortens_the_tick_interval() {
        let mut state = test_state(10);
        assert_eq!(state.effective_interval(), Duration::from_millis(140));

        state.ghost_active = true;
        assert_eq!(state.effective_interval(), Duration::from_millis(112));
    }

    #[test]
    fn steer_is_ignored_after_game_over() {
        let mut state = test_state(11);
        state.status = GameStatus::GameOver;

        state.steer(Direction::Up);

        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn step_is_a_no_op_after_game_over() {
        let mut state = test_state(12);
        state.status = GameStatus::GameOver;
        let head = state.snake.head();

        state.step(Instant::now());

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn minimum_grid_session_steps_without_leaving_bounds() {
        let mut state = GameState::new_with_seed(4, FoodPlacement::Anywhere, 0, 14);
        assert!(
            state
                .snake
                .segments()
                .all(|segment| segment.is_within_bounds(4))
        );

        let mut now = Instant::now();
        for _ in 0..20 {
            now += Duration::from_millis(INITIAL_SPEED_MS);
            state.step(now);
            assert!(state.snake.head().is_within_bounds(4));
            if state.status == GameStatus::GameOver {
                break;
            }
        }
    }

    #[test]
    fn reset_restores_initial_state_but_keeps_high_score() {
        let mut state = test_state(13);
        let t0 = Instant::now();
        state.food = Food::special(Position { x: 11, y: 10 });
        state.step(t0);
        state.high_score = 120;
        state.status = GameStatus::GameOver;

        state.reset();

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS);
        assert!(!state.ghost_active);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.high_score, 120);

        // A stale deadline from the old session must not clear ghost mode
        // granted after the reset.
        state.ghost_active = true;
        state.expire_ghost(t0 + GHOST_DURATION);
        assert!(state.ghost_active);
    }
}
