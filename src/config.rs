use std::time::Duration;

use ratatui::style::Color;

/// Side length of the square wrap-around grid, in cells.
pub const GRID_SIZE: u16 = 20;

/// Base tick interval at session start, in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 140;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_SPEED_MS: u64 = 60;

/// Interval reduction applied at each speed-up boundary, in milliseconds.
pub const SPEED_DECREMENT_MS: u64 = 10;

/// Cumulative score multiple that triggers a speed-up.
pub const SPEED_STEP_SCORE: u32 = 30;

/// Points granted by a normal food item.
pub const NORMAL_FOOD_POINTS: u32 = 10;

/// Points granted by a special food item.
pub const SPECIAL_FOOD_POINTS: u32 = 50;

/// Probability that a freshly spawned food is special.
pub const SPECIAL_FOOD_PROBABILITY: f64 = 0.2;

/// Wall-clock lifetime of ghost mode after eating special food.
pub const GHOST_DURATION: Duration = Duration::from_millis(5000);

/// Number of body segments at session start.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// A color theme applied to all visual elements.
///
/// Ghost mode swaps the snake palette for the `ghost_*` colors while the
/// power-up is active, mirroring the flag the renderer reads from the core.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    /// Snake head while ghost mode is active.
    pub ghost_head: Color,
    /// Body segments while ghost mode is active.
    pub ghost_body: Color,
    /// Normal food color.
    pub food: Color,
    /// Special food color.
    pub food_special: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_high_score: Color,
    pub hud_label: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Emerald-on-black neon theme matching the arcade look.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::Rgb(52, 211, 153),
    snake_body: Color::Rgb(5, 150, 105),
    ghost_head: Color::Rgb(192, 132, 252),
    ghost_body: Color::Rgb(147, 51, 234),
    food: Color::Rgb(244, 63, 94),
    food_special: Color::Rgb(168, 85, 247),
    play_bg: Color::Rgb(2, 6, 23),
    border_fg: Color::Rgb(15, 23, 42),
    hud_score: Color::White,
    hud_high_score: Color::Rgb(244, 63, 94),
    hud_label: Color::DarkGray,
    menu_title: Color::Rgb(244, 63, 94),
    menu_footer: Color::DarkGray,
};

/// Glyph for normal food.
pub const GLYPH_FOOD: &str = "●";

/// Glyph for special food.
pub const GLYPH_FOOD_SPECIAL: &str = "★";

/// Glyph for snake segments (head and body share a solid block).
pub const GLYPH_SNAKE_SEGMENT: &str = "█";
