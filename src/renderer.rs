use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, GLYPH_FOOD, GLYPH_FOOD_SPECIAL, GLYPH_SNAKE_SEGMENT};
use crate::food::FoodKind;
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let below_hud = render_hud(frame, area, state, hud_info);
    let play_area = centered_play_area(below_hud, state.grid());

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border_fg))
        .style(Style::default().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, play_area, state.score, state.high_score, theme);
    }
}

/// Returns the bordered play rect for a square grid, centered in `area`.
fn centered_play_area(area: Rect, grid: u16) -> Rect {
    let want_width = grid.saturating_add(2);
    let want_height = grid.saturating_add(2);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(want_width.min(area.width)),
        Constraint::Min(0),
    ])
    .areas(area);

    Rect {
        height: want_height.min(centered.height),
        ..centered
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.food.position) else {
        return;
    };

    let (glyph, color) = match state.food.kind {
        FoodKind::Normal => (GLYPH_FOOD, theme.food),
        FoodKind::Special => (GLYPH_FOOD_SPECIAL, theme.food_special),
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, glyph, Style::default().fg(color).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let (head_color, body_color) = if state.ghost_active {
        (theme.ghost_head, theme.ghost_body)
    } else {
        (theme.snake_head, theme.snake_body)
    };

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::default()
                .fg(head_color)
                .bg(theme.play_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(body_color).bg(theme.play_bg)
        };

        buffer.set_string(x, y, GLYPH_SNAKE_SEGMENT, style);
    }
}

fn logical_to_terminal(inner: Rect, grid: u16, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
