use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
}

/// Renders the one-line HUD above the play area and returns the remaining
/// area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let theme = info.theme;
    let label = Style::default().fg(theme.hud_label);

    let mode = if state.ghost_active {
        Span::styled(
            " GHOST ",
            Style::default()
                .fg(theme.ghost_head)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        )
    } else {
        // Original HUD shows velocity as 200 minus the tick interval.
        Span::styled(format!(" spd {}", 200 - state.speed_ms), label)
    };

    let left = Line::from(vec![
        Span::styled(
            "NEON.SNAKE",
            Style::default()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        mode,
    ]);

    let right = Line::from(vec![
        Span::styled("score ", label),
        Span::styled(
            state.score.to_string(),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  best ", label),
        Span::styled(
            state.high_score.to_string(),
            Style::default().fg(theme.hud_high_score),
        ),
    ]);

    frame.render_widget(Paragraph::new(left).alignment(Alignment::Left), hud_area);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), hud_area);

    play_area
}
