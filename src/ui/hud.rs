use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD: score, high score, and speed delta.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(hud_line(
            state.scoreboard.score(),
            state.scoreboard.high_score(),
            state.scoreboard.speed_delta_ms(),
            theme,
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn hud_line(score: u32, high_score: u32, speed_delta: u64, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(score.to_string(), value),
        Span::styled("  │  ", label),
        Span::styled("Hi: ", label),
        Span::styled(high_score.to_string(), value),
        Span::styled("  │  ", label),
        Span::styled("Speed: ", label),
        Span::styled(format!("+{speed_delta}"), value),
    ])
}
