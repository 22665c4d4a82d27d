use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

/// Draws the pause overlay as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let body = ["", "[Space]/[P] Resume", "[Q] Quit", ""];
    let popup = popup_rect(area, "PAUSED", &body);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::styled(
        "PAUSED",
        Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        body.iter()
            .map(|text| Line::styled(*text, Style::new().fg(theme.menu_footer))),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(theme.border))),
        popup,
    );
}

/// Draws the game-over overlay as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    theme: &Theme,
) {
    let score_text = format!("Score: {score}");
    let high_text = format!("High score: {high_score}");
    let body = [
        "",
        score_text.as_str(),
        high_text.as_str(),
        "",
        "[R] Restart",
        "[Q] Quit",
        "",
    ];
    let popup = popup_rect(area, "GAME OVER", &body);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::styled(
        "GAME OVER",
        Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )];
    for text in body {
        let style = if text.starts_with('[') {
            Style::new().fg(theme.menu_footer)
        } else {
            Style::new().fg(theme.hud_value)
        };
        lines.push(Line::styled(text.to_owned(), style));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(theme.border))),
        popup,
    );
}

/// Sizes a popup to its content and centers it inside `area`.
fn popup_rect(area: Rect, title: &str, body: &[&str]) -> Rect {
    let content_width = body
        .iter()
        .copied()
        .chain([title])
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    // Two border columns plus one column of padding per side.
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(body.len() + 3).unwrap_or(u16::MAX);

    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::popup_rect;

    #[test]
    fn popup_is_centered_and_sized_to_content() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 20,
        };

        let popup = popup_rect(area, "PAUSED", &["", "[Q] Quit", ""]);

        // "[Q] Quit" is 8 wide, plus border and padding.
        assert_eq!(popup.width, 12);
        assert_eq!(popup.height, 6);
        assert_eq!(popup.x, 14);
        assert_eq!(popup.y, 7);
    }

    #[test]
    fn popup_never_exceeds_the_available_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        };

        let popup = popup_rect(area, "GAME OVER", &["a very long content line", ""]);

        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
