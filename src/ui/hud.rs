use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state, theme, usize::from(status_area.width))),
        status_area,
    );

    play_area
}

/// Builds `Length .. <pad> Score ..  Hi ..` sized to the given column width.
fn status_line(state: &GameState, theme: &Theme, width: usize) -> Line<'static> {
    let length = format!("Length {}", state.snake.len());
    let score = format!("Score {}", state.score);
    let high = format!("  Hi {}", state.high_score);

    let used = length.width() + score.width() + high.width();
    let padding = " ".repeat(width.saturating_sub(used));

    Line::from(vec![
        Span::styled(length, Style::new().fg(theme.hud_score)),
        Span::raw(padding),
        Span::styled(
            score,
            Style::new()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(high, Style::new().fg(theme.hud_high_score)),
    ])
}
