use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line score readout above the board, score on the left
/// and session high score on the right, both zero-padded to four digits.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let [score_area, high_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line("SCORE", state.score, theme)).alignment(Alignment::Left),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(score_line("HI", state.high_score, theme)).alignment(Alignment::Right),
        high_area,
    );
}

fn score_line(label: &str, value: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} "), Style::new().fg(theme.hud_label)),
        Span::styled(format!("{value:04}"), Style::new().fg(theme.hud_value)),
    ])
}
