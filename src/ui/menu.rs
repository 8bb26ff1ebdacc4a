use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the pre-game screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("SNAKE", theme),
        Line::from(""),
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("Arrows/WASD to start"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.overlay_text))
            .block(Block::bordered().border_style(Style::new().fg(theme.overlay_title))),
        popup,
    );
}

/// Draws the paused screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 35);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.overlay_text))
            .block(Block::bordered().border_style(Style::new().fg(theme.border))),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[Space] Restart"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.overlay_text))
            .block(Block::bordered().border_style(Style::new().fg(theme.overlay_title))),
        popup,
    );
}

fn title_line(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(
        title,
        Style::new()
            .fg(theme.overlay_title)
            .add_modifier(Modifier::BOLD),
    )
}

/// Returns a rectangle covering the given percentages of `area`, centered.
fn centered_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, popup, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    popup
}
