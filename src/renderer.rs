use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_CELL, GRID_SIZE, Theme};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let board = board_area(area);

    if board.y > area.y {
        let hud_area = Rect {
            x: board.x,
            y: board.y - 1,
            width: board.width,
            height: 1,
        };
        render_hud(frame, hud_area, state, theme);
    }

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::NotStarted => render_start_menu(frame, board, state.high_score, theme),
        GameStatus::Paused => render_pause_menu(frame, board, theme),
        GameStatus::GameOver => render_game_over_menu(frame, board, state.score, theme),
        GameStatus::Running => {}
    }
}

/// Returns the board rectangle centered in `area`, clamped to what fits.
fn board_area(area: Rect) -> Rect {
    let width = (GRID_SIZE as u16 * CELL_WIDTH + 2).min(area.width);
    let height = (GRID_SIZE as u16 + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_origin(inner, state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_origin(inner, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a logical cell to its terminal column/row origin inside `inner`,
/// or `None` when the cell does not fit the current terminal size.
fn cell_origin(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds() {
        return None;
    }

    let x = inner.x + position.x as u16 * CELL_WIDTH;
    let y = inner.y + position.y as u16;
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
