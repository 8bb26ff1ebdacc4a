use ratatui::style::Color;

/// Logical grid dimension; the board is `GRID_SIZE` × `GRID_SIZE` cells.
pub const GRID_SIZE: i32 = 20;

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Points granted per food item eaten.
pub const FOOD_POINTS: u32 = 10;

/// Terminal columns per logical cell, for a roughly square aspect.
pub const CELL_WIDTH: u16 = 2;

/// Solid block glyph pair filling one logical cell.
pub const GLYPH_CELL: &str = "██";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    /// Solid block color for food.
    pub food: Color,
    pub border: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub overlay_title: Color,
    pub overlay_text: Color,
}

/// Neon cyan/magenta on black.
pub const THEME_NEON: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Magenta,
    border: Color::Cyan,
    hud_label: Color::Cyan,
    hud_value: Color::White,
    overlay_title: Color::Magenta,
    overlay_text: Color::White,
};
