use ratatui::style::Color;

use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Construction-time game parameters consumed by the core.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_snake_length: u16,
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Starting snake length in segments.
pub const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Score awarded per food item.
pub const POINTS_PER_FOOD: u32 = 10;

/// The snake always starts a run heading right.
pub const START_HEADING: Direction = Direction::Right;

/// Default tick interval in milliseconds (10 simulation steps per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Glyph for the snake head cell.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph for snake body and tail cells.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_high_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-black arcade palette.
pub const THEME_RETRO: Theme = Theme {
    name: "retro",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_high_score: Color::Cyan,
    menu_title: Color::Red,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    hud_high_score: Color::White,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    hud_high_score: Color::Yellow,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_RETRO, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{theme_by_name, GameConfig, GridSize, THEMES};

    #[test]
    fn total_cells_is_width_times_height() {
        let grid = GridSize {
            width: 40,
            height: 30,
        };
        assert_eq!(grid.total_cells(), 1200);
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid.width, 40);
        assert_eq!(config.grid.height, 30);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.points_per_food, 10);
    }

    #[test]
    fn theme_lookup_ignores_case_and_rejects_unknown() {
        assert_eq!(theme_by_name("RETRO").map(|t| t.name), Some("retro"));
        assert_eq!(theme_by_name("Ocean").map(|t| t.name), Some("ocean"));
        assert!(theme_by_name("plasma").is_none());
    }

    #[test]
    fn theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
