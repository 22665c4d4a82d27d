use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Width and height are counted in cells; one terminal cell is one
/// gameplay tile, so there are no partial cells to reason about.
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

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Starting head column for a fresh run.
pub const SNAKE_START_X: i32 = 5;

/// Starting head row for a fresh run.
pub const SNAKE_START_Y: i32 = 5;

/// Base tick interval in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Interval reduction applied at each speed step, in milliseconds.
pub const SPEED_STEP_MS: u64 = 10;

/// Points needed between speed steps.
pub const SPEED_STEP_POINTS: u32 = 5;

/// Sleep between main-loop iterations, in milliseconds.
pub const FRAME_SLEEP_MS: u64 = 16;

/// Glyph drawn for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph drawn for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph drawn for the food cell.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head cell.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for food.
    pub food: Color,
    pub border: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    border: Color::Cyan,
    hud_label: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    border: Color::Magenta,
    hud_label: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All bundled themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a bundled theme by its name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
