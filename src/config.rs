use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::snake::Position;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 21;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 11;

/// Smallest selectable grid side.
pub const MIN_GRID_SIDE: u16 = 7;

/// Largest selectable grid side.
pub const MAX_GRID_SIDE: u16 = 31;

/// Grid sides change in steps of two so they stay odd and keep a centre cell.
pub const GRID_SIDE_STEP: u16 = 2;

/// Selectable movement rates in steps per second.
pub const TICK_RATES: [f32; 6] = [2.0, 2.5, 3.0, 4.0, 5.0, 6.0];

/// Index into [`TICK_RATES`] used when nothing else is chosen.
pub const DEFAULT_SPEED_INDEX: usize = TICK_RATES.len() / 2;

/// Number of bridges placed in a new session by default.
pub const DEFAULT_BRIDGE_COUNT: usize = 3;

/// Upper bound for the bridge count picker.
pub const MAX_BRIDGE_COUNT: usize = 9;

/// Random draws tried before placement falls back to scanning free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Logical grid dimensions passed explicitly to every entity that checks bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
}

impl GridConfig {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `position` lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    /// Returns true when `position` lies inside the grid but off its outermost ring.
    #[must_use]
    pub fn interior_contains(self, position: Position) -> bool {
        position.x >= 1
            && position.y >= 1
            && position.x <= i32::from(self.width) - 2
            && position.y <= i32::from(self.height) - 2
    }

    /// Cell the snake starts on.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Rejected pre-game settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "grid {axis} {value} must be odd and within {min}..={max}",
        min = MIN_GRID_SIDE,
        max = MAX_GRID_SIDE
    )]
    GridSide { axis: &'static str, value: u16 },
    #[error("speed {0} is not one of the {count} available rates", count = TICK_RATES.len())]
    Speed(usize),
    #[error("bridge count {0} exceeds the maximum of {max}", max = MAX_BRIDGE_COUNT)]
    BridgeCount(usize),
}

/// Settings read once when a session is created and fixed for its lifetime.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionConfig {
    pub grid: GridConfig,
    pub speed_index: usize,
    pub bridge_count: usize,
}

impl SessionConfig {
    /// Builds a configuration, rejecting values the setup screen could never produce.
    pub fn validated(
        width: u16,
        height: u16,
        speed_index: usize,
        bridge_count: usize,
    ) -> Result<Self, ConfigError> {
        check_side("width", width)?;
        check_side("height", height)?;

        if speed_index >= TICK_RATES.len() {
            return Err(ConfigError::Speed(speed_index));
        }
        if bridge_count > MAX_BRIDGE_COUNT {
            return Err(ConfigError::BridgeCount(bridge_count));
        }

        Ok(Self {
            grid: GridConfig { width, height },
            speed_index,
            bridge_count,
        })
    }

    /// Maps a 1-based speed level, as shown to the player, to a rate index.
    pub fn speed_index_for_level(level: usize) -> Result<usize, ConfigError> {
        match level.checked_sub(1) {
            Some(index) if index < TICK_RATES.len() => Ok(index),
            _ => Err(ConfigError::Speed(level)),
        }
    }

    /// Movement rate in steps per second.
    #[must_use]
    pub fn steps_per_second(self) -> f32 {
        TICK_RATES[self.speed_index.min(TICK_RATES.len() - 1)]
    }

    /// Wall-clock period between two ticks.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_secs_f32(1.0 / self.steps_per_second())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            speed_index: DEFAULT_SPEED_INDEX,
            bridge_count: DEFAULT_BRIDGE_COUNT,
        }
    }
}

fn check_side(axis: &'static str, value: u16) -> Result<(), ConfigError> {
    if value % 2 == 0 || !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&value) {
        return Err(ConfigError::GridSide { axis, value });
    }
    Ok(())
}

/// Colours applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    /// Even body segments.
    pub snake_body: Color,
    /// Odd body segments.
    pub snake_body_alt: Color,
    pub food: Color,
    pub bridge: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub ui_muted: Color,
    pub menu_title: Color,
    pub menu_selected: Color,
}

/// Green-and-yellow snake on a dark field.
pub const THEME_MEADOW: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::LightGreen,
    snake_body_alt: Color::Yellow,
    food: Color::Red,
    bridge: Color::Gray,
    play_bg: Color::Black,
    border_fg: Color::Rgb(210, 220, 150),
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    ui_muted: Color::DarkGray,
    menu_title: Color::Green,
    menu_selected: Color::Yellow,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "■";
/// Segment crossing on top of a bridge deck.
pub const GLYPH_SNAKE_ON_BRIDGE: &str = "═";
/// Segment passing beneath a bridge deck.
pub const GLYPH_SNAKE_UNDER_BRIDGE: &str = "╎";
pub const GLYPH_FOOD: &str = "◆";
/// Empty bridge cell: top and bottom rails.
pub const GLYPH_BRIDGE: &str = "=";

#[cfg(test)]
mod tests {
    use super::{ConfigError, GridConfig, SessionConfig, DEFAULT_SPEED_INDEX, TICK_RATES};
    use crate::snake::Position;

    #[test]
    fn default_session_matches_classic_setup() {
        let config = SessionConfig::default();

        assert_eq!(
            config.grid,
            GridConfig {
                width: 21,
                height: 11
            }
        );
        assert_eq!(config.speed_index, DEFAULT_SPEED_INDEX);
        assert_eq!(config.steps_per_second(), 4.0);
        assert_eq!(config.bridge_count, 3);
    }

    #[test]
    fn validated_rejects_even_and_out_of_range_sides() {
        assert_eq!(
            SessionConfig::validated(20, 11, 0, 0),
            Err(ConfigError::GridSide {
                axis: "width",
                value: 20
            })
        );
        assert_eq!(
            SessionConfig::validated(21, 33, 0, 0),
            Err(ConfigError::GridSide {
                axis: "height",
                value: 33
            })
        );
        assert!(SessionConfig::validated(7, 31, 0, 0).is_ok());
    }

    #[test]
    fn validated_rejects_unknown_speed_and_too_many_bridges() {
        assert_eq!(
            SessionConfig::validated(21, 11, TICK_RATES.len(), 0),
            Err(ConfigError::Speed(TICK_RATES.len()))
        );
        assert_eq!(
            SessionConfig::validated(21, 11, 0, 10),
            Err(ConfigError::BridgeCount(10))
        );
    }

    #[test]
    fn speed_levels_start_at_one() {
        assert_eq!(SessionConfig::speed_index_for_level(1), Ok(0));
        assert_eq!(
            SessionConfig::speed_index_for_level(TICK_RATES.len()),
            Ok(TICK_RATES.len() - 1)
        );
        assert_eq!(SessionConfig::speed_index_for_level(0), Err(ConfigError::Speed(0)));
        assert_eq!(
            SessionConfig::speed_index_for_level(TICK_RATES.len() + 1),
            Err(ConfigError::Speed(TICK_RATES.len() + 1))
        );
    }

    #[test]
    fn tick_interval_follows_rate() {
        let slowest = SessionConfig::validated(21, 11, 0, 3).expect("valid config");
        assert_eq!(slowest.tick_interval().as_millis(), 500);
    }

    #[test]
    fn grid_bounds_and_interior() {
        let grid = GridConfig {
            width: 21,
            height: 11,
        };

        assert!(grid.contains(Position { x: 0, y: 0 }));
        assert!(grid.contains(Position { x: 20, y: 10 }));
        assert!(!grid.contains(Position { x: -1, y: 5 }));
        assert!(!grid.contains(Position { x: 21, y: 5 }));
        assert!(!grid.contains(Position { x: 5, y: -1 }));
        assert!(!grid.contains(Position { x: 5, y: 11 }));

        assert!(grid.interior_contains(Position { x: 1, y: 1 }));
        assert!(grid.interior_contains(Position { x: 19, y: 9 }));
        assert!(!grid.interior_contains(Position { x: 0, y: 5 }));
        assert!(!grid.interior_contains(Position { x: 20, y: 5 }));
        assert_eq!(grid.center(), Position { x: 10, y: 5 });
    }
}
