use crate::config::{
    SessionConfig, GRID_SIDE_STEP, MAX_BRIDGE_COUNT, MAX_GRID_SIDE, MIN_GRID_SIDE,
    TICK_RATES,
};
use crate::input::{Direction, GameInput};

/// Row of the pre-game settings screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SetupField {
    Width,
    Height,
    Speed,
    Bridges,
}

impl SetupField {
    pub const ALL: [Self; 4] = [Self::Width, Self::Height, Self::Speed, Self::Bridges];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Speed => "speed",
            Self::Bridges => "bridges",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

/// What the setup screen wants the app to do after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SetupAction {
    None,
    Begin(SessionConfig),
    Quit,
}

/// Pre-game settings picker.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SetupMenu {
    config: SessionConfig,
    selected: SetupField,
}

impl SetupMenu {
    /// Opens the picker preset to `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            selected: SetupField::Width,
        }
    }

    /// Applies one input event.
    pub fn handle(&mut self, input: GameInput) -> SetupAction {
        match input {
            GameInput::Direction(Direction::Up) => self.move_selection(-1),
            GameInput::Direction(Direction::Down) => self.move_selection(1),
            GameInput::Direction(Direction::Left) => self.adjust(false),
            GameInput::Direction(Direction::Right) => self.adjust(true),
            GameInput::Direction(Direction::Idle) => {}
            GameInput::Confirm => return SetupAction::Begin(self.config),
            GameInput::Quit => return SetupAction::Quit,
        }
        SetupAction::None
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub fn selected(&self) -> SetupField {
        self.selected
    }

    /// Display value for `field`.
    #[must_use]
    pub fn value_text(&self, field: SetupField) -> String {
        match field {
            SetupField::Width => self.config.grid.width.to_string(),
            SetupField::Height => self.config.grid.height.to_string(),
            SetupField::Speed => (self.config.speed_index + 1).to_string(),
            SetupField::Bridges => self.config.bridge_count.to_string(),
        }
    }

    fn move_selection(&mut self, offset: isize) {
        let count = SetupField::ALL.len() as isize;
        let next = (self.selected.index() as isize + offset).rem_euclid(count);
        self.selected = SetupField::ALL[next as usize];
    }

    fn adjust(&mut self, increase: bool) {
        let config = &mut self.config;
        match self.selected {
            SetupField::Width => config.grid.width = step_side(config.grid.width, increase),
            SetupField::Height => config.grid.height = step_side(config.grid.height, increase),
            SetupField::Speed => {
                let max = TICK_RATES.len() - 1;
                config.speed_index = step_bounded(config.speed_index, increase, max);
            }
            SetupField::Bridges => {
                config.bridge_count =
                    step_bounded(config.bridge_count, increase, MAX_BRIDGE_COUNT);
            }
        }
    }
}

fn step_side(value: u16, increase: bool) -> u16 {
    if increase && value < MAX_GRID_SIDE {
        value + GRID_SIDE_STEP
    } else if !increase && value > MIN_GRID_SIDE {
        value - GRID_SIDE_STEP
    } else {
        value
    }
}

fn step_bounded(value: usize, increase: bool, max: usize) -> usize {
    if increase {
        (value + 1).min(max)
    } else {
        value.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{SessionConfig, MAX_BRIDGE_COUNT, TICK_RATES};
    use crate::input::{Direction, GameInput};

    use super::{SetupAction, SetupField, SetupMenu};

    fn press(menu: &mut SetupMenu, direction: Direction, times: usize) {
        for _ in 0..times {
            assert_eq!(menu.handle(GameInput::Direction(direction)), SetupAction::None);
        }
    }

    #[test]
    fn width_moves_in_odd_steps_and_stops_at_bounds() {
        let mut menu = SetupMenu::new(SessionConfig::default());

        press(&mut menu, Direction::Right, 1);
        assert_eq!(menu.config().grid.width, 23);

        press(&mut menu, Direction::Right, 20);
        assert_eq!(menu.config().grid.width, 31);

        press(&mut menu, Direction::Left, 20);
        assert_eq!(menu.config().grid.width, 7);
    }

    #[test]
    fn selection_wraps_around() {
        let mut menu = SetupMenu::new(SessionConfig::default());

        press(&mut menu, Direction::Up, 1);
        assert_eq!(menu.selected(), SetupField::Bridges);

        press(&mut menu, Direction::Down, 2);
        assert_eq!(menu.selected(), SetupField::Height);
    }

    #[test]
    fn speed_and_bridges_clamp() {
        let mut menu = SetupMenu::new(SessionConfig::default());

        press(&mut menu, Direction::Down, 2);
        press(&mut menu, Direction::Right, 10);
        assert_eq!(menu.config().speed_index, TICK_RATES.len() - 1);
        assert_eq!(menu.value_text(SetupField::Speed), "6");

        press(&mut menu, Direction::Down, 1);
        press(&mut menu, Direction::Left, 10);
        assert_eq!(menu.config().bridge_count, 0);
        press(&mut menu, Direction::Right, 20);
        assert_eq!(menu.config().bridge_count, MAX_BRIDGE_COUNT);
    }

    #[test]
    fn confirm_begins_with_current_settings() {
        let mut menu = SetupMenu::new(SessionConfig::default());
        press(&mut menu, Direction::Down, 1);
        press(&mut menu, Direction::Left, 1);

        let SetupAction::Begin(config) = menu.handle(GameInput::Confirm) else {
            panic!("confirm should begin a game");
        };

        assert_eq!(config.grid.height, 9);
        assert_eq!(menu.handle(GameInput::Quit), SetupAction::Quit);
    }
}
