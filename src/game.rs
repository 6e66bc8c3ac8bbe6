use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bridge::BridgeSet;
use crate::config::{GridConfig, SessionConfig};
use crate::food::{Food, PlacementError};
use crate::input::Direction;
use crate::snake::{CrashReason, MoveOutcome, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

/// Complete mutable game state for one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub bridges: BridgeSet,
    pub status: GameStatus,
    pub death_reason: Option<CrashReason>,
    pub tick_count: u64,
    pending_direction: Direction,
    config: SessionConfig,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from the OS entropy source.
    pub fn new(config: SessionConfig) -> Result<Self, PlacementError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: SessionConfig, seed: u64) -> Result<Self, PlacementError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, mut rng: StdRng) -> Result<Self, PlacementError> {
        let grid = config.grid;
        let snake = Snake::new(grid.center());
        let food = Food::spawn(&mut rng, grid, &snake)?;
        let bridges = BridgeSet::place(&mut rng, grid, &snake, config.bridge_count)?;

        info!(
            "session started: {}x{} grid, {} steps/s, {} bridges",
            grid.width,
            grid.height,
            config.steps_per_second(),
            bridges.len()
        );

        Ok(Self {
            snake,
            food,
            bridges,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            pending_direction: Direction::Idle,
            config,
            rng,
        })
    }

    /// Records the latest directional input; it replaces any earlier one since the last tick.
    pub fn apply_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing && !direction.is_idle() {
            self.pending_direction = direction;
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> Result<(), PlacementError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.tick_count += 1;
        let outcome = self.snake.advance(
            self.pending_direction,
            &mut self.food,
            &self.bridges,
            self.config.grid,
            &mut self.rng,
        )?;

        match outcome {
            MoveOutcome::Crashed(reason) => {
                info!(
                    "crashed ({reason:?}) after {} ticks with score {}",
                    self.tick_count,
                    self.score()
                );
                self.status = GameStatus::GameOver;
                self.death_reason = Some(reason);
            }
            MoveOutcome::Ate if self.snake.occupied_cells() == self.config.grid.total_cells() => {
                info!("board filled with score {}", self.score());
                self.status = GameStatus::Victory;
            }
            MoveOutcome::Ate => {
                debug!(
                    "food eaten, length {}, next food at ({}, {})",
                    self.snake.length(),
                    self.food.position.x,
                    self.food.position.y
                );
            }
            MoveOutcome::Moved | MoveOutcome::Idle => {}
        }

        Ok(())
    }

    /// Current score: the snake's length.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.length()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Direction that the next tick will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn bounds(&self) -> GridConfig {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }
}
