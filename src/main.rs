use std::time::{Duration, Instant};

use bridge_snake::config::{
    SessionConfig, Theme, DEFAULT_BRIDGE_COUNT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_SPEED_INDEX, THEME_MEADOW,
};
use bridge_snake::error::AppError;
use bridge_snake::game::GameSession;
use bridge_snake::input::{GameInput, InputHandler};
use bridge_snake::logging::init_file_logger;
use bridge_snake::renderer;
use bridge_snake::score::{load_high_scores, save_high_scores, HighScores};
use bridge_snake::setup::{SetupAction, SetupMenu};
use bridge_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use bridge_snake::ui::hud::HudInfo;
use clap::Parser;
use log::{error, info, warn};
use simplelog::LevelFilter;

/// Input poll period while no tick is pending.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width preset (odd, 7-31).
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height preset (odd, 7-31).
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Speed preset, 1 (slowest) to 6.
    #[arg(long, default_value_t = DEFAULT_SPEED_INDEX + 1)]
    speed: usize,

    /// Number of bridges; 0 plays the classic game.
    #[arg(long, default_value_t = DEFAULT_BRIDGE_COUNT)]
    bridges: usize,

    /// Seed for reproducible food and bridge placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity written to the log file.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

enum Screen {
    Setup(SetupMenu),
    Playing {
        session: GameSession,
        /// Best score on this grid when the game started.
        reference_high_score: u32,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let preset = SessionConfig::validated(
        cli.width,
        cli.height,
        SessionConfig::speed_index_for_level(cli.speed)?,
        cli.bridges,
    )?;

    let log_path = init_file_logger(cli.log_level)?;
    info!("bridge-snake starting, logging to {}", log_path.display());

    let mut high_scores = load_high_scores().unwrap_or_else(|error| {
        warn!("ignoring unreadable score file: {error}");
        HighScores::default()
    });

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    let result = run(&mut terminal, preset, cli.seed, &mut high_scores);
    drop(terminal);

    if let Err(error) = &result {
        error!("exiting on error: {error}");
    }
    info!("bridge-snake exiting");
    result
}

fn run(
    terminal: &mut TerminalSession,
    preset: SessionConfig,
    seed: Option<u64>,
    high_scores: &mut HighScores,
) -> Result<(), AppError> {
    let theme: &Theme = &THEME_MEADOW;
    let mut input = InputHandler::new();
    let mut screen = Screen::Setup(SetupMenu::new(preset));
    let mut games_started: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| match &screen {
            Screen::Setup(menu) => renderer::render_setup(frame, menu, theme),
            Screen::Playing {
                session,
                reference_high_score,
            } => renderer::render(
                frame,
                session,
                HudInfo {
                    high_score: *reference_high_score,
                    theme,
                },
            ),
        })?;

        let timeout = match &screen {
            Screen::Playing { session, .. } if session.is_running() => session
                .config()
                .tick_interval()
                .saturating_sub(last_tick.elapsed()),
            _ => IDLE_POLL_INTERVAL,
        };
        let game_input = input.poll_input(timeout)?;

        let mut next_screen = None;
        match &mut screen {
            Screen::Setup(menu) => match game_input.map(|game_input| menu.handle(game_input)) {
                Some(SetupAction::Begin(config)) => {
                    let session = start_session(config, seed, games_started)?;
                    games_started += 1;
                    next_screen = Some(Screen::Playing {
                        reference_high_score: high_scores.best_for(config.grid),
                        session,
                    });
                    last_tick = Instant::now();
                }
                Some(SetupAction::Quit) => break,
                Some(SetupAction::None) | None => {}
            },
            Screen::Playing { session, .. } => {
                match game_input {
                    Some(GameInput::Quit) => break,
                    Some(GameInput::Direction(direction)) => session.apply_direction(direction),
                    Some(GameInput::Confirm) if !session.is_running() => {
                        next_screen = Some(Screen::Setup(SetupMenu::new(session.config())));
                    }
                    Some(GameInput::Confirm) | None => {}
                }

                if session.is_running() && last_tick.elapsed() >= session.config().tick_interval() {
                    session.tick()?;
                    last_tick = Instant::now();

                    if !session.is_running() {
                        record_high_score(high_scores, session);
                    }
                }
            }
        }

        if let Some(screen_after) = next_screen {
            screen = screen_after;
        }
    }

    Ok(())
}

fn start_session(
    config: SessionConfig,
    seed: Option<u64>,
    games_started: u64,
) -> Result<GameSession, AppError> {
    let session = match seed {
        Some(seed) => GameSession::new_with_seed(config, seed.wrapping_add(games_started))?,
        None => GameSession::new(config)?,
    };
    Ok(session)
}

fn record_high_score(high_scores: &mut HighScores, session: &GameSession) {
    if !high_scores.record(session.bounds(), session.score()) {
        return;
    }

    info!(
        "new high score {} on {}x{}",
        session.score(),
        session.bounds().width,
        session.bounds().height
    );
    if let Err(error) = save_high_scores(high_scores) {
        warn!("failed to save high score: {error}");
    }
}
