use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use retro_snake::config::{theme_by_name, GameConfig, GridSize, Theme, THEME_RETRO};
use retro_snake::game::{GamePhase, GameState};
use retro_snake::input::{poll_input, GameInput};
use retro_snake::renderer;
use retro_snake::settings::{load_settings, Settings};
use retro_snake::terminal_runtime::{self, TerminalSession};

/// Poll timeout per loop iteration; also bounds render latency.
const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "retro-snake", version, about = "Retro grid snake for the terminal")]
struct Cli {
    /// Playfield width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Playfield height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Color theme name.
    #[arg(long)]
    theme: Option<String>,

    /// Seed for the food placement RNG, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Ignoring settings file: {error}");
            Settings::default()
        }
    };

    let config = GameConfig {
        grid: GridSize {
            width: cli.width.unwrap_or(settings.grid_width),
            height: cli.height.unwrap_or(settings.grid_height),
        },
        ..GameConfig::default()
    };
    let tick_interval =
        Duration::from_millis(cli.tick_ms.unwrap_or(settings.tick_interval_ms).max(1));

    let theme_name = cli.theme.as_deref().unwrap_or(&settings.theme);
    let theme = match theme_by_name(theme_name) {
        Some(theme) => theme,
        None => {
            eprintln!("Unknown theme {theme_name:?}, using {:?}", THEME_RETRO.name);
            &THEME_RETRO
        }
    };

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    terminal_runtime::install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&mut session, state, theme, tick_interval)
}

fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    theme: &Theme,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Input is applied before the tick so a turn registered this frame
        // affects this frame's movement.
        match poll_input(FRAME_POLL_INTERVAL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Restart) => {
                if state.phase == GamePhase::GameOver {
                    state.reset();
                    last_tick = Instant::now();
                }
            }
            Some(GameInput::Direction(direction)) => state.apply_direction(direction),
            None => {}
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;
    }

    Ok(())
}
