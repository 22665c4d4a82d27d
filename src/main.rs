use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use grid_snake::config::{
    self, GridSize, Theme, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_SLEEP_MS,
};
use grid_snake::error::AppError;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{self, GameInput};
use grid_snake::renderer;
use grid_snake::scheduler::TickScheduler;
use grid_snake::terminal_runtime::{self, TerminalGuard};

#[derive(Debug, Parser)]
#[command(about = "Classic single-player grid Snake for the terminal")]
struct Cli {
    /// Color theme to use.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Seed the food placement for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let theme = config::theme_by_name(&cli.theme).ok_or_else(|| AppError::UnknownTheme {
        name: cli.theme.clone(),
        available: config::THEMES
            .iter()
            .map(|theme| theme.name)
            .collect::<Vec<_>>()
            .join(", "),
    })?;

    terminal_runtime::install_panic_hook();
    run(&cli, theme)
}

fn run(cli: &Cli, theme: &Theme) -> Result<(), AppError> {
    let mut guard = TerminalGuard::enter()?;

    let bounds = GridSize {
        width: DEFAULT_GRID_WIDTH,
        height: DEFAULT_GRID_HEIGHT,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    let mut scheduler = TickScheduler::new(state.tick_interval());
    scheduler.arm(Instant::now());

    loop {
        guard
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(event) = input::poll_input()? {
            if event == GameInput::Quit {
                break;
            }

            let was_over = state.status == GameStatus::GameOver;
            state.apply_input(event);

            // A restart leaves game over behind; the tick source must be
            // re-armed at the fresh base interval.
            if was_over && state.status == GameStatus::Running {
                scheduler.set_interval(state.tick_interval());
                scheduler.arm(Instant::now());
            }
        }

        // Speed changes from the scoreboard take effect on the next deadline.
        scheduler.set_interval(state.tick_interval());
        if scheduler.poll(Instant::now()) {
            state.tick();
            if state.status == GameStatus::GameOver {
                scheduler.disarm();
            }
        }

        thread::sleep(Duration::from_millis(FRAME_SLEEP_MS));
    }

    Ok(())
}
