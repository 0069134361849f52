use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use neon_snake::config::{GRID_SIZE, THEME_NEON};
use neon_snake::food::FoodPlacement;
use neon_snake::game::{GameState, GameStatus};
use neon_snake::input::{poll_input, GameInput};
use neon_snake::renderer;
use neon_snake::scheduler::TickScheduler;
use neon_snake::score::{load_best_score, save_best_score};
use neon_snake::ui::hud::HudInfo;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

const INPUT_POLL_WINDOW: Duration = Duration::ZERO;

/// Pacing sleep per loop iteration; keeps held keys from busy-redrawing.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Neon arcade Snake for the terminal")]
struct Cli {
    /// Side length of the square grid, in cells (minimum 4).
    #[arg(long = "grid-size", default_value_t = GRID_SIZE, value_parser = clap::value_parser!(u16).range(4..))]
    grid_size: u16,

    /// Seed the RNG for reproducible food sequences.
    #[arg(long)]
    seed: Option<u64>,

    /// Only spawn food on cells not occupied by the snake.
    #[arg(long = "safe-food")]
    safe_food: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    run(&cli)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let placement = if cli.safe_food {
        FoodPlacement::FreeCellsOnly
    } else {
        FoodPlacement::Anywhere
    };

    let best_score = load_best_score();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(cli.grid_size, placement, best_score, seed),
        None => GameState::new(cli.grid_size, placement, best_score),
    };

    let mut saved_best = best_score;
    let mut scheduler = TickScheduler::new(Instant::now());
    let hud_info = HudInfo { theme: &THEME_NEON };

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &hud_info))?;

        if let Some(game_input) = poll_input(INPUT_POLL_WINDOW)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart if state.status == GameStatus::GameOver => {
                    state.reset();
                    scheduler.rearm(Instant::now());
                }
                GameInput::Restart => {}
                GameInput::Direction(direction) => state.steer(direction),
            }
        }

        let now = Instant::now();

        // The ghost window is wall-clock bounded, so expiry is checked every
        // iteration rather than only on game ticks.
        state.expire_ghost(now);

        if scheduler.tick_due(state.effective_interval(), now) {
            state.step(now);
        }

        if state.status == GameStatus::GameOver && state.high_score > saved_best {
            saved_best = state.high_score;
            if let Err(error) = save_best_score(saved_best) {
                eprintln!("Failed to save best score: {error}");
            }
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
