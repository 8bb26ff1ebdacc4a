use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use glitch_snake::config::{THEME_NEON, TICK_INTERVAL_MS};
use glitch_snake::game::{GameState, GameStatus};
use glitch_snake::input::{self, GameInput};
use glitch_snake::renderer;
use glitch_snake::terminal_runtime::{TerminalSession, install_panic_hook};

/// Interval between input polls, short enough to keep rendering snappy.
const FRAME_POLL_INTERVAL_MS: u64 = 16;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food placement RNG for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&mut session, state)
}

fn run(session: &mut TerminalSession, mut state: GameState) -> io::Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_NEON))?;

        if event::poll(Duration::from_millis(FRAME_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(game_input) = input::map_key_event(key) {
                    if game_input == GameInput::Quit {
                        break;
                    }
                    state.apply_input(game_input);
                }
            }
        }

        if state.status == GameStatus::Running {
            if last_tick.elapsed() >= tick_interval {
                state.tick();
                last_tick = Instant::now();
            }
        } else {
            // Keep the tick clock armed while not running, so leaving the
            // running phase cancels the timer and resuming never fires an
            // immediate stale tick.
            last_tick = Instant::now();
        }
    }

    Ok(())
}
