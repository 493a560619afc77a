//! Terminal runner (default binary).
//!
//! Owns the clock, the terminal and the input handler; the game itself only
//! sees elapsed time and actions.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::info;

use neon_tetris::core::{Game, GameSnapshot};
use neon_tetris::input::{should_quit, InputHandler};
use neon_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use neon_tetris::types::{GameAction, TICK_MS};
use neon_tetris::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

/// Send log output to the configured file; stdout belongs to the game screen.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed_or_clock();
    info!(
        "starting game: seed {} cell width {} release events {}",
        seed,
        config.cell_width,
        term.release_events()
    );

    let mut game = Game::new(seed);
    let view = GameView::new(config.cell_width);
    let mut input_handler = InputHandler::new();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!("quit: score {} level {}", game.score(), game.level());
                            return Ok(());
                        }
                        if let Some(action) = input_handler.handle_key_press(key) {
                            if game.apply_action(action) && action == GameAction::Restart {
                                input_handler.reset();
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys repeat through the input handler.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            for action in input_handler.update(elapsed_ms) {
                game.apply_action(action);
            }
            game.tick(elapsed);
        }
    }
}
