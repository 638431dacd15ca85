//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer from `tui_tetromino::term`
//! for output, and a fixed `TICK_MS` step for gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_tetromino::core::{Game, GameConfig, GameSnapshot};
use tui_tetromino::input::{should_quit, InputHandler};
use tui_tetromino::logging::{init_log, LogConfig};
use tui_tetromino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tetromino::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    init_log(&LogConfig::from_env())?;
    let config = GameConfig::from_env();
    log::info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting on error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key(key) {
                        apply(&mut game, &mut input, action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if let Some(action) = input.update(TICK_MS) {
                apply(&mut game, &mut input, action);
            }
            game.tick(TICK_MS);
        }
    }
}

fn apply(game: &mut Game, input: &mut InputHandler, action: GameAction) {
    // A held down key must not carry over a pause or restart.
    if matches!(action, GameAction::Pause | GameAction::Restart) && input.soft_drop_held() {
        input.reset();
        game.apply_action(GameAction::SoftDropRelease);
    }
    game.apply_action(action);
}
