//! Terminal runner (default binary).
//!
//! One thread owns the session: it renders, waits for a key until the next
//! gravity tick is due, queues the key's command, then advances the session.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use falling_blocks::config::Config;
use falling_blocks::core::{GameSnapshot, GameState};
use falling_blocks::engine::Session;
use falling_blocks::input::{is_restart, map_key, should_quit};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval once the clock has stopped (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;
    config.validate()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.effective_seed();
    log::info!(
        "board {}x{}, tick {}ms, seed {}",
        config.rows,
        config.cols,
        config.tick_ms,
        seed
    );

    let game = GameState::with_size(config.rows, config.cols, seed);
    let mut session = Session::new(game, config.tick_interval(), Instant::now());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_size = (0, 0);
    let mut dirty = true;

    loop {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if dirty || size != last_size {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(size.0, size.1), &mut fb);
            term.draw_swap(&mut fb)?;
            last_size = size;
            dirty = false;
        }

        let timeout = session
            .time_until_next_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit, score {}", session.game().score());
                        return Ok(());
                    }
                    if is_restart(key) {
                        session.restart(Instant::now());
                        dirty = true;
                    } else if let Some(command) = map_key(key) {
                        session.submit(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= session.advance(Instant::now());
    }
}
