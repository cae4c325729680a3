//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! The game only advances on key presses, so the loop blocks on input.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use twenty48::app::{App, Flow};
use twenty48::config::AppConfig;
use twenty48::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::load(std::env::args().skip(1))?;
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {}, keys {}", seed, config.keys);
    let mut app = App::new(seed, config.rules(), config.keys);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    if app.high_score() > 0 {
        println!("Your highest score was {}.", app.high_score());
    }
    println!("Thanks for playing 2048. Goodbye!");
    result
}

/// Log to the configured file; without one only warnings reach stderr.
fn init_logging(config: &AppConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug)
            .parse_env(Env::default());
    }
    builder.init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Flow::Exit {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
