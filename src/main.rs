//! Terminal blockfall runner (default binary).
//!
//! Drives a [`Session`] from wall-clock time and keyboard input, and draws it
//! with the framebuffer renderer. Logging goes to `--log-file` when given,
//! since the terminal itself is busy with the game.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};

use blockfall::core::{GameConfig, Randomizer, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, FRAME_MS};

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u16,

    /// Grid height in cells, including the two-row spawn buffer
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Seed for the piece sequence
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Piece randomizer: uniform or bag
    #[arg(long, default_value = "uniform", value_parser = parse_randomizer)]
    randomizer: Randomizer,

    /// Start a new game automatically after game over
    #[arg(long)]
    auto_restart: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_randomizer(s: &str) -> Result<Randomizer, String> {
    Randomizer::from_str(s).ok_or_else(|| format!("unknown randomizer `{s}` (expected uniform or bag)"))
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            columns: self.columns,
            rows: self.rows,
            seed: self.seed,
            randomizer: self.randomizer,
            auto_restart: self.auto_restart,
        }
    }
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let session = Session::new(cli.game_config()).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_advance = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit after {} game(s)", session.games_started());
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_advance).as_millis().min(u32::MAX as u128) as u32;
        last_advance = now;
        session.advance(elapsed);
    }
}
