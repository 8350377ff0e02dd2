//! Tetrion terminal runner (default binary).
//!
//! Two front ends share one game runtime:
//!
//! - the full-screen terminal view (default), with gravity
//! - `--plain`, a line-per-command console mode without gravity
//!
//! Either way the game lives in the runtime's actor task and this file only
//! forwards input and draws published state.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Notify;
use tracing::{info, Level};

use tetrion::core::{Game, ShapeRng};
use tetrion::input::{handle_key_event, parse_line, should_quit, LineInput};
use tetrion::runtime::{load_game, spawn, GameHandle, RuntimeConfig, SaveStatus};
use tetrion::term::{text_view, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrion::types::Command;

/// How often the keyboard thread checks whether it should stop.
const KEY_POLL: Duration = Duration::from_millis(100);

/// Terminal Tetris
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot file to resume from
    load: Option<PathBuf>,

    /// Seed for the piece sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Gravity period in milliseconds, 0 disables gravity
    #[arg(long)]
    gravity_ms: Option<u64>,

    /// Where the save command writes the snapshot
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Line-mode console play (a/d/s/w/z/space/o/q, one per line)
    #[arg(long)]
    plain: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Environment config with command line overrides applied.
    fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(ms) = self.gravity_ms {
            config = config.with_gravity_ms(ms);
        }
        if let Some(path) = &self.save_path {
            config = config.with_save_path(path);
        }
        if self.plain {
            config = config.with_gravity(None);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.runtime_config();
    let rng = args.seed.map_or_else(ShapeRng::from_os, ShapeRng::new);
    let game = match &args.load {
        Some(path) => load_game(path, rng)
            .await
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Game::new(rng),
    };
    info!(seed = ?args.seed, plain = args.plain, ?config, "starting");

    if args.plain {
        run_plain(game, config).await
    } else {
        run_terminal(game, config).await
    }
}

/// Logs go to a file only: stdout belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();
    Ok(())
}

async fn run_terminal(game: Game, config: RuntimeConfig) -> Result<()> {
    let (handle, tasks) = spawn(game, config);

    let mut term = TerminalRenderer::new();
    let result = match term.enter() {
        Ok(()) => draw_loop(&handle, &mut term).await,
        Err(err) => Err(err),
    };

    // Always try to restore terminal state.
    let _ = term.exit();

    // The actor may already be gone; join reports why.
    let _ = handle.shutdown().await;
    drop(handle);
    tasks.join().await?;
    result
}

async fn draw_loop(handle: &GameHandle, term: &mut TerminalRenderer) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let resized = Arc::new(Notify::new());
    let mut keyboard = tokio::task::spawn_blocking({
        let handle = handle.clone();
        let stop = Arc::clone(&stop);
        let resized = Arc::clone(&resized);
        move || read_keys(&handle, &stop, &resized)
    });

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut state = handle.state();

    let result = loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        {
            let current = state.borrow_and_update();
            let status = current.last_save.as_ref().map(SaveStatus::message);
            view.render_into(&current.snapshot, status.as_deref(), Viewport::new(w, h), &mut fb);
        }
        if let Err(err) = term.draw(&fb) {
            break Err(err);
        }

        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
            }
            _ = resized.notified() => term.invalidate(),
            keys = &mut keyboard => {
                break keys.context("keyboard thread panicked").and_then(|r| r);
            }
        }
    };

    stop.store(true, Ordering::Relaxed);
    result
}

/// Blocking keyboard reader. Returns when the player quits or `stop` is set.
fn read_keys(handle: &GameHandle, stop: &AtomicBool, resized: &Notify) -> Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if !event::poll(KEY_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    if handle.blocking_submit(command).is_err() {
                        return Ok(());
                    }
                }
            }
            Event::Resize(..) => resized.notify_one(),
            _ => {}
        }
    }
    Ok(())
}

async fn run_plain(game: Game, config: RuntimeConfig) -> Result<()> {
    let (handle, tasks) = spawn(game, config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        let snapshot = handle.snapshot();
        write!(stdout, "{}", text_view(&snapshot))?;
        if snapshot.game_over {
            writeln!(stdout, "Game over")?;
            break;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_line(&line) {
            LineInput::Quit => break,
            LineInput::Command(Command::Save) => match handle.save().await {
                Ok(path) => writeln!(stdout, "Saved to {}", path.display())?,
                Err(err) => writeln!(stdout, "Save failed: {err}")?,
            },
            LineInput::Command(command) => {
                handle.command(command).await?;
            }
            LineInput::Unknown => {}
        }
    }

    handle.shutdown().await?;
    drop(handle);
    tasks.join().await?;
    Ok(())
}
