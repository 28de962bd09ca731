mod display;

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use doodle_jump::compute::{init_state, tick};
use doodle_jump::config::HostConfig;
use doodle_jump::entities::{GameState, InputSnapshot};
use doodle_jump::scene::Scene;

/// One simulation tick; the core assumes exactly 60 of these per second.
const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Debug, Parser)]
#[command(name = "doodle_jump", about = "Endless-climb platformer in the terminal")]
struct Cli {
    /// TOML host configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (overrides the config file).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> anyhow::Result<HostConfig> {
    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.log.file = cli.log_file.clone();
    }
    Ok(config)
}

/// Logging goes to a file or nowhere; stderr would tear the alternate screen.
fn init_logging(config: &HostConfig) -> anyhow::Result<()> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::new()
        .parse_filters(&config.log.level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn utc_hour() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ((secs / 3600) % 24) as u32
}

// ── Input collaborator ────────────────────────────────────────────────────────

/// Turns raw key events into one `InputSnapshot` per frame.
///
/// Held keys: we record the frame of the last press/repeat event per key and
/// treat the key as held while that is within `hold_window` frames.  On
/// terminals with keyboard enhancement we also get release events and drop
/// the key immediately.  One-shot actions (shoot, fly, weather, restart)
/// use only fresh `Press` events from the current frame.
struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    pressed: HashSet<KeyCode>,
    hold_window: u64,
}

impl KeyTracker {
    fn new(hold_window: u64) -> Self {
        Self {
            key_frame: HashMap::new(),
            pressed: HashSet::new(),
            hold_window,
        }
    }

    fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, frame);
                self.pressed.insert(code);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| {
            self.key_frame
                .get(k)
                .map(|&last| frame.saturating_sub(last) <= self.hold_window)
                .unwrap_or(false)
        })
    }

    fn pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.pressed.contains(k))
    }

    /// Build this frame's snapshot and forget the one-shot presses.
    fn snapshot(&mut self, frame: u64) -> InputSnapshot {
        let input = InputSnapshot {
            left: self.held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
            right: self.held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
            up: self.held(&[KeyCode::Up], frame),
            shoot: self.pressed(&[KeyCode::Char(' ')]),
            fly: self.pressed(&[KeyCode::Char('f'), KeyCode::Char('F')]),
            cycle_weather: self.pressed(&[KeyCode::Char('w'), KeyCode::Char('W')]),
            restart: self.pressed(&[KeyCode::Char(' '), KeyCode::Char('r'), KeyCode::Char('R')]),
        };
        self.pressed.clear();
        input
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    hold_window: u64,
) -> std::io::Result<()> {
    let mut keys = KeyTracker::new(hold_window);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Press {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                }
            }
            keys.record(code, kind, frame);
        }

        let input = keys.snapshot(frame);
        state = tick(&state, &input, rng);

        let (width, height) = terminal::size()?;
        display::render(out, &Scene::capture(&state), width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let night_mode = config.night_mode.resolve(utc_hour());
    info!("starting, seed {:?}, night mode {}", config.seed, night_mode);
    let state = init_state(night_mode, &mut rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot enter raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events make held keys precise; terminals without the
    // protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, state, &mut rng, &rx, config.input.hold_window);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
