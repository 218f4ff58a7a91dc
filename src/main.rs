mod display;

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use space_explorer::config::GameConfig;
use space_explorer::entities::GameStatus;
use space_explorer::game::{Game, Transition};
use space_explorer::input::FrameInput;
use space_explorer::scene;

use display::Viewport;

// ── Held-key input ────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key-repeat runs at 15 Hz or faster, so 8 frames (≈133 ms at 60 FPS)
/// is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Maps each held key → the frame it was last seen (press or repeat).
#[derive(Default)]
struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&key| self.is_held(key, frame))
    }
}

fn letter(c: char) -> [KeyCode; 2] {
    [
        KeyCode::Char(c.to_ascii_lowercase()),
        KeyCode::Char(c.to_ascii_uppercase()),
    ]
}

/// Drain every pending terminal event (non-blocking) and fold it into this
/// frame's `FrameInput`.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.
fn poll_input(rx: &mpsc::Receiver<Event>, held: &mut HeldKeys, frame: u64) -> FrameInput {
    let mut input = FrameInput::default();

    while let Ok(event) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                held.last_seen.insert(code, frame);
                match code {
                    KeyCode::Esc => input.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        input.quit = true;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                held.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                held.last_seen.remove(&code);
            }
        }
    }

    let [a, a_up] = letter('a');
    let [d, d_up] = letter('d');
    let [w, w_up] = letter('w');
    let [s, s_up] = letter('s');
    input.left = held.any_held(&[KeyCode::Left, a, a_up], frame);
    input.right = held.any_held(&[KeyCode::Right, d, d_up], frame);
    input.up = held.any_held(&[KeyCode::Up, w, w_up], frame);
    input.down = held.any_held(&[KeyCode::Down, s, s_up], frame);
    input.shoot = held.is_held(KeyCode::Char(' '), frame);
    input
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut held = HeldKeys::default();
    let frame_budget = game.config().frame_duration();
    let started = Instant::now();
    let mut frame: u64 = 0;

    while game.is_running() {
        let frame_start = Instant::now();
        frame += 1;

        let mut input = poll_input(rx, &mut held, frame);
        if game.status() != GameStatus::GameOver {
            input.restart = false;
        }

        match game.frame(&input, &mut rng) {
            Ok(Transition::GameOver { final_score }) => {
                info!(final_score, "showing game-over screen");
            }
            Ok(Transition::Restarted) => held.last_seen.clear(),
            Ok(Transition::None) => {}
            // Already logged; the game-over screen still works without it.
            Err(_) => {}
        }

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(game.config(), cols, rows);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let frame_scene = scene::build(game.state(), game.config(), elapsed_ms);
        display::render(out, &frame_scene, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(config: &GameConfig) {
    // Log to file (not stdout/stderr, which would tear the game screen).
    let Ok(log_file) = File::create(&config.log_path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = GameConfig::default();
    init_logging(&config);

    // A malformed high-score file stops us before the terminal is touched.
    let mut game = Game::new(config).map_err(|err| {
        error!(%err, "cannot start");
        err
    })?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result.map_err(Into::into)
}
