mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use square_chase::compute::tick;
use square_chase::config::GameConfig;
use square_chase::input::FrameInput;
use square_chase::reload::{self, StateBlob};

// ── Input sampling ────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Drain pending key events into `key_frame` and build this frame's input.
///
/// Directions are levels: a key counts while it is "fresh" in `key_frame`, so
/// several can be held at once.  Confirm and quit are edges taken from
/// `Press` events only; OS key-repeat arrives as `Repeat` on
/// keyboard-enhancement terminals and never re-fires them there.
fn sample_input(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> FrameInput {
    let mut input = FrameInput::default();

    while let Ok(ev) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                // Classic terminals report auto-repeat as Press; only the
                // first press of a hold counts as confirm.
                let fresh = !is_held(key_frame, &code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        input.quit = true;
                    }
                    KeyCode::Enter | KeyCode::Char(' ') if fresh => input.confirm = true,
                    _ => {}
                }
                key_frame.insert(code, frame);
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }

    input.up = any_held(key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame);
    input.down = any_held(key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame);
    input.left = any_held(key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame);
    input.right = any_held(key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame);
    input
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// The state lives in a host-owned blob and is re-adopted at every frame
/// boundary, the same handoff a live code reload goes through.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    let mut blob = StateBlob::new();
    reload::init_in_place(blob.bytes_mut())?;
    info!(bytes = reload::serialize_size(), "state initialised");

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let dt = frame_start
            .duration_since(last)
            .as_secs_f32()
            .min(config.max_frame_dt);
        last = frame_start;

        let input = sample_input(rx, &mut key_frame, frame);
        let (width, height) = terminal::size()?;
        let view = display::viewport(width, height, config.zoom);

        let state = reload::adopt(blob.bytes_mut())?;
        *state = tick(state, &input, dt, &view, config, &mut rng);
        display::render(out, state, &view)?;

        if !state.is_running() {
            info!(score = state.player.score, frames = frame, "frame loop finished");
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame {
            thread::sleep(config.frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // stderr, so `2>file` captures logs without touching the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = GameConfig::default();
    config.validate()?;

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
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}
