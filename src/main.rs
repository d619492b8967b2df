mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use glam::vec2;
use rand::thread_rng;

use arena_shooter::compute::{init_state, tick, FIELD_HEIGHT, FIELD_WIDTH};
use arena_shooter::entities::{InputFrame, WeaponKind};

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| is_held(key_frame, key, frame))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and fold all their effects into a single
/// `InputFrame`, so WASD, the mouse button and the pointer all act at once.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence, which is shorter than the OS repeat interval, so the key stays
///   live while it is actively generating repeats.
///
/// The mouse arrives over the same event stream: `Moved`/`Drag` events track
/// the pointer, `Down(Left)`/`Up(Left)` track the fire button.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    let (mut cols, mut rows) = terminal::size()?;
    let mut pointer_cell = (cols / 2, rows / 2);
    let mut fire_held = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // One-shot actions seen this frame
        let mut select_weapon = None;
        let mut use_pack = false;
        let mut melee = false;
        let mut restart = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    // Press: record key + handle one-shot actions
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char('1') => select_weapon = Some(WeaponKind::Pistol),
                            KeyCode::Char('2') => select_weapon = Some(WeaponKind::Shotgun),
                            KeyCode::Char('3') => select_weapon = Some(WeaponKind::MachineGun),
                            KeyCode::Char('e') | KeyCode::Char('E') => use_pack = true,
                            KeyCode::Char('f') | KeyCode::Char('F') => melee = true,
                            KeyCode::Char('r') | KeyCode::Char('R') => restart = true,
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => {
                    pointer_cell = (column, row);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => fire_held = true,
                        MouseEventKind::Up(MouseButton::Left) => fire_held = false,
                        _ => {}
                    }
                }
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                }
                _ => {}
            }
        }

        // ── Fold held keys + mouse into this tick's input snapshot ────────────
        let input = InputFrame {
            up: any_held(
                &key_frame,
                &[KeyCode::Char('w'), KeyCode::Char('W'), KeyCode::Up],
                frame,
            ),
            down: any_held(
                &key_frame,
                &[KeyCode::Char('s'), KeyCode::Char('S'), KeyCode::Down],
                frame,
            ),
            left: any_held(
                &key_frame,
                &[KeyCode::Char('a'), KeyCode::Char('A'), KeyCode::Left],
                frame,
            ),
            right: any_held(
                &key_frame,
                &[KeyCode::Char('d'), KeyCode::Char('D'), KeyCode::Right],
                frame,
            ),
            fire: fire_held,
            pointer: vec2(
                pointer_cell.0 as f32 / cols.max(1) as f32 * state.width,
                pointer_cell.1 as f32 / rows.max(1) as f32 * state.height,
            ),
            select_weapon,
            use_pack,
            melee,
            restart,
        };

        state = tick(&state, &input, &mut rng);

        display::render(out, &state, &input, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

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
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
