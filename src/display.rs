/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// the 256x256-unit field onto the terminal grid and emits draw commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use arena_shooter::entities::{EnemyKind, GameState, GameStatus, InputFrame};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_WARNING: Color = Color::Red;
const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::Cyan;
const C_GOBLIN: Color = Color::Red;
const C_SKELETON: Color = Color::White;
const C_ZOMBIE: Color = Color::DarkMagenta;
const C_PROJECTILE: Color = Color::Yellow;
const C_PACK: Color = Color::Green;
const C_CROSSHAIR: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Colour cycle for the blinking game-over banner.
const C_GAME_OVER: [Color; 4] = [Color::Red, Color::Yellow, Color::White, Color::DarkRed];

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols` x `rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    input: &InputFrame,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // The border doubles as the proximity warning: it flashes red while
    // any enemy is inside the warning radius.
    let border_color = if state.warning_active && state.frame % 10 < 5 {
        C_WARNING
    } else {
        C_BORDER
    };
    draw_border(out, cols, rows, border_color)?;

    for pack in &state.packs {
        let (x, y) = to_cell(pack.pos, state, cols, rows);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_PACK))?;
        out.queue(Print("+"))?;
    }
    for projectile in &state.projectiles {
        let (x, y) = to_cell(projectile.pos, state, cols, rows);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_PROJECTILE))?;
        out.queue(Print("•"))?;
    }
    for enemy in &state.enemies {
        let (glyph, color) = enemy_glyph(enemy.kind);
        let (x, y) = to_cell(enemy.pos, state, cols, rows);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }

    let (px, py) = to_cell(state.player.pos, state, cols, rows);
    out.queue(cursor::MoveTo(px, py))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print("@"))?;

    draw_hud(out, state)?;
    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    } else {
        let (cx, cy) = to_cell(input.pointer, state, cols, rows);
        out.queue(cursor::MoveTo(cx, cy))?;
        out.queue(style::SetForegroundColor(C_CROSSHAIR))?;
        out.queue(Print("┼"))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Map a field position to a terminal cell, clamped inside the border.
fn to_cell(pos: Vec2, state: &GameState, cols: u16, rows: u16) -> (u16, u16) {
    let x = (pos.x / state.width * cols as f32) as i32;
    let y = (pos.y / state.height * rows as f32) as i32;
    (
        x.clamp(1, (cols.saturating_sub(2) as i32).max(1)) as u16,
        y.clamp(1, (rows.saturating_sub(2) as i32).max(1)) as u16,
    )
}

fn enemy_glyph(kind: EnemyKind) -> (&'static str, Color) {
    match kind {
        EnemyKind::Goblin => ("G", C_GOBLIN),
        EnemyKind::Skeleton => ("S", C_SKELETON),
        EnemyKind::Zombie => ("Z", C_ZOMBIE),
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16, color: Color) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(color))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 1..rows.saturating_sub(1) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (top-left, over the field like the classic overlay) ───────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let lines = [
        format!("Score: {}", state.score),
        format!("Health: {}", state.player.health.max(0)),
        format!("Ammo: {}", state.player.ammo),
        format!("Packs: {}", state.player.health_packs),
        format!("Weapon: {}", state.player.weapon.stats().name),
    ];

    out.queue(style::SetForegroundColor(C_HUD))?;
    for (i, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 1 + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint (bottom border row) ─────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(2, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(" WASD Move  LMB Fire  1/2/3 Weapon  E Pack  F Melee  Q Quit "))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let blink = C_GAME_OVER[(state.frame / 4) as usize % C_GAME_OVER.len()];
    let cx = cols / 2;
    let cy = rows / 2;

    let banner = "GAME OVER";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(banner.chars().count() as u16 / 2),
        cy.saturating_sub(1),
    ))?;
    out.queue(style::SetForegroundColor(blink))?;
    out.queue(Print(banner))?;

    let score_line = format!("Final Score: {}", state.score);
    out.queue(cursor::MoveTo(
        cx.saturating_sub(score_line.chars().count() as u16 / 2),
        cy,
    ))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "Press R to Restart";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 1,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
