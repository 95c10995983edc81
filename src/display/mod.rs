/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.
///
/// The play area is a pixel framebuffer packed two pixels per terminal cell
/// (upper and lower half blocks), so squares look square on a 1:2 cell grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;
use square_chase::camera::{Camera2D, Viewport};
use square_chase::entities::{Entity, GameState, Scene};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BOARD: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_TARGET: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Rows above the play area: HUD (0) and top border (1).
const TOP_ROWS: u16 = 2;
/// Rows below the play area: bottom border and controls hint.
const BOTTOM_ROWS: u16 = 2;

/// Viewport for a terminal of `width` × `height` cells: one pixel per column,
/// two per play-area row, world origin at the play area's top-left corner.
pub fn viewport(width: u16, height: u16, zoom: f32) -> Viewport {
    let cols = width.saturating_sub(2);
    let rows = height.saturating_sub(TOP_ROWS + BOTTOM_ROWS);
    Viewport::new(
        Camera2D::with_zoom(zoom),
        Vec2::new(cols as f32, rows as f32 * 2.0),
    )
}

// ── Framebuffer ───────────────────────────────────────────────────────────────

struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Option<Color>>,
}

impl FrameBuffer {
    fn new(screen: Vec2) -> Self {
        let width = screen.x.max(0.0) as usize;
        let height = screen.y.max(0.0) as usize;
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    /// Fill every pixel whose centre falls inside the entity's screen rect.
    fn fill(&mut self, camera: &Camera2D, entity: &Entity, color: Color) {
        let min = camera.world_to_screen(entity.position);
        let max = camera.world_to_screen(entity.position + entity.size);
        let x0 = (min.x - 0.5).ceil().max(0.0) as usize;
        let y0 = (min.y - 0.5).ceil().max(0.0) as usize;
        let x1 = ((max.x - 0.5).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((max.y - 0.5).ceil().max(0.0) as usize).min(self.height);
        // Keep even the smallest square visible.
        let x1 = x1.max((x0 + 1).min(self.width));
        let y1 = y1.max((y0 + 1).min(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[y * self.width + x] = Some(color);
            }
        }
    }

    fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    match state.scene() {
        Scene::StartScreen => draw_start_screen(out, width, height)?,
        Scene::Playing => draw_play_area(out, state, view)?,
        Scene::GameOver => {
            draw_play_area(out, state, view)?;
            draw_game_over(out, state, width, height)?;
        }
    }
    draw_controls_hint(out, state, height)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in TOP_ROWS..height.saturating_sub(BOTTOM_ROWS) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.player.score)))?;

    // Targets on the board — right
    if state.scene() != Scene::StartScreen {
        let enemies = state.active_targets().filter(|t| t.is_enemy()).count();
        let text = format!(
            "Targets: {}  Enemies: {}",
            state.active_target_count() - enemies,
            enemies
        );
        let rx = width.saturating_sub(text.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(rx, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_BOARD))?;
        out.queue(Print(&text))?;
    }

    Ok(())
}

// ── Play area ─────────────────────────────────────────────────────────────────

fn draw_play_area<W: Write>(
    out: &mut W,
    state: &GameState,
    view: &Viewport,
) -> std::io::Result<()> {
    let mut fb = FrameBuffer::new(view.screen);
    for target in state.active_targets() {
        let color = if target.is_enemy() { C_ENEMY } else { C_TARGET };
        fb.fill(&view.camera, &target.entity, color);
    }
    fb.fill(&view.camera, &state.player.entity, C_PLAYER);

    for row in 0..fb.height.div_ceil(2) {
        for col in 0..fb.width {
            let top = fb.get(col, row * 2);
            let bottom = fb.get(col, row * 2 + 1);
            let (glyph, fg, bg) = match (top, bottom) {
                (None, None) => continue,
                (Some(t), Some(b)) if t == b => ("█", t, Color::Reset),
                (Some(t), None) => ("▀", t, Color::Reset),
                (None, Some(b)) => ("▄", b, Color::Reset),
                (Some(t), Some(b)) => ("▀", t, b),
            };
            out.queue(cursor::MoveTo(col as u16 + 1, row as u16 + TOP_ROWS))?;
            out.queue(style::SetForegroundColor(fg))?;
            out.queue(style::SetBackgroundColor(bg))?;
            out.queue(Print(glyph))?;
        }
    }
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState, height: u16) -> std::io::Result<()> {
    let hint = match state.scene() {
        Scene::Playing => "←↑↓→ / W A S D : Move   Q : Quit",
        Scene::StartScreen | Scene::GameOver => "ENTER / SPACE : Start   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_start_screen<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("■  SQUARE  CHASE  ■", Color::Cyan),
        ("", Color::Reset),
        ("Collect green squares", C_TARGET),
        ("Avoid red squares", C_ENEMY),
        ("You grow every 5 points", Color::White),
        ("", Color::Reset),
        ("Press ENTER to start", Color::Yellow),
    ];
    draw_centered(out, lines, width, height)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.player.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (score_line.as_str(),    Color::Yellow),
        ("ENTER - Play Again  Q - Quit", Color::White),
    ];
    draw_centered(out, lines, width, height)
}
