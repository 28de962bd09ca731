//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only `Scene`.  No game
//! logic is performed; the 320×480 logical world is mapped onto a character
//! grid that keeps roughly the world's aspect ratio.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use doodle_jump::constants::{
    BIRD_WIDTH, CLOUD_HEIGHT, PLATFORM_WIDTH, PLAYER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use doodle_jump::entities::{BoostKind, Crumble, Facing, PlatformKind, Weather};
use doodle_jump::math::Rgb;
use doodle_jump::scene::Scene;
use doodle_jump::sky;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Rgb = Rgb::new(120, 230, 90);
const C_PLATFORM_NORMAL: Rgb = Rgb::new(110, 190, 60);
const C_PLATFORM_STICKY: Rgb = Rgb::new(200, 120, 220);
const C_PLATFORM_CRUMBLY: Rgb = Rgb::new(190, 150, 90);
const C_BIRD: Rgb = Rgb::new(60, 60, 70);
const C_BULLET: Rgb = Rgb::new(255, 230, 80);
const C_CLOUD: Rgb = Rgb::new(245, 245, 250);
const C_RAIN_DAY: Rgb = Rgb::new(70, 130, 230);
const C_RAIN_NIGHT: Rgb = Rgb::new(100, 150, 255);
const C_SNOW_DAY: Rgb = Rgb::new(255, 255, 255);
const C_SNOW_NIGHT: Rgb = Rgb::new(200, 200, 255);
const C_BOOST_SPEED: Rgb = Rgb::new(255, 200, 40);
const C_BOOST_JUMP: Rgb = Rgb::new(80, 220, 255);
const C_BOOST_SHIELD: Rgb = Rgb::new(255, 90, 160);
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::Grey;

/// Sprite dimming when the host's clock says it is night.
const NIGHT_DIM: f32 = 0.75;

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Viewport mapping ──────────────────────────────────────────────────────────

/// Where the play field sits in the terminal.
struct Viewport {
    left: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    /// Terminal cells are about twice as tall as wide.
    fn fit(width: u16, height: u16) -> Self {
        let ideal = (height as f32 * SCREEN_WIDTH / SCREEN_HEIGHT * 2.0) as u16;
        let cols = ideal.clamp(1, width.max(1));
        Self {
            left: width.saturating_sub(cols) / 2,
            cols,
            rows: height.max(1),
        }
    }

    fn col(&self, x: f32) -> Option<u16> {
        let c = (x / SCREEN_WIDTH * self.cols as f32).floor();
        (c >= 0.0 && c < self.cols as f32).then(|| self.left + c as u16)
    }

    fn row(&self, y: f32) -> Option<u16> {
        let r = (y / SCREEN_HEIGHT * self.rows as f32).floor();
        (r >= 0.0 && r < self.rows as f32).then_some(r as u16)
    }

    /// Width in cells of a span of `w` world units, at least one.
    fn span(&self, w: f32) -> usize {
        ((w / SCREEN_WIDTH * self.cols as f32).round() as usize).max(1)
    }
}

/// Everything a draw call needs besides the writer.
struct Canvas<'s, 'a> {
    scene: &'s Scene<'a>,
    vp: Viewport,
    /// Sky colour per terminal row.
    row_bg: Vec<Color>,
    dim: f32,
}

impl Canvas<'_, '_> {
    /// Print `text` with its first cell at world `(x, y)`, over the sky.
    fn put<W: Write>(&self, out: &mut W, x: f32, y: f32, text: &str, fg: Rgb) -> std::io::Result<()> {
        let (Some(row), Some(col)) = (self.vp.row(y), self.vp.col(x)) else {
            return Ok(());
        };
        let room = (self.vp.left + self.vp.cols).saturating_sub(col) as usize;
        let clipped: String = text.chars().take(room).collect();
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetBackgroundColor(self.row_bg[row as usize]))?;
        out.queue(style::SetForegroundColor(color(fg.scaled(self.dim))))?;
        out.queue(Print(clipped))?;
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame into a `width` × `height` terminal.
pub fn render<W: Write>(out: &mut W, scene: &Scene, width: u16, height: u16) -> std::io::Result<()> {
    let vp = Viewport::fit(width, height);
    let row_bg = (0..vp.rows)
        .map(|r| color(sky::sample_sky(&scene.colors, r as f32 / vp.rows as f32)))
        .collect();
    let canvas = Canvas {
        scene,
        vp,
        row_bg,
        dim: if scene.state.night_mode { NIGHT_DIM } else { 1.0 },
    };

    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sky(out, &canvas)?;
    draw_stars(out, &canvas)?;
    draw_clouds(out, &canvas)?;
    draw_platforms(out, &canvas)?;
    draw_boosts(out, &canvas)?;
    draw_birds(out, &canvas)?;
    draw_bullets(out, &canvas)?;
    draw_particles(out, &canvas)?;
    draw_player(out, &canvas)?;
    draw_hud(out, &canvas)?;
    draw_controls_hint(out, &canvas)?;

    if scene.state.is_over() {
        draw_game_over(out, &canvas)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_sky<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let blank = " ".repeat(canvas.vp.cols as usize);
    for (row, bg) in canvas.row_bg.iter().enumerate() {
        out.queue(cursor::MoveTo(canvas.vp.left, row as u16))?;
        out.queue(style::SetBackgroundColor(*bg))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn draw_stars<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    if canvas.scene.star_alpha <= 0.0 {
        return Ok(());
    }
    for star in &canvas.scene.state.stars {
        let b = canvas.scene.star_brightness(star);
        if b < 0.15 {
            continue;
        }
        let glyph = if star.brightness > 0.8 { "*" } else { "." };
        let level = (255.0 * b) as u8;
        let x = canvas.scene.star_screen_x(star);
        // Stars skip the night-mode sprite dimming.
        let (Some(row), Some(col)) = (canvas.vp.row(star.y), canvas.vp.col(x)) else {
            continue;
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetBackgroundColor(canvas.row_bg[row as usize]))?;
        out.queue(style::SetForegroundColor(Color::Rgb { r: level, g: level, b: level }))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_clouds<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for cloud in &canvas.scene.state.clouds {
        let shade = if cloud.alpha > 0.75 { "▓" } else { "░" };
        let body = shade.repeat(canvas.vp.span(cloud.width));
        let tint = C_CLOUD.scaled(0.6 + 0.4 * cloud.alpha);
        canvas.put(out, cloud.x, cloud.y + cloud.height / 2.0, &body, tint)?;
        if cloud.height > CLOUD_HEIGHT {
            let puff = shade.repeat(canvas.vp.span(cloud.width / 2.0));
            canvas.put(out, cloud.x + cloud.width / 4.0, cloud.y, &puff, tint)?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_platforms<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let cells = canvas.vp.span(PLATFORM_WIDTH);
    for platform in &canvas.scene.state.platforms {
        let (glyph, tint) = match platform.kind {
            PlatformKind::Normal => ("=", C_PLATFORM_NORMAL),
            PlatformKind::Sticky => ("#", C_PLATFORM_STICKY),
            PlatformKind::Disappearing(Crumble::Intact) => ("-", C_PLATFORM_CRUMBLY),
            PlatformKind::Disappearing(Crumble::Breaking { .. }) => ("·", C_PLATFORM_CRUMBLY),
            PlatformKind::Disappearing(Crumble::Broken) => continue,
        };
        canvas.put(out, platform.x, platform.y, &glyph.repeat(cells), tint)?;
    }
    Ok(())
}

fn draw_boosts<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for boost in canvas.scene.state.boosts.iter().filter(|b| b.active) {
        let (glyph, tint) = match boost.kind {
            BoostKind::Speed => ("»", C_BOOST_SPEED),
            BoostKind::Jump => ("↑", C_BOOST_JUMP),
            BoostKind::Shield => ("◊", C_BOOST_SHIELD),
        };
        canvas.put(out, boost.x, boost.y, glyph, tint)?;
    }
    Ok(())
}

fn draw_birds<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for bird in &canvas.scene.state.birds {
        let sprite = match bird.facing {
            Facing::Left => "<v^",
            Facing::Right => "^v>",
        };
        let x = bird.x + BIRD_WIDTH / 2.0 - SCREEN_WIDTH / canvas.vp.cols as f32;
        canvas.put(out, x, bird.y, sprite, C_BIRD)?;
    }
    Ok(())
}

fn draw_bullets<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for bullet in &canvas.scene.state.bullets {
        canvas.put(out, bullet.x, bullet.y, "•", C_BULLET)?;
    }
    Ok(())
}

fn draw_particles<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let night = canvas.scene.state.night_mode;
    let (glyph, tint) = match (canvas.scene.state.weather, night) {
        (Weather::Clear, _) => return Ok(()),
        (Weather::Rain, false) => ("/", C_RAIN_DAY),
        (Weather::Rain, true) => ("/", C_RAIN_NIGHT),
        (Weather::Snow, false) => ("*", C_SNOW_DAY),
        (Weather::Snow, true) => ("*", C_SNOW_NIGHT),
    };
    for p in &canvas.scene.state.particles {
        canvas.put(out, p.x, p.y, glyph, tint.scaled(p.alpha))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    // Sprite (2 rows):
    //   (o>    ← head, facing right
    //   /|\    ← body
    let p = &canvas.scene.state.player;
    let head = match p.facing {
        Facing::Left => "<o)",
        Facing::Right => "(o>",
    };
    let cell = SCREEN_WIDTH / canvas.vp.cols as f32;
    let x = p.x - cell * 1.5;
    let tint = if p.has_boost(BoostKind::Shield) {
        C_BOOST_SHIELD
    } else {
        C_PLAYER
    };
    canvas.put(out, x, p.y - PLAYER_HEIGHT / 4.0, head, tint)?;
    canvas.put(out, x, p.y + PLAYER_HEIGHT / 4.0, "/|\\", tint)?;
    Ok(())
}

// ── HUD (top-left rows) ───────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let scene = canvas.scene;
    let state = scene.state;

    let weather = match state.weather {
        Weather::Clear => "Clear",
        Weather::Rain => "Rainy",
        Weather::Snow => "Snowy",
    };
    let time = if scene.is_night() { "Night" } else { "Day" };
    let boost = match (state.player.boost_kind(), scene.boost_seconds()) {
        (Some(BoostKind::Speed), Some(s)) => format!("Speed Boost: {s:.1}"),
        (Some(BoostKind::Jump), Some(s)) => format!("Jump Boost: {s:.1}"),
        (Some(BoostKind::Shield), Some(s)) => format!("Shield Boost: {s:.1}"),
        _ => "No Boost".to_string(),
    };

    let mut lines = vec![
        format!("Score: {}", state.score),
        format!("{time} / {weather}"),
        boost,
    ];
    if let Some(s) = scene.flight_seconds() {
        lines.push(format!("Flying: {s:.1}"));
    }
    lines.push(format!(
        "Difficulty: {} (Birds: {})",
        state.difficulty,
        state.birds.len()
    ));

    out.queue(style::SetForegroundColor(C_HUD))?;
    for (i, line) in lines.iter().enumerate() {
        let row = i as u16;
        if row >= canvas.vp.rows {
            break;
        }
        out.queue(cursor::MoveTo(canvas.vp.left + 1, row))?;
        out.queue(style::SetBackgroundColor(canvas.row_bg[row as usize]))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint (bottom rows) ───────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let hints = [
        "← → / A D : Move   ↑ : Jump/Fly   F : Fly   SPACE : Shoot",
        "W : Weather   Q : Quit",
    ];
    out.queue(style::SetForegroundColor(C_HINT))?;
    for (i, hint) in hints.iter().enumerate() {
        let row = canvas.vp.rows.saturating_sub((hints.len() - i) as u16);
        let clipped: String = hint.chars().take(canvas.vp.cols.saturating_sub(1) as usize).collect();
        out.queue(cursor::MoveTo(canvas.vp.left + 1, row))?;
        out.queue(style::SetBackgroundColor(canvas.row_bg[row as usize]))?;
        out.queue(Print(clipped))?;
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", canvas.scene.state.score);
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("SPACE / R - Play Again  Q - Quit", Color::White),
    ];

    let cx = canvas.vp.left + canvas.vp.cols / 2;
    let start_row = (canvas.vp.rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetBackgroundColor(Color::Black))?;
    for (i, (msg, fg)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*fg))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
