//! Frame rendering.
//!
//! [`render`] repaints the whole 800×600 field from a read-only [`GameState`].
//! Drawing goes through the [`Surface`] trait so the same code paints the browser
//! canvas and the in-memory [`DisplayList`].

use crate::model::{Enemy, FIELD_HEIGHT, FIELD_WIDTH, GameState, GameType, ItemKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Minimal 2D drawing target. Every call carries its own style so implementations
/// keep no state between calls.
#[allow(clippy::too_many_arguments)]
pub trait Surface {
    /// Fill the whole field with `color`.
    fn clear(&mut self, color: &str);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    /// Stroke a straight line; an empty `dash` means solid.
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: &[f64], color: &str);
    /// Fill a rectangle given in a frame translated to `origin` and rotated by `angle`.
    fn rotated_rect(&mut self, origin: (f64, f64), angle: f64, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { color: String },
    Rect { x: f64, y: f64, w: f64, h: f64, color: String },
    Circle { x: f64, y: f64, radius: f64, color: String },
    Line { from: (f64, f64), to: (f64, f64), width: f64, dash: Vec<f64>, color: String },
    RotatedRect { origin: (f64, f64), angle: f64, x: f64, y: f64, w: f64, h: f64, color: String },
    Text { text: String, x: f64, y: f64, font: String, align: TextAlign, color: String },
}

/// Records draw calls instead of painting them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn circles_of(&self, color: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: cc, .. } if cc == color))
            .count()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: &str) {
        self.commands.push(DrawCommand::Clear { color: color.to_string() });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color: color.to_string() });
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color: color.to_string() });
    }

    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: &[f64], color: &str) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            dash: dash.to_vec(),
            color: color.to_string(),
        });
    }

    fn rotated_rect(&mut self, origin: (f64, f64), angle: f64, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.commands.push(DrawCommand::RotatedRect {
            origin,
            angle,
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            align,
            color: color.to_string(),
        });
    }
}

pub const PLAYER_RADIUS: f64 = 20.0;
pub const BULLET_RADIUS: f64 = 5.0;
pub const BULLET_COLOR: &str = "#fcd34d";
pub const HUD_COLOR: &str = "#ffffff";
pub const WATERMARK: &str = "PLGpt";
pub const MOVE_HINT: &str = "WASD - движение";
pub const FIRE_HINT: &str = "Клик - стрельба";

pub fn score_label(score: u32) -> String {
    format!("Счёт: {}", score)
}

/// Repaint the field. Reads `state` only; identical inputs give identical calls.
pub fn render(surface: &mut dyn Surface, state: &GameState, game_type: GameType, score: u32) {
    let profile = game_type.profile();
    surface.clear(profile.clear_color);
    (profile.background)(surface);

    surface.circle(state.player_x, state.player_y, PLAYER_RADIUS, profile.player_color);
    (profile.player_decor)(surface, state);

    if profile.armed {
        for b in &state.bullets {
            surface.circle(b.x, b.y, BULLET_RADIUS, BULLET_COLOR);
        }
    }
    if profile.seeds_items {
        for it in &state.items {
            surface.rect(it.x - 4.0, it.y - 4.0, 8.0, 8.0, item_color(it.kind));
        }
    }
    for e in &state.enemies {
        (profile.enemy)(surface, e);
    }

    surface.text(&score_label(score), 20.0, 30.0, "20px Arial", TextAlign::Left, HUD_COLOR);
    surface.text(MOVE_HINT, 20.0, 580.0, "14px Arial", TextAlign::Left, HUD_COLOR);
    if profile.armed {
        surface.text(FIRE_HINT, 200.0, 580.0, "14px Arial", TextAlign::Left, HUD_COLOR);
    }
    surface.text(
        WATERMARK,
        780.0,
        580.0,
        "16px Arial",
        TextAlign::Right,
        "rgba(255, 255, 255, 0.5)",
    );
}

fn item_color(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Ingredient => "rgba(34, 197, 94, 0.45)",
        ItemKind::Tool => "rgba(100, 116, 139, 0.45)",
        ItemKind::Power => "rgba(234, 179, 8, 0.45)",
    }
}

// ---------------- Genre shapes -----------------

pub(crate) fn bare_background(_s: &mut dyn Surface) {}

pub(crate) fn platform_ledges(s: &mut dyn Surface) {
    let c = "#4ade80";
    s.rect(0.0, 500.0, 300.0, 20.0, c);
    s.rect(400.0, 400.0, 300.0, 20.0, c);
    s.rect(100.0, 300.0, 300.0, 20.0, c);
    s.rect(500.0, 200.0, 300.0, 20.0, c);
}

pub(crate) fn race_track(s: &mut dyn Surface) {
    s.rect(200.0, 0.0, 400.0, FIELD_HEIGHT, "#e5e5e5");
    s.dashed_line(
        (FIELD_WIDTH / 2.0, 0.0),
        (FIELD_WIDTH / 2.0, FIELD_HEIGHT),
        5.0,
        &[30.0, 30.0],
        "#ffffff",
    );
    // verges
    s.rect(0.0, 0.0, 200.0, FIELD_HEIGHT, "#16a34a");
    s.rect(600.0, 0.0, 200.0, FIELD_HEIGHT, "#16a34a");
}

pub(crate) fn kitchen(s: &mut dyn Surface) {
    s.rect(100.0, 400.0, 600.0, 200.0, "#d4d4d8"); // counter
    s.rect(200.0, 450.0, 150.0, 100.0, "#404040"); // stove
    s.rect(450.0, 450.0, 200.0, 100.0, "#a16207"); // cutting board
}

pub(crate) fn no_decor(_s: &mut dyn Surface, _state: &GameState) {}

/// Barrel points from the player toward the pointer.
pub(crate) fn gun_barrel(s: &mut dyn Surface, state: &GameState) {
    let angle = (state.input.mouse_y - state.player_y).atan2(state.input.mouse_x - state.player_x);
    s.rotated_rect((state.player_x, state.player_y), angle, 15.0, -3.0, 20.0, 6.0, "#6b7280");
}

pub(crate) fn car_stripes(s: &mut dyn Surface, state: &GameState) {
    s.rect(state.player_x - 15.0, state.player_y - 10.0, 30.0, 5.0, "#000000");
    s.rect(state.player_x - 15.0, state.player_y + 5.0, 30.0, 5.0, "#000000");
}

pub(crate) fn hostile_orb(s: &mut dyn Surface, e: &Enemy) {
    s.circle(e.x, e.y, 15.0, "#ef4444");
}

pub(crate) fn walker_orb(s: &mut dyn Surface, e: &Enemy) {
    s.circle(e.x, e.y, 15.0, "#f97316");
}

pub(crate) fn rival_car(s: &mut dyn Surface, e: &Enemy) {
    s.rect(e.x - 15.0, e.y - 20.0, 30.0, 40.0, "#ef4444");
    s.rect(e.x - 15.0, e.y - 15.0, 30.0, 5.0, "#000000");
    s.rect(e.x - 15.0, e.y + 10.0, 30.0, 5.0, "#000000");
}

pub(crate) fn collectible(s: &mut dyn Surface, e: &Enemy) {
    s.circle(e.x, e.y, 12.0, "#8b5cf6");
    s.text("+", e.x, e.y + 3.0, "10px Arial", TextAlign::Center, "#ffffff");
}

