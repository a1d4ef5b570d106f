//! Core data models for the arcade demo.
//! Everything here is plain data; behavior lives in `engine` and `render`.

use serde::Serialize;
use std::collections::HashSet;

/// Logical canvas width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;
/// Logical canvas height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;
/// Distance the player keeps from every canvas edge.
pub const PLAYER_MARGIN: f64 = 30.0;
/// Off-screen x coordinates enemies re-enter from.
pub const EDGE_SPAWN_LEFT: f64 = -50.0;
pub const EDGE_SPAWN_RIGHT: f64 = 850.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Shooter,
    Puzzle,
    Platformer,
    Racing,
    Cooking,
}

impl GameType {
    pub const ALL: [GameType; 5] = [
        GameType::Shooter,
        GameType::Puzzle,
        GameType::Platformer,
        GameType::Racing,
        GameType::Cooking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Shooter => "shooter",
            GameType::Puzzle => "puzzle",
            GameType::Platformer => "platformer",
            GameType::Racing => "racing",
            GameType::Cooking => "cooking",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    /// Velocity in pixels per tick.
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Ingredient,
    Tool,
    Power,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Ingredient, ItemKind::Tool, ItemKind::Power];
}

/// Static pickup decoration seeded for the collecting genres.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub x: f64,
    pub y: f64,
    pub kind: ItemKind,
}

/// Held keys and pointer state, written only by the input listeners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    /// Names of keys currently held, as reported by `KeyboardEvent.key`.
    pub keys: HashSet<String>,
    /// Pointer position in logical canvas space.
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub mouse_down: bool,
}

impl InputState {
    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player_x: f64,
    pub player_y: f64,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub items: Vec<Item>,
    pub input: InputState,
    /// Timestamp of the last shot in milliseconds; `None` until the first shot.
    pub last_shot_ms: Option<f64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_x: FIELD_WIDTH / 2.0,
            player_y: FIELD_HEIGHT / 2.0,
            enemies: Vec::new(),
            bullets: Vec::new(),
            items: Vec::new(),
            input: InputState::default(),
            last_shot_ms: None,
        }
    }
}

/// True when the point lies inside the visible field, edges included.
pub fn in_field(x: f64, y: f64) -> bool {
    (0.0..=FIELD_WIDTH).contains(&x) && (0.0..=FIELD_HEIGHT).contains(&y)
}

pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}
