//! Per-genre behavior table.
//!
//! Every place where the five genres differ reads its answer from a [`Profile`]
//! instead of branching on the genre inline. Update code consults [`Steering`],
//! [`Contact`] and `armed`; render code calls the shape functions.

use crate::model::{Enemy, GameState, GameType};
use crate::render::{self, Surface};

/// How enemies pick their velocity each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steering {
    /// Re-aim at the player every tick with a random speed in [1, 2).
    Chase,
    /// Keep velocity, reflecting off the canvas edges.
    Bounce,
}

/// What happens when an enemy touches the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Enemy is thrown back to an edge spawn; no score change.
    Graze,
    /// Entity is picked up for points and the field is topped up.
    Collect,
    /// Nothing happens.
    Pass,
}

pub struct Profile {
    pub game_type: GameType,
    pub emoji: &'static str,
    /// Accusative genre noun used in chat replies.
    pub noun: &'static str,
    /// Whether the player can shoot (and bullets are drawn).
    pub armed: bool,
    pub steering: Steering,
    pub contact: Contact,
    /// Whether reset seeds the static item layer.
    pub seeds_items: bool,
    pub clear_color: &'static str,
    pub player_color: &'static str,
    pub background: fn(&mut dyn Surface),
    pub player_decor: fn(&mut dyn Surface, &GameState),
    pub enemy: fn(&mut dyn Surface, &Enemy),
}

static PROFILES: [Profile; 5] = [
    Profile {
        game_type: GameType::Shooter,
        emoji: "🎯",
        noun: "шутер",
        armed: true,
        steering: Steering::Chase,
        contact: Contact::Graze,
        seeds_items: false,
        clear_color: "#111111",
        player_color: "#60a5fa",
        background: render::bare_background,
        player_decor: render::gun_barrel,
        enemy: render::hostile_orb,
    },
    Profile {
        game_type: GameType::Puzzle,
        emoji: "🧩",
        noun: "головоломку",
        armed: false,
        steering: Steering::Bounce,
        contact: Contact::Collect,
        seeds_items: true,
        clear_color: "#f0f9ff",
        player_color: "#f59e0b",
        background: render::bare_background,
        player_decor: render::no_decor,
        enemy: render::collectible,
    },
    Profile {
        game_type: GameType::Platformer,
        emoji: "🏃",
        noun: "платформер",
        armed: false,
        steering: Steering::Chase,
        contact: Contact::Graze,
        seeds_items: false,
        clear_color: "#f0f9ff",
        player_color: "#f59e0b",
        background: render::platform_ledges,
        player_decor: render::no_decor,
        enemy: render::walker_orb,
    },
    Profile {
        game_type: GameType::Racing,
        emoji: "🏎️",
        noun: "гоночную",
        armed: false,
        steering: Steering::Bounce,
        contact: Contact::Pass,
        seeds_items: false,
        clear_color: "#f0f9ff",
        player_color: "#f59e0b",
        background: render::race_track,
        player_decor: render::car_stripes,
        enemy: render::rival_car,
    },
    Profile {
        game_type: GameType::Cooking,
        emoji: "🍳",
        noun: "кулинарную",
        armed: false,
        steering: Steering::Bounce,
        contact: Contact::Collect,
        seeds_items: true,
        clear_color: "#f0f9ff",
        player_color: "#f59e0b",
        background: render::kitchen,
        player_decor: render::no_decor,
        enemy: render::collectible,
    },
];

impl GameType {
    pub fn profile(self) -> &'static Profile {
        let p = match self {
            GameType::Shooter => &PROFILES[0],
            GameType::Puzzle => &PROFILES[1],
            GameType::Platformer => &PROFILES[2],
            GameType::Racing => &PROFILES[3],
            GameType::Cooking => &PROFILES[4],
        };
        debug_assert_eq!(p.game_type, self);
        p
    }
}
