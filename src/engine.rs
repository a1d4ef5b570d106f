//! Per-tick game simulation.
//!
//! [`update`] advances a [`GameState`] by one frame. Step sizes are fixed per
//! tick, so game speed follows the display frame rate. Bullets and enemies are
//! rebuilt into fresh vectors every tick rather than spliced in place.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Tuning;
use crate::genre::{Contact, Steering};
use crate::model::{
    Bullet, EDGE_SPAWN_LEFT, EDGE_SPAWN_RIGHT, Enemy, FIELD_HEIGHT, FIELD_WIDTH, GameState,
    GameType, Item, ItemKind, PLAYER_MARGIN, distance, in_field,
};
use crate::render::{self, Surface};

pub const UP_KEYS: [&str; 2] = ["w", "ArrowUp"];
pub const DOWN_KEYS: [&str; 2] = ["s", "ArrowDown"];
pub const LEFT_KEYS: [&str; 2] = ["a", "ArrowLeft"];
pub const RIGHT_KEYS: [&str; 2] = ["d", "ArrowRight"];
pub const FIRE_KEY: &str = " ";

fn random_velocity<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> (f64, f64) {
    (
        (rng.gen_range(0.0..1.0) - 0.5) * spread,
        (rng.gen_range(0.0..1.0) - 0.5) * spread,
    )
}

/// Enemy just outside the left or right edge at a random height.
pub fn edge_spawn<R: Rng + ?Sized>(rng: &mut R) -> Enemy {
    let x = if rng.gen_bool(0.5) { EDGE_SPAWN_LEFT } else { EDGE_SPAWN_RIGHT };
    let y = rng.gen_range(0.0..FIELD_HEIGHT);
    let (dx, dy) = random_velocity(rng, 4.0);
    Enemy { x, y, dx, dy }
}

fn interior_spawn<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> Enemy {
    let x = rng.gen_range(0.0..FIELD_WIDTH);
    let y = rng.gen_range(0.0..FIELD_HEIGHT);
    let (dx, dy) = random_velocity(rng, spread);
    Enemy { x, y, dx, dy }
}

/// Reinitialise `state` for a new round of `game_type`.
pub fn reset<R: Rng + ?Sized>(state: &mut GameState, game_type: GameType, tuning: &Tuning, rng: &mut R) {
    *state = GameState::default();
    let seeds_items = game_type.profile().seeds_items;
    for _ in 0..tuning.enemy_count {
        state.enemies.push(interior_spawn(rng, 4.0));
        if seeds_items {
            let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
            state.items.push(Item {
                x: rng.gen_range(100.0..700.0),
                y: rng.gen_range(100.0..500.0),
                kind,
            });
        }
    }
}

fn move_player(state: &mut GameState, speed: f64) {
    let input = &state.input;
    let (mut x, mut y) = (state.player_x, state.player_y);
    if input.any_held(&UP_KEYS) {
        y = (y - speed).max(PLAYER_MARGIN);
    }
    if input.any_held(&DOWN_KEYS) {
        y = (y + speed).min(FIELD_HEIGHT - PLAYER_MARGIN);
    }
    if input.any_held(&LEFT_KEYS) {
        x = (x - speed).max(PLAYER_MARGIN);
    }
    if input.any_held(&RIGHT_KEYS) {
        x = (x + speed).min(FIELD_WIDTH - PLAYER_MARGIN);
    }
    state.player_x = x;
    state.player_y = y;
}

fn try_fire(state: &mut GameState, tuning: &Tuning, now_ms: f64) {
    if !(state.input.mouse_down || state.input.is_held(FIRE_KEY)) {
        return;
    }
    let ready = match state.last_shot_ms {
        Some(t) => now_ms - t >= tuning.fire_cooldown_ms,
        None => true,
    };
    if !ready {
        return;
    }
    let angle = (state.input.mouse_y - state.player_y).atan2(state.input.mouse_x - state.player_x);
    state.bullets.push(Bullet {
        x: state.player_x,
        y: state.player_y,
        dx: angle.cos() * tuning.bullet_speed,
        dy: angle.sin() * tuning.bullet_speed,
    });
    state.last_shot_ms = Some(now_ms);
}

/// Advance bullets, drop the ones that left the field, and resolve at most one
/// hit per bullet. Each kill respawns an enemy at an edge.
fn advance_bullets<R, F>(state: &mut GameState, tuning: &Tuning, rng: &mut R, on_score: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(u32),
{
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());
    for mut b in bullets {
        b.x += b.dx;
        b.y += b.dy;
        if !in_field(b.x, b.y) {
            continue;
        }
        let hit = state
            .enemies
            .iter()
            .position(|e| distance(b.x, b.y, e.x, e.y) < tuning.hit_radius);
        match hit {
            Some(j) => {
                state.enemies.remove(j);
                on_score(tuning.kill_score);
                state.enemies.push(edge_spawn(rng));
                log::debug!("enemy destroyed at ({:.0},{:.0})", b.x, b.y);
            }
            None => survivors.push(b),
        }
    }
    state.bullets = survivors;
}

fn steer<R: Rng + ?Sized>(e: &mut Enemy, steering: Steering, target: (f64, f64), rng: &mut R) {
    match steering {
        Steering::Chase => {
            let angle = (target.1 - e.y).atan2(target.0 - e.x);
            let speed = 1.0 + rng.gen_range(0.0..1.0);
            e.dx = angle.cos() * speed;
            e.dy = angle.sin() * speed;
        }
        Steering::Bounce => {
            if e.x < 0.0 || e.x > FIELD_WIDTH {
                e.dx = -e.dx;
            }
            if e.y < 0.0 || e.y > FIELD_HEIGHT {
                e.dy = -e.dy;
            }
        }
    }
}

fn advance_enemies<R, F>(
    state: &mut GameState,
    game_type: GameType,
    tuning: &Tuning,
    rng: &mut R,
    on_score: &mut F,
) where
    R: Rng + ?Sized,
    F: FnMut(u32),
{
    let profile = game_type.profile();
    let player = (state.player_x, state.player_y);
    let enemies = std::mem::take(&mut state.enemies);
    let total = enemies.len();
    let mut survivors = Vec::with_capacity(total);
    for (i, mut e) in enemies.into_iter().enumerate() {
        steer(&mut e, profile.steering, player, rng);
        e.x += e.dx;
        e.y += e.dy;
        if distance(player.0, player.1, e.x, e.y) >= tuning.contact_radius {
            survivors.push(e);
            continue;
        }
        match profile.contact {
            Contact::Graze => {
                let spawn = edge_spawn(rng);
                e.x = spawn.x;
                e.y = spawn.y;
                survivors.push(e);
            }
            Contact::Collect => {
                on_score(tuning.collect_score);
                log::debug!("collected item at ({:.0},{:.0})", e.x, e.y);
                // kept so far plus the ones not yet visited
                let remaining = survivors.len() + (total - i - 1);
                if remaining < tuning.min_collectibles {
                    survivors.push(interior_spawn(rng, 3.0));
                }
            }
            Contact::Pass => survivors.push(e),
        }
    }
    state.enemies = survivors;
}

/// Advance `state` by one tick. Score increments are reported through `on_score`.
pub fn update<R, F>(
    state: &mut GameState,
    game_type: GameType,
    tuning: &Tuning,
    now_ms: f64,
    rng: &mut R,
    mut on_score: F,
) where
    R: Rng + ?Sized,
    F: FnMut(u32),
{
    move_player(state, tuning.player_speed);
    if game_type.profile().armed {
        try_fire(state, tuning, now_ms);
    }
    advance_bullets(state, tuning, rng, &mut on_score);
    advance_enemies(state, game_type, tuning, rng, &mut on_score);
}

/// A running round: the state the loop owns plus everything needed to step and
/// paint it.
pub struct Game {
    pub state: GameState,
    pub game_type: GameType,
    pub score: u32,
    pub tuning: Tuning,
    rng: StdRng,
}

impl Game {
    pub fn new(game_type: GameType, tuning: Tuning, seed: u64) -> Self {
        let mut game = Self {
            state: GameState::default(),
            game_type,
            score: 0,
            tuning,
            rng: StdRng::seed_from_u64(seed),
        };
        game.restart(game_type);
        game
    }

    /// Zero the score and reseed the field for `game_type`.
    pub fn restart(&mut self, game_type: GameType) {
        self.game_type = game_type;
        self.score = 0;
        reset(&mut self.state, game_type, &self.tuning, &mut self.rng);
        log::info!(
            "round reset: {} with {} enemies",
            game_type.as_str(),
            self.state.enemies.len()
        );
    }

    /// Step once; returns the points gained this tick.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        let mut gained = 0u32;
        update(
            &mut self.state,
            self.game_type,
            &self.tuning,
            now_ms,
            &mut self.rng,
            |pts| gained = gained.saturating_add(pts),
        );
        self.score = self.score.saturating_add(gained);
        gained
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        render::render(surface, &self.state, self.game_type, self.score);
    }

    /// One loop iteration: update, then render when a surface is available.
    pub fn frame(&mut self, now_ms: f64, surface: Option<&mut dyn Surface>) -> u32 {
        let gained = self.tick(now_ms);
        if let Some(s) = surface {
            self.draw(s);
        }
        gained
    }
}
