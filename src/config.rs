// Gameplay tuning, overridable from the host page.
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const TUNING_ELEMENT_ID: &str = "game-tuning";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels the player moves per tick per held direction.
    pub player_speed: f64,
    /// Minimum time between two shots.
    pub fire_cooldown_ms: f64,
    /// Bullet speed in pixels per tick.
    pub bullet_speed: f64,
    /// Bullet to enemy distance that counts as a hit.
    pub hit_radius: f64,
    /// Player to enemy distance that counts as contact.
    pub contact_radius: f64,
    /// Enemies (and items, for collecting genres) seeded on reset.
    pub enemy_count: usize,
    /// Collectibles are topped up when fewer than this remain.
    pub min_collectibles: usize,
    pub kill_score: u32,
    pub collect_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            fire_cooldown_ms: 300.0,
            bullet_speed: 8.0,
            hit_radius: 25.0,
            contact_radius: 40.0,
            enemy_count: 5,
            min_collectibles: 3,
            kill_score: 10,
            collect_score: 5,
        }
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read overrides from the page, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(TUNING_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(t) => {
                log::info!("loaded tuning overrides: {:?}", t);
                t
            }
            Err(e) => {
                log::warn!("ignoring malformed #{}: {}", TUNING_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "bullet_speed": 12.5, "enemy_count": 8 }"#).unwrap();
        assert_eq!(t.bullet_speed, 12.5);
        assert_eq!(t.enemy_count, 8);
        assert_eq!(t.fire_cooldown_ms, 300.0);
        assert_eq!(t.contact_radius, 40.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Tuning::from_json(r#"{ "enemy_count": "many" }"#).is_err());
    }
}
