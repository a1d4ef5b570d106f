//! Keyword genre detection and title derivation for game descriptions.

use serde::Serialize;

use crate::model::GameType;
use crate::util::truncate_chars;

/// Ordered first-match-wins table of lower-case substrings per genre.
const KEYWORDS: [(GameType, &[&str]); 5] = [
    (GameType::Shooter, &["стрел", "шутер", "shooter", "стрельб"]),
    (GameType::Puzzle, &["голово", "puzzle", "загад"]),
    (GameType::Platformer, &["платформер", "платформ", "jump", "прыж"]),
    (GameType::Racing, &["гонк", "racing", "машин", "car"]),
    (GameType::Cooking, &["готов", "cook", "кух"]),
];

const TITLE_WORDS: usize = 3;
const TITLE_MAX_CHARS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub game_type: GameType,
    pub game_title: String,
}

/// Genre named by the description, if any keyword matches.
pub fn detect(description: &str) -> Option<GameType> {
    let desc = description.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| desc.contains(w)))
        .map(|(gt, _)| *gt)
}

/// First three words of the description, capped at 20 characters.
pub fn title_of(description: &str) -> String {
    let title = description
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&title, TITLE_MAX_CHARS)
}

impl Classification {
    /// Compact JSON form, as written to the log.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

pub fn classify(description: &str) -> Classification {
    Classification {
        game_type: detect(description).unwrap_or_default(),
        game_title: title_of(description),
    }
}

/// Requests for 3D games get a refusal instead of a game.
pub fn wants_3d(request: &str) -> bool {
    let r = request.to_lowercase();
    r.contains("3d") || r.contains("3 d")
}

/// Simulated assistant reply to a chat request.
pub fn reply_for(request: &str) -> String {
    if wants_3d(request) {
        return "Извини, но на данный момент я могу создавать только 2D-игры. Давай попробуем создать 2D-версию этой игры?".to_string();
    }
    let detected = detect(request);
    let noun = detected.map(|gt| gt.profile().noun).unwrap_or("новую");
    let mouse_hint = match detected {
        Some(gt) if gt.profile().armed => " и мышь для стрельбы",
        _ => "",
    };
    format!(
        "Отлично! Я создал для тебя {} игру \"{}\". Можешь начать играть прямо сейчас, используя клавиши WASD для управления{}.",
        noun, request, mouse_hint
    )
}
