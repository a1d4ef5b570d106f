// Mapping of raw DOM input into the logical game input.
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::engine::{DOWN_KEYS, FIRE_KEY, LEFT_KEYS, RIGHT_KEYS, UP_KEYS};
use crate::model::{FIELD_HEIGHT, FIELD_WIDTH, InputState};

/// Lower-case single-character keys so Shift or CapsLock do not break WASD.
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Keys whose default browser action (scrolling) is suppressed while playing.
pub fn is_game_key(key: &str) -> bool {
    key == FIRE_KEY
        || [UP_KEYS, DOWN_KEYS, LEFT_KEYS, RIGHT_KEYS]
            .iter()
            .any(|keys| keys[1] == key)
}

/// Elements that consume typed keys themselves.
pub fn is_text_entry_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("textarea") || tag.eq_ignore_ascii_case("input")
}

/// True when the key event was aimed at a text field, not the game.
pub fn typed_into_text_field(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| is_text_entry_tag(&el.tag_name()))
}

/// Convert a client-space point to the 800×600 field, given the canvas box.
pub fn to_field(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    let sx = if width > 0.0 { FIELD_WIDTH / width } else { 1.0 };
    let sy = if height > 0.0 { FIELD_HEIGHT / height } else { 1.0 };
    ((client_x - left) * sx, (client_y - top) * sy)
}

impl InputState {
    pub fn press(&mut self, key: &str) {
        self.keys.insert(normalize_key(key));
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(&normalize_key(key));
    }

    /// Forget held keys and buttons; their release events may have been missed.
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.mouse_down = false;
    }

    pub fn point(&mut self, x: f64, y: f64) {
        self.mouse_x = x;
        self.mouse_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_fold_case_named_keys_do_not() {
        assert_eq!(normalize_key("W"), "w");
        assert_eq!(normalize_key("ArrowUp"), "ArrowUp");
        assert_eq!(normalize_key(" "), " ");
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut input = InputState::default();
        input.press("D");
        assert!(input.is_held("d"));
        input.release("d");
        assert!(!input.is_held("d"));
    }

    #[test]
    fn release_all_keeps_pointer_position() {
        let mut input = InputState::default();
        input.press("w");
        input.mouse_down = true;
        input.point(10.0, 20.0);
        input.release_all();
        assert!(input.keys.is_empty());
        assert!(!input.mouse_down);
        assert_eq!((input.mouse_x, input.mouse_y), (10.0, 20.0));
    }

    #[test]
    fn game_keys() {
        assert!(is_game_key(" "));
        assert!(is_game_key("ArrowLeft"));
        assert!(!is_game_key("w"));
        assert!(!is_game_key("Enter"));
    }

    #[test]
    fn text_fields_keep_their_keys() {
        // DOM reports upper-case tag names for HTML elements
        assert!(is_text_entry_tag("TEXTAREA"));
        assert!(is_text_entry_tag("INPUT"));
        assert!(is_text_entry_tag("textarea"));
        assert!(!is_text_entry_tag("CANVAS"));
        assert!(!is_text_entry_tag("BODY"));
        assert!(!is_text_entry_tag("BUTTON"));
    }

    #[test]
    fn scaled_canvas_maps_to_field() {
        // canvas drawn at half size, offset by (10, 20)
        let (x, y) = to_field(210.0, 170.0, 10.0, 20.0, 400.0, 300.0);
        assert_eq!((x, y), (400.0, 300.0));
    }

    #[test]
    fn zero_sized_box_does_not_divide_by_zero() {
        let (x, y) = to_field(5.0, 6.0, 0.0, 0.0, 0.0, 0.0);
        assert!(x.is_finite() && y.is_finite());
    }
}
