use std::rc::Rc;
use yew::Reducible;

use crate::classify::classify;
use crate::model::GameType;

/// What the game window shows and whether the frame loop should run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// False until the chat has produced a description.
    pub active: bool,
    pub description: String,
    pub game_type: GameType,
    pub title: String,
    pub playing: bool,
    /// Bumped on every reset so effects keyed on it reinitialise the round.
    pub run_id: u32,
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    /// Upstream `(active, description)` pair changed.
    Describe { active: bool, description: String },
    Play,
    TogglePlay,
    Reset,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            Describe { active, description } => {
                if active == new.active && description == new.description {
                    return self;
                }
                let c = classify(&description);
                log::info!("new game: {}", c.to_json());
                new.active = active;
                new.description = description;
                new.game_type = c.game_type;
                new.title = c.game_title;
                new.playing = false;
                new.run_id = new.run_id.wrapping_add(1);
            }
            Play => {
                if !new.active || new.playing {
                    return self;
                }
                new.playing = true;
            }
            TogglePlay => {
                if !new.active {
                    return self;
                }
                new.playing = !new.playing;
            }
            Reset => {
                new.playing = false;
                new.run_id = new.run_id.wrapping_add(1);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(s: Rc<Session>, text: &str) -> Rc<Session> {
        s.reduce(SessionAction::Describe {
            active: true,
            description: text.to_string(),
        })
    }

    #[test]
    fn starts_idle() {
        let s = Rc::new(Session::default());
        assert!(!s.active);
        let s = s.reduce(SessionAction::Play);
        assert!(!s.playing, "nothing to play before a description arrives");
    }

    #[test]
    fn describe_classifies_and_bumps_run() {
        let s = describe(Rc::new(Session::default()), "Сделай гонки на машинах");
        assert!(s.active);
        assert_eq!(s.game_type, GameType::Racing);
        assert_eq!(s.title, "Сделай гонки на");
        assert_eq!(s.run_id, 1);
        assert!(!s.playing);
    }

    #[test]
    fn new_description_stops_play_and_resets() {
        let s = describe(Rc::new(Session::default()), "шутер");
        let s = s.reduce(SessionAction::Play);
        assert!(s.playing);
        let s = describe(s, "кухня");
        assert!(!s.playing);
        assert_eq!(s.game_type, GameType::Cooking);
        assert_eq!(s.run_id, 2);
    }

    #[test]
    fn same_description_is_a_no_op() {
        let s = describe(Rc::new(Session::default()), "шутер").reduce(SessionAction::Play);
        let again = describe(s.clone(), "шутер");
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn toggle_and_reset() {
        let s = describe(Rc::new(Session::default()), "puzzle");
        let s = s.reduce(SessionAction::TogglePlay);
        assert!(s.playing);
        let s = s.reduce(SessionAction::TogglePlay);
        assert!(!s.playing);
        let s = s.reduce(SessionAction::Play).reduce(SessionAction::Reset);
        assert!(!s.playing);
        assert_eq!(s.run_id, 2);
        assert_eq!(s.game_type, GameType::Puzzle);
    }
}
