use std::rc::Rc;
use yew::Reducible;

pub const GREETING: &str = "Привет! Я PLGpt, нейросеть для создания 2D игр. Опиши игру, которую хочешь создать, и я сделаю её для тебя! Например: 'Создай шутер с астероидами' или 'Сделай гоночную игру с препятствиями'.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Conversation plus the flag that activates the game window.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<Message>,
    /// Set by the first assistant reply; never cleared.
    pub game_active: bool,
    /// Request the latest reply answered; this is what the game is built from.
    pub description: String,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_string(),
            }],
            game_active: false,
            description: String::new(),
        }
    }
}

impl ChatLog {
    fn last_request(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum ChatAction {
    UserSaid(String),
    AssistantSaid(String),
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ChatAction::UserSaid(text) => {
                if text.trim().is_empty() {
                    return self;
                }
                new.messages.push(Message {
                    role: Role::User,
                    content: text,
                });
            }
            ChatAction::AssistantSaid(text) => {
                if let Some(req) = new.last_request().map(str::to_string) {
                    new.description = req;
                }
                new.messages.push(Message {
                    role: Role::Assistant,
                    content: text,
                });
                new.game_active = true;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_ignored() {
        let log = Rc::new(ChatLog::default());
        let after = log.clone().reduce(ChatAction::UserSaid("   ".into()));
        assert!(Rc::ptr_eq(&log, &after));
    }

    #[test]
    fn reply_activates_game_with_answered_request() {
        let log = Rc::new(ChatLog::default())
            .reduce(ChatAction::UserSaid("первый".into()))
            .reduce(ChatAction::AssistantSaid("ok".into()));
        assert!(log.game_active);
        assert_eq!(log.description, "первый");

        // unanswered request does not change the game yet
        let log = log.reduce(ChatAction::UserSaid("второй".into()));
        assert_eq!(log.description, "первый");
        let log = log.reduce(ChatAction::AssistantSaid("ok".into()));
        assert_eq!(log.description, "второй");
        assert_eq!(log.messages.len(), 5);
    }

    #[test]
    fn starts_with_greeting_and_inactive() {
        let log = ChatLog::default();
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].role, Role::Assistant);
        assert!(!log.game_active);
        assert_eq!(log.description, "");
    }
}
