pub mod chat;
pub mod input;
pub mod session;

pub use chat::{ChatAction, ChatLog, Message, Role};
pub use input::{is_game_key, is_text_entry_tag, normalize_key, to_field, typed_into_text_field};
pub use session::{Session, SessionAction};
