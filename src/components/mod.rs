pub mod app;
pub mod chat_message;
pub mod chat_panel;
pub mod game_controls;
pub mod game_window;
pub mod idle_state;
pub mod settings_modal;
pub mod start_prompt;

pub use app::App;
