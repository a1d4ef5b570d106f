use crate::model::GameType;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartPromptProps {
    pub game_type: GameType,
    pub title: String,
    pub on_play: Callback<()>,
}

/// Shown in the game window while the round is paused or not yet started.
#[function_component(StartPrompt)]
pub fn start_prompt(props: &StartPromptProps) -> Html {
    let profile = props.game_type.profile();
    let play_cb = {
        let cb = props.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title = if props.title.is_empty() { "Игра готова!".to_string() } else { props.title.clone() };
    let mouse_hint = if profile.armed { " и мышь для стрельбы" } else { "" };
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; text-align:center; padding:24px; min-height:360px; gap:10px;">
            <div style="font-size:56px;">{ profile.emoji }</div>
            <p style="margin:0; font-size:22px; font-weight:700;">{ title }</p>
            <p style="margin:0; max-width:420px; opacity:0.7;">
                { format!("Используйте клавиши WASD для передвижения{}. Нажмите \"Играть\", чтобы начать!", mouse_hint) }
            </p>
            <button class="btn-primary" onclick={play_cb}>{"▶ Играть сейчас"}</button>
        </div>
    }
}
