use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameControlsProps {
    pub title: String,
    pub playing: bool,
    pub on_toggle_play: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(GameControls)]
pub fn game_controls(props: &GameControlsProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let play_cb = {
        let cb = props.on_toggle_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title = if props.title.is_empty() { "Новая игра".to_string() } else { props.title.clone() };
    let play_label = if props.playing { "⏸ Пауза" } else { "▶ Играть" };
    html! {<div style="display:flex; justify-content:space-between; align-items:center; gap:8px; padding:10px 14px; border-bottom:1px solid var(--border);">
        <span style="font-weight:600; font-size:16px;">{ title }</span>
        <div style="display:flex; gap:8px;">
            <button class="btn-outline" onclick={reset_cb}>{"⟳ Сбросить"}</button>
            <button class="btn-primary" onclick={play_cb}>{ play_label }</button>
        </div>
    </div>}
}
