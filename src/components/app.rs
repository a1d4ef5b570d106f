use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{chat_panel::ChatPanel, game_window::GameWindow, settings_modal::SettingsModal};
use crate::classify::reply_for;
use crate::state::{ChatAction, ChatLog};

/// Simulated "thinking" time before the assistant answers.
const REPLY_DELAY_MS: i32 = 1500;

fn set_dark_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let res = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
    if let Err(e) = res {
        log::warn!("could not switch theme: {:?}", e);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let chat = use_reducer(ChatLog::default);
    let dark = use_state(|| false);
    let settings_open = use_state(|| false);

    // Effect: mirror theme onto <html>
    {
        let flag = *dark;
        use_effect_with(flag, move |_| {
            set_dark_class(flag);
            || ()
        });
    }

    let on_send: Callback<String> = {
        let chat = chat.clone();
        Callback::from(move |text: String| {
            chat.dispatch(ChatAction::UserSaid(text.clone()));
            let reply = reply_for(&text);
            let chat = chat.clone();
            let answer = Closure::once_into_js(move || chat.dispatch(ChatAction::AssistantSaid(reply)));
            let scheduled = web_sys::window().map(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    answer.unchecked_ref(),
                    REPLY_DELAY_MS,
                )
            });
            if !matches!(scheduled, Some(Ok(_))) {
                log::error!("could not schedule assistant reply");
            }
        })
    };
    let toggle_theme_cb: Callback<()> = {
        let dark = dark.clone();
        Callback::from(move |()| dark.set(!*dark))
    };
    let open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| settings_open.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let settings_open = settings_open.clone();
        Callback::from(move |()| settings_open.set(false))
    };
    let theme_btn = {
        let cb = toggle_theme_cb.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let theme_label = if *dark { "☀" } else { "☾" };
    let theme_title = if *dark { "Переключить на светлую тему" } else { "Переключить на тёмную тему" };

    html! {<div style="min-height:100vh; display:flex; flex-direction:column;">
        <header id="top-bar" style="border-bottom:1px solid var(--border); padding:16px 24px; display:flex; justify-content:space-between; align-items:center;">
            <div style="display:flex; align-items:center; gap:12px;">
                <h1 style="margin:0; font-size:24px; font-weight:700; background:linear-gradient(90deg, var(--primary), #a855f7); -webkit-background-clip:text; background-clip:text; color:transparent;">{"PLGpt"}</h1>
                <span style="font-size:13px; opacity:0.7;">{"Создавай 2D-игры с помощью ИИ"}</span>
            </div>
            <div style="display:flex; align-items:center; gap:12px;">
                <button class="btn-ghost" title={theme_title} aria-label={theme_title} onclick={theme_btn}>{ theme_label }</button>
                <button class="btn-outline" onclick={open_settings}>{"Настройки"}</button>
            </div>
        </header>
        <main style="flex:1; display:flex; flex-wrap:wrap; gap:24px; padding:24px;">
            <div style="flex:1 1 380px; display:flex; flex-direction:column;">
                <ChatPanel messages={chat.messages.clone()} on_send={on_send} />
            </div>
            <div style="flex:1 1 380px;">
                <GameWindow active={chat.game_active} description={chat.description.clone()} />
            </div>
        </main>
        <SettingsModal show={*settings_open} on_close={close_settings_cb} dark={*dark} on_toggle_theme={toggle_theme_cb} />
    </div>}
}
