use wasm_bindgen::JsCast;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use super::chat_message::ChatMessage;
use crate::state::Message;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatPanelProps {
    pub messages: Vec<Message>,
    pub on_send: Callback<String>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let input = use_state(String::new);

    let send = {
        let input = input.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |()| {
            if input.trim().is_empty() {
                return;
            }
            on_send.emit((*input).clone());
            input.set(String::new());
        })
    };
    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(el) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                input.set(el.value());
            }
        })
    };
    // Enter sends, Shift+Enter inserts a newline
    let onkeydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };
    let onclick = {
        let send = send.clone();
        Callback::from(move |_| send.emit(()))
    };

    html! {
        <div class="card" style="flex:1; display:flex; flex-direction:column; padding:16px; overflow:hidden;">
            <div style="flex:1; overflow-y:auto; display:flex; flex-direction:column; gap:14px; margin-bottom:14px;">
                { for props.messages.iter().map(|m| html! { <ChatMessage message={m.clone()} /> }) }
            </div>
            <div style="display:flex; gap:8px;">
                <textarea
                    placeholder="Опиши 2D-игру, которую хочешь создать..."
                    value={(*input).clone()}
                    {oninput}
                    {onkeydown}
                    style="flex:1; resize:none; min-height:60px; padding:8px; border-radius:6px; border:1px solid var(--border); background:transparent; color:inherit;"
                ></textarea>
                <button class="btn-primary" style="align-self:flex-end;" {onclick}>{"➤ Отправить"}</button>
            </div>
        </div>
    }
}
