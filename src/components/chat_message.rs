use crate::state::{Message, Role};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatMessageProps {
    pub message: Message,
}

#[function_component(ChatMessage)]
pub fn chat_message(props: &ChatMessageProps) -> Html {
    let is_user = props.message.role == Role::User;
    let (row_style, avatar, name) = if is_user {
        ("flex-direction:row-reverse; background:var(--muted);", "Вы", "Вы")
    } else {
        ("background:var(--accent-soft);", "AI", "PLGpt")
    };
    let text_align = if is_user { "text-align:right;" } else { "" };
    html! {
        <div style={format!("display:flex; align-items:flex-start; gap:12px; padding:12px; border-radius:8px; {}", row_style)}>
            <div style="width:32px; height:32px; border-radius:50%; background:var(--border); display:flex; align-items:center; justify-content:center; font-size:12px; flex-shrink:0;">{ avatar }</div>
            <div style={format!("flex:1; {}", text_align)}>
                <div style="font-size:13px; font-weight:600; margin-bottom:4px;">{ name }</div>
                <div style="font-size:14px; line-height:1.5; white-space:pre-wrap;">{ props.message.content.clone() }</div>
            </div>
        </div>
    }
}
