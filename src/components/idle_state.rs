use yew::prelude::*;

#[function_component(IdleState)]
pub fn idle_state() -> Html {
    html! {
        <div class="card" style="height:100%; display:flex; align-items:center; justify-content:center; text-align:center; padding:40px 16px;">
            <div style="opacity:0.7;">
                <div style="font-size:56px; margin-bottom:12px;">{"🎮"}</div>
                <p style="margin:0;">{"Опиши 2D-игру, и я создам её для тебя!"}</p>
                <p style="margin:8px 0 0 0; font-size:12px;">{"Наша нейросеть создаёт только 2D-игры"}</p>
            </div>
        </div>
    }
}
