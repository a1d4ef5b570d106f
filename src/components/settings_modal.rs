use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub dark: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let show_support = use_state(|| false);
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_theme_cb = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let support_cb = {
        let show_support = show_support.clone();
        Callback::from(move |_| show_support.set(!*show_support))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div class="card" style="padding:16px 20px; min-width:340px; max-width:425px; display:flex; flex-direction:column; gap:14px;">
            <div>
                <h3 style="margin:0; font-size:18px;">{"Настройки"}</h3>
                <div style="font-size:13px; opacity:0.7;">{"Настройте внешний вид и другие параметры приложения PLGpt."}</div>
            </div>
            <label style="display:flex; justify-content:space-between; align-items:center; gap:8px; cursor:pointer;">
                <span>
                    <div>{"Тема оформления"}</div>
                    <div style="font-size:12px; opacity:0.7;">{"Выберите светлую или тёмную тему"}</div>
                </span>
                <span>{"☀ "}<input type="checkbox" checked={props.dark} onclick={toggle_theme_cb} />{" ☾"}</span>
            </label>
            <div style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                <span>
                    <div>{"Поддержка"}</div>
                    <div style="font-size:12px; opacity:0.7;">{"Связаться с командой поддержки"}</div>
                </span>
                <button class="btn-outline" onclick={support_cb}>{"? Поддержка"}</button>
            </div>
            { if *show_support { html!{ <div style="font-size:12px; line-height:1.4; background:var(--muted); border:1px solid var(--border); padding:6px 8px; border-radius:6px;">{"Чтобы связаться с поддержкой напишите нам в Telegram - @mPho0enix"}</div> } } else { html!{} } }
            <div style="border-top:1px solid var(--border); padding-top:12px;">
                <div style="font-weight:600;">{"PLGpt"}</div>
                <div style="font-size:12px; opacity:0.7;">{"Создавай лучшие игры с помощью нейросети"}</div>
            </div>
            <div style="display:flex; justify-content:flex-end;">
                <button class="btn-primary" onclick={close_cb}>{"Закрыть"}</button>
            </div>
        </div>
    </div>}
}
