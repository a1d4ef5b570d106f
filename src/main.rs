use plgpt::components::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("PLGpt starting");
    yew::Renderer::<App>::new().render();
}
