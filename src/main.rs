use care_session_pwa::components::App;
use care_session_pwa::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Care Session starting ({} → {})", CONFIG.environment, CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
