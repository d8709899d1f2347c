mod app;
mod auth;
mod auth_guard;
mod pages;

use app::App;
use clinic_frontend_common::{ClientConfig, init_logging};

fn main() {
    console_error_panic_hook::set_once();
    let config = ClientConfig::default();
    if let Err(err) = init_logging(&config.log_level) {
        web_sys::console::warn_1(&format!("Logging already initialized: {err}").into());
    }
    tracing::info!(api = %config.api_base_url, "Starting clinic web client");
    yew::Renderer::<App>::new().render();
}
