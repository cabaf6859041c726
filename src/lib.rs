// ============================================================================
// SHOP DASHBOARD - FRONTEND YEW (RUST/WASM)
// ============================================================================
// - Sync: colección local reflejo de una colección remota (políticas enchufables)
// - Services: SOLO comunicación API + auth
// - State: estado observable con Rc<RefCell>
// - Hooks/Components: capa de presentación Yew
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod sync;
pub mod state;
pub mod services;
pub mod hooks;
pub mod components;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

/// Panic hook + logging + render de la app
#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Shop Dashboard ({}) contra {}",
        CONFIG.environment,
        CONFIG.api_base_url()
    );
    if !CONFIG.is_production() {
        log::debug!("⚙️ Configuración: {:?}", *CONFIG);
    }

    yew::Renderer::<App>::new().render();
}
