use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::services::{fetch_current_user, perform_login, ApiClient};
use crate::state::AuthState;

/// El mensaje de login se borra solo pasado este tiempo
const MESSAGE_TIMEOUT_MS: u32 = 3_000;

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthState::new);

    // Auto-clear del mensaje. Si cambia antes, el Timeout anterior se cancela al soltarse.
    {
        let state = state.clone();
        use_effect_with(state.message.clone(), move |message| {
            let timeout = message.as_ref().map(|_| {
                Timeout::new(MESSAGE_TIMEOUT_MS, move || {
                    state.set(state.without_message());
                })
            });
            move || drop(timeout)
        });
    }

    // Login callback
    let login = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            if state.logging_in {
                log::warn!("⚠️ Login ya en curso, se ignora");
                return;
            }
            state.set(state.started());

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                match perform_login(&client, &username, &password).await {
                    Ok(session) => {
                        // Solo informativo: el perfil se registra en el log
                        let credential = session.credential.clone();
                        state.set(AuthState::signed_in(session));
                        let _ = fetch_current_user(&client, &credential).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        state.set(state.failed(&e));
                    }
                }
            });
        })
    };

    // Logout callback
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            state.set(AuthState::new());
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}
