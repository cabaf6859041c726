use yew::prelude::*;

use super::{CartBoard, LoginScreen, ProductTable};
use crate::hooks::use_auth;
use crate::state::Screen;

/// Login hasta tener sesión; después productos + carritos
#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let state = &*auth.state;

    let on_logout = auth.logout.reform(|_: MouseEvent| ());

    let user_bar = state.session.as_ref().map(|session| {
        html! {
            <div class="user-bar">
                if let Some(image) = &session.image {
                    <img class="avatar" src={image.clone()} alt={session.username.clone()} />
                }
                <span>{session.display_name()}</span>
                <button class="btn-logout" onclick={on_logout.clone()}>{"Salir"}</button>
            </div>
        }
    });

    // El dashboard completo solo existe con sesión
    let content = match state.screen() {
        Screen::Dashboard(credential) => html! {
            <main class="dashboard">
                <ProductTable />
                <CartBoard credential={credential.clone()} />
            </main>
        },
        Screen::Login => html! {
            <LoginScreen
                on_login={auth.login.clone()}
                message={state.message.clone()}
                logging_in={state.logging_in}
            />
        },
    };

    html! {
        <div class="app">
            { for user_bar }
            if let Some(message) = state.message.as_ref().filter(|_| state.is_logged_in()) {
                <p class="login-message success">{message.text()}</p>
            }
            { content }
        </div>
    }
}
