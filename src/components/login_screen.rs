use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::state::LoginMessage;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub message: Option<LoginMessage>,
    pub logging_in: bool,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Campos vacíos: el servicio de auth los rechaza con su propio mensaje
            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                on_login.emit((username_input.value(), password_input.value()));
            }
        })
    };

    let message = props.message.as_ref().map(|message| {
        let class = if message.is_error() { "login-message error" } else { "login-message success" };
        html! { <p class={class}>{message.text()}</p> }
    });

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🛍️"}</div>
                    </div>
                    <h1>{"Shop Dashboard"}</h1>
                    <p>{"Productos y carritos"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu usuario"
                            ref={username_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={props.logging_in}>
                        <span class="btn-text">
                            { if props.logging_in { "Conectando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>

                    { for message }
                </form>
            </div>
        </div>
    }
}
