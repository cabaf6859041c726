use shop_dashboard_pwa::error::AuthError;
use shop_dashboard_pwa::services::{authenticate, perform_login, ApiClient};

// Puerto cerrado: si algún test llegara a la red fallaría con Request(..)
fn offline_client() -> ApiClient {
    ApiClient::with_base_url("http://127.0.0.1:9")
}

#[tokio::test]
async fn empty_username_is_rejected_before_dispatch() {
    let result = authenticate(&offline_client(), "", "secret").await;
    assert_eq!(result, Err(AuthError::MissingField("username")));
}

#[tokio::test]
async fn empty_password_is_rejected_before_dispatch() {
    let result = perform_login(&offline_client(), "emilys", "").await;
    assert_eq!(result.unwrap_err().to_string(), "Please fill in the password field");
}
