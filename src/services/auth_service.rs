use crate::config::CONFIG;
use crate::error::{AuthError, SyncResult};
use crate::models::{AuthSession, Credential, LoginRequest, UserProfile};
use crate::services::ApiClient;

/// Validar campos antes de llamar al servidor
pub fn validate_login_fields(username: &str, password: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() {
        return Err(AuthError::MissingField("username"));
    }
    if password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }
    Ok(())
}

/// Perform login with username and password
pub async fn perform_login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    validate_login_fields(username, password)?;

    let request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
        expires_in_mins: CONFIG.token_expires_in_mins,
    };

    let response = client.login(&request).await?;
    let session = AuthSession::from_response(response, request.expires_in_mins);
    log::info!(
        "✅ Login correcto: {} (token válido hasta {})",
        session.username,
        session.expires_at().to_rfc3339()
    );
    Ok(session)
}

/// Solo el credential, para quien no necesita el perfil
pub async fn authenticate(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<Credential, AuthError> {
    perform_login(client, username, password)
        .await
        .map(|session| session.credential)
}

/// Fetch current user (`/auth/me`); el perfil solo se registra en el log
pub async fn fetch_current_user(
    client: &ApiClient,
    credential: &Credential,
) -> SyncResult<UserProfile> {
    match client.fetch_me(credential).await {
        Ok(profile) => {
            log::info!("👤 Usuario actual: {} (id {})", profile.username, profile.id);
            Ok(profile)
        }
        Err(e) => {
            log::error!("❌ Error obteniendo usuario actual: {}", e);
            Err(e)
        }
    }
}
