// ============================================================================
// AUTH STATE - Sesión actual + mensaje del formulario de login
// ============================================================================
// El token vive solo aquí; los synchronizers lo reciben explícitamente.
// ============================================================================

use crate::error::AuthError;
use crate::models::{AuthSession, Credential};

/// Mensaje mostrado bajo el formulario de login
#[derive(Clone, Debug, PartialEq)]
pub enum LoginMessage {
    Success(String),
    Failure(String),
}

impl LoginMessage {
    pub fn text(&self) -> &str {
        match self {
            LoginMessage::Success(text) | LoginMessage::Failure(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoginMessage::Failure(_))
    }
}

/// Qué pinta la app: el login o el dashboard (productos + carritos)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Login,
    Dashboard(&'a Credential),
}

/// Estado de autenticación
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub message: Option<LoginMessage>,
    pub logging_in: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session.as_ref().map(|session| &session.credential)
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.credential() {
            Some(credential) => Screen::Dashboard(credential),
            None => Screen::Login,
        }
    }

    pub fn started(&self) -> Self {
        Self {
            logging_in: true,
            message: None,
            ..self.clone()
        }
    }

    pub fn signed_in(session: AuthSession) -> Self {
        let message = LoginMessage::Success(format!("Welcome, {}!", session.display_name()));
        Self {
            session: Some(session),
            message: Some(message),
            logging_in: false,
        }
    }

    /// Un login fallido no toca la sesión anterior
    pub fn failed(&self, err: &AuthError) -> Self {
        Self {
            message: Some(LoginMessage::Failure(err.to_string())),
            logging_in: false,
            ..self.clone()
        }
    }

    pub fn without_message(&self) -> Self {
        Self {
            message: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;

    fn session() -> AuthSession {
        let response: LoginResponse = serde_json::from_str(
            r#"{"username":"emilys","firstName":"Emily","lastName":"Johnson","token":"tok"}"#,
        )
        .unwrap();
        AuthSession::from_response(response, 30)
    }

    #[test]
    fn successful_login_greets_by_full_name() {
        let state = AuthState::new().started();
        assert!(state.logging_in);

        let state = AuthState::signed_in(session());
        assert!(state.is_logged_in());
        assert_eq!(state.credential().map(Credential::as_str), Some("tok"));
        assert_eq!(
            state.message,
            Some(LoginMessage::Success("Welcome, Emily Johnson!".into()))
        );
        assert!(state.without_message().message.is_none());
    }

    #[test]
    fn rejection_surfaces_server_message() {
        let state = AuthState::new()
            .started()
            .failed(&AuthError::Rejected("Invalid credentials".into()));

        assert!(!state.is_logged_in());
        assert!(!state.logging_in);
        let message = state.message.unwrap();
        assert!(message.is_error());
        assert_eq!(message.text(), "Login failed: Invalid credentials");
    }

    #[test]
    fn dashboard_requires_a_session() {
        assert_eq!(AuthState::new().screen(), Screen::Login);
        assert_eq!(AuthState::new().started().screen(), Screen::Login);

        let rejected = AuthState::new().failed(&AuthError::Rejected("nope".into()));
        assert_eq!(rejected.screen(), Screen::Login);

        let state = AuthState::signed_in(session());
        match state.screen() {
            Screen::Dashboard(credential) => assert_eq!(credential.as_str(), "tok"),
            Screen::Login => panic!("signed in but still on login"),
        }
    }
}
