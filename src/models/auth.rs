use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ItemId;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub expires_in_mins: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(alias = "accessToken")]
    pub token: String,
}

/// Cuerpo de error de la API (`{ "message": "..." }`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Perfil devuelto por `/auth/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: ItemId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Token bearer opaco. Solo lectura para los synchronizers.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Valor de la cabecera `Authorization`
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Nunca volcar el token en los logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.len())
    }
}

/// Resultado de un login correcto
#[derive(Clone, PartialEq, Debug)]
pub struct AuthSession {
    pub credential: Credential,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_in_mins: u32,
}

impl AuthSession {
    pub fn from_response(response: LoginResponse, expires_in_mins: u32) -> Self {
        Self {
            credential: Credential::new(response.token),
            username: response.username,
            first_name: response.first_name,
            last_name: response.last_name,
            image: response.image,
            issued_at: Utc::now(),
            expires_in_mins,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Expiración informativa; nadie la hace cumplir en el cliente
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + Duration::minutes(i64::from(self.expires_in_mins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_access_token_field() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"id":1,"username":"emilys","firstName":"Emily","lastName":"Johnson","image":"https://cdn.example/1.png","accessToken":"abc.def","refreshToken":"zzz"}"#,
        )
        .unwrap();
        assert_eq!(response.token, "abc.def");

        let session = AuthSession::from_response(response, 30);
        assert_eq!(session.display_name(), "Emily Johnson");
        assert_eq!(session.credential.bearer(), "Bearer abc.def");
        assert_eq!(session.expires_at() - session.issued_at, Duration::minutes(30));
    }

    #[test]
    fn credential_debug_hides_token() {
        let credential = Credential::new("secret-token");
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn login_request_uses_camel_case() {
        let body = serde_json::to_value(LoginRequest {
            username: "emilys".into(),
            password: "emilyspass".into(),
            expires_in_mins: 30,
        })
        .unwrap();
        assert_eq!(body["expiresInMins"], 30);
    }
}
