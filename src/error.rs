// ============================================================================
// ERRORES - Taxonomía tipada (transporte, parseo, validación)
// ============================================================================

use thiserror::Error;

use crate::models::ItemId;

/// Fallos de un synchronizer o de una llamada a la API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Red caída o respuesta no-2xx (`status` es `None` si no hubo respuesta)
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },

    /// El cuerpo de la respuesta no tiene la forma esperada
    #[error("Parse error: {0}")]
    Deserialization(String),

    /// Campo numérico del formulario que no se puede parsear
    #[error("Invalid value for \"{field}\": {value:?}")]
    Validation { field: &'static str, value: String },

    #[error("Collection already loaded; use reload() for a full refresh")]
    AlreadyLoaded,

    /// El servidor devolvió otro id en la respuesta de un update
    #[error("Update of item {requested} answered with item {returned}")]
    IdMismatch { requested: ItemId, returned: ItemId },
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => format!("Network error: {}", message),
    }
}

impl SyncError {
    pub fn network(message: impl Into<String>) -> Self {
        SyncError::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        SyncError::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        SyncError::Validation {
            field,
            value: value.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport { .. })
    }
}

impl From<gloo_net::Error> for SyncError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => SyncError::Deserialization(e.to_string()),
            other => SyncError::network(other.to_string()),
        }
    }
}

/// Fallos del login
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    /// Rechazo del servidor con su mensaje
    #[error("Login failed: {0}")]
    Rejected(String),

    #[error(transparent)]
    Request(#[from] SyncError),
}

pub type SyncResult<T> = Result<T, SyncError>;
