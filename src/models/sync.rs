use std::fmt;

use serde::{Deserialize, Serialize};

/// Estado de un synchronizer visto desde la UI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SyncState {
    /// Colección vacía, aún sin `load()`
    Idle,
    /// Carga completa en curso
    Syncing,
    Synced,
    Pending { count: usize },
    Error { message: String },
}

impl SyncState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SyncState::Syncing | SyncState::Pending { .. })
    }
}

impl Default for SyncState {
    fn default() -> Self {
        SyncState::Idle
    }
}

/// Tipo de mutación en curso
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        };
        f.write_str(label)
    }
}
