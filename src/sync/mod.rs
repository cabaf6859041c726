// ============================================================================
// SYNC MODULE - Remote Collection Synchronizer genérico
// ============================================================================

pub mod backend;
pub mod collection;
pub mod sequencer;
pub mod synchronizer;

pub use backend::{
    DraftOf, LocalOnly, MutationBackend, NetworkBacked, RemoteResource, RemoteSource, SyncItem,
    SyncPolicy,
};
pub use collection::{Collection, Effect};
pub use synchronizer::{PendingMutation, Synchronizer};
