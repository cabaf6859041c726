// ============================================================================
// STATE MODULE - Estado observable con Rc<RefCell> + notificaciones
// ============================================================================

pub mod auth_state;
pub mod reactivity;

pub use auth_state::{AuthState, LoginMessage, Screen};
pub use reactivity::*;
