// ============================================================================
// STATE MODULE - Contexto de autorización de sesión
// ============================================================================
// acciones -> reducer -> estado -> selectores -> suscriptores
// ============================================================================

pub mod session_state;
pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod login;
pub mod store;

pub use session_state::SessionState;
pub use actions::SessionAction;
pub use reducer::reduce;
pub use login::LoginOutcome;
pub use store::{SessionDispatcher, SessionReader, SessionStore, Subscription};
