pub mod session_context;
pub mod use_session;
pub mod use_patient_scope;
pub mod use_login;
pub mod use_navigator;

pub use session_context::{use_session_dispatcher, use_session_reader, SessionProvider};
pub use use_session::{use_current_patient_id, use_current_role, use_navigation_menu, use_selector};
pub use use_patient_scope::{use_mounted, use_patient_fetch, use_patient_scope, Activation, FetchState};
pub use use_login::{use_login, LoginStatus, UseLoginHandle};
pub use use_navigator::{use_navigator, Navigator};
