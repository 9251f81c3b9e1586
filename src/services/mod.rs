pub mod api_client;
pub mod account_service;
pub mod mood_state_service;
pub mod analytics_service;
pub mod medication_service;
pub mod session_service;

pub use api_client::ApiClient;
pub use account_service::*;
pub use mood_state_service::*;
pub use analytics_service::*;
pub use medication_service::*;
pub use session_service::*;
