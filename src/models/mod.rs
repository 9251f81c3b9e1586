pub mod session;
pub mod account;
pub mod mood_state;
pub mod analytics;
pub mod medication;
pub mod appointment;

pub use session::{PatientId, Role};
pub use account::{AccountDto, LoginRequest, RoleCode};
pub use mood_state::{has_mood_for_day, MoodState, MOOD_SCALE};
pub use analytics::{AnalyticsFilter, BiologicalAnalytic, MoodAnalytic};
pub use medication::Medication;
pub use appointment::Session;
