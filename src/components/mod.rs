pub mod app;
pub mod toolbar;
pub mod login_screen;
pub mod identity_unavailable;
pub mod mood_form;
pub mod analytics_dashboard;
pub mod prescription_view;
pub mod pages;
pub mod appointment_list;

pub use app::App;
pub use toolbar::Toolbar;
pub use login_screen::LoginScreen;
pub use identity_unavailable::IdentityUnavailable;
pub use mood_form::MoodForm;
pub use analytics_dashboard::{AnalyticsDashboard, AnalyticsKind};
pub use prescription_view::PrescriptionView;
pub use appointment_list::AppointmentList;
pub use pages::{Home, NotAllowed, Placeholder};
