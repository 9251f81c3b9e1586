pub mod routes;
pub mod menu;

pub use routes::AppRoute;
pub use menu::{menu_for, navigation_menu, NavEntry};
