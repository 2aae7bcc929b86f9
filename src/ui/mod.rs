pub mod app;
pub mod app_context;
pub mod components;

#[cfg(feature = "desktop")]
pub use app::make_config;
pub use app::MAIN_CSS;
pub use app_context::AppContext;
pub use components::{App, CreateTripPage, DestinationAndDateStep};
