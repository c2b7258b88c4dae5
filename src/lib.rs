pub mod app;
pub mod config;
pub mod date;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod range;
pub mod render;
pub mod source;
pub mod state;
pub mod surface;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use loader::Loader;
pub use state::AppState;
