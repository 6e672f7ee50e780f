pub mod app;
pub mod color;
pub mod config;
pub mod errors;
pub mod github;
pub mod handlers;
pub mod layout;
pub mod models;
pub mod source;
pub mod state;
pub mod svg;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use github::GitHubClient;
pub use state::AppState;
