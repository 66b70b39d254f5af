//! Application context and resolution logic for the Diary CLI.

mod auth;
mod context;
mod resolver;

pub use auth::open_session;
pub use context::AppContext;
pub use resolver::resolve_config_path;
