//! Command handlers.

mod add;
mod export;
mod list;
mod register;
mod search;

pub use add::handle_add;
pub use export::handle_export;
pub use list::handle_list;
pub use register::handle_register;
pub use search::handle_search;
