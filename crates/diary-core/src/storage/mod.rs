//! Account record storage.

mod flat_file;
mod traits;

pub use flat_file::FlatFileStore;
pub use traits::{AccountRecord, AccountStore};
