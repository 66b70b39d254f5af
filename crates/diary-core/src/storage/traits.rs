//! Account store trait definition.
//!
//! The `AccountStore` trait is the seam between session logic and the
//! persistence backend. The only shipped implementation is the flat-file
//! store, but session and export code depend on this trait alone.

use crate::entry::Entry;
use crate::error::Result;

/// A loaded account record: the stored password hash plus all entries in
/// creation order.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    /// Hex-encoded password digest (the first line of the record)
    pub password_hash: String,

    /// Entries in creation order
    pub entries: Vec<Entry>,
}

/// Storage interface for per-account records.
///
/// All implementations must ensure:
/// - One record per username
/// - Entries keep their creation order
/// - `persist` replaces the record wholesale
pub trait AccountStore {
    /// Whether a record exists for the username.
    fn exists(&self, username: &str) -> bool;

    /// Create a new record holding only the password hash.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::DuplicateAccount` if a record already exists,
    /// or `DiaryError::Storage` if the record cannot be written.
    fn create(&self, username: &str, password_hash: &str) -> Result<()>;

    /// Load the record for the username.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::AccountNotFound` if no record exists, or
    /// `DiaryError::Storage` if the record cannot be read or parsed.
    fn load(&self, username: &str) -> Result<AccountRecord>;

    /// Rewrite the record as the hash line followed by all entry blocks.
    fn persist(&self, username: &str, password_hash: &str, entries: &[Entry]) -> Result<()>;
}
