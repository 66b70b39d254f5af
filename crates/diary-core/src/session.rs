//! Login sessions: the current account plus its in-memory entry log.
//!
//! A session is an explicit value handed to each operation rather than
//! module state. Logout is dropping the session; entries are reloaded
//! from disk at the next login, which is safe because every mutation
//! persists before the command finishes.

use chrono::NaiveDateTime;

use crate::credentials::{hash_password, verify_password};
use crate::entry::{search, Entry};
use crate::error::{DiaryError, Result};
use crate::storage::AccountStore;

/// Create a new account.
///
/// # Errors
///
/// Returns `DiaryError::MissingInput` for blank username or password and
/// `DiaryError::DuplicateAccount` if the username is taken.
pub fn register(store: &dyn AccountStore, username: &str, password: &str) -> Result<()> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DiaryError::MissingInput(
            "username and password".to_string(),
        ));
    }
    store.create(username, &hash_password(password))
}

/// Verify credentials and load the account's entries.
///
/// # Errors
///
/// Returns `DiaryError::MissingInput` for blank username or password,
/// `DiaryError::AccountNotFound` if no record exists, and
/// `DiaryError::InvalidCredentials` if the password does not match. No
/// entries are returned on failure.
pub fn login(store: &dyn AccountStore, username: &str, password: &str) -> Result<Session> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DiaryError::MissingInput(
            "username and password".to_string(),
        ));
    }
    let record = store.load(username)?;
    if !verify_password(&record.password_hash, password) {
        return Err(DiaryError::InvalidCredentials);
    }
    Ok(Session {
        username: username.to_string(),
        password_hash: record.password_hash,
        entries: record.entries,
    })
}

/// The transient logged-in state: current user plus loaded entries.
pub struct Session {
    username: String,
    password_hash: String,
    entries: Vec<Entry>,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Entries in creation order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append a new entry stamped `at`.
    ///
    /// Only the in-memory log changes; call [`Session::persist`]
    /// afterwards to rewrite the record.
    pub fn append(&mut self, text: &str, at: NaiveDateTime) -> Result<Entry> {
        let entry = Entry::new(at, text)?;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Entries matching the keyword, case-insensitively.
    pub fn search(&self, keyword: &str) -> Vec<&Entry> {
        search(&self.entries, keyword)
    }

    /// Rewrite the on-disk record from the in-memory state.
    pub fn persist(&self, store: &dyn AccountStore) -> Result<()> {
        store.persist(&self.username, &self.password_hash, &self.entries)
    }
}
