//! Flat-file account store.
//!
//! One plain-text file per account, named `<username>_diary.txt` under the
//! store's root directory. Line 1 is the hex password hash; the remaining
//! lines are entry blocks, each a `[timestamp]` header line followed by
//! the entry text and a blank separator line.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::credentials::is_password_hash;
use crate::entry::{parse_header, Entry};
use crate::error::{DiaryError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::{AccountRecord, AccountStore};

/// Suffix appended to the username to form the record file name.
const RECORD_SUFFIX: &str = "_diary.txt";

/// Flat-file store rooted at a data directory.
pub struct FlatFileStore {
    root: PathBuf,
}

impl FlatFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the record file for a username.
    pub fn record_path(&self, username: &str) -> Result<PathBuf> {
        validate_username(username)?;
        Ok(self.root.join(format!("{}{}", username, RECORD_SUFFIX)))
    }

    fn render_record(password_hash: &str, entries: &[Entry]) -> String {
        let mut out = String::with_capacity(
            password_hash.len() + 1 + entries.iter().map(|e| e.text.len() + 24).sum::<usize>(),
        );
        out.push_str(password_hash);
        out.push('\n');
        for entry in entries {
            out.push_str(&entry.render());
            // blank separator line closing the block
            out.push('\n');
        }
        out
    }

    fn parse_record(contents: &str, username: &str) -> Result<AccountRecord> {
        let corrupt = |detail: &str| {
            DiaryError::Storage(format!(
                "Corrupt account record for {}: {}",
                username, detail
            ))
        };

        let mut lines = contents.lines();
        let hash = lines.next().ok_or_else(|| corrupt("empty file"))?;
        if !is_password_hash(hash) {
            return Err(corrupt("first line is not a password hash"));
        }

        let mut entries = Vec::new();
        let mut current: Option<(NaiveDateTime, Vec<&str>)> = None;
        for (idx, line) in lines.enumerate() {
            if let Some(timestamp) = parse_header(line) {
                if let Some((prev, block)) = current.take() {
                    entries.push(finish_block(prev, block, username)?);
                }
                current = Some((timestamp, Vec::new()));
            } else if let Some((_, block)) = current.as_mut() {
                block.push(line);
            } else if line.trim().is_empty() {
                continue;
            } else {
                return Err(corrupt(&format!("stray text at line {}", idx + 2)));
            }
        }
        if let Some((prev, block)) = current.take() {
            entries.push(finish_block(prev, block, username)?);
        }

        Ok(AccountRecord {
            password_hash: hash.to_string(),
            entries,
        })
    }
}

/// Assemble a parsed block into an entry.
///
/// The blank separator line that closes a block arrives as the last
/// collected line; drop it before joining. Blank lines inside the text
/// are kept.
fn finish_block(timestamp: NaiveDateTime, mut lines: Vec<&str>, username: &str) -> Result<Entry> {
    if lines.last() == Some(&"") {
        lines.pop();
    }
    Entry::new(timestamp, lines.join("\n")).map_err(|_| {
        DiaryError::Storage(format!(
            "Corrupt account record for {}: entry block with no text",
            username
        ))
    })
}

/// Usernames double as file name stems; reject anything that could
/// escape the data directory.
fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(DiaryError::MissingInput("username".to_string()));
    }
    if username.contains(['/', '\\']) || username.contains("..") {
        return Err(DiaryError::InvalidInput(format!(
            "Username cannot contain path separators: {}",
            username
        )));
    }
    Ok(())
}

impl AccountStore for FlatFileStore {
    fn exists(&self, username: &str) -> bool {
        self.record_path(username)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn create(&self, username: &str, password_hash: &str) -> Result<()> {
        let path = self.record_path(username)?;
        if path.exists() {
            return Err(DiaryError::DuplicateAccount(username.to_string()));
        }
        fs::create_dir_all(&self.root)?;
        write_atomic(&path, &Self::render_record(password_hash, &[]))?;
        Ok(())
    }

    fn load(&self, username: &str) -> Result<AccountRecord> {
        let path = self.record_path(username)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DiaryError::AccountNotFound(username.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse_record(&contents, username)
    }

    fn persist(&self, username: &str, password_hash: &str, entries: &[Entry]) -> Result<()> {
        let path = self.record_path(username)?;
        fs::create_dir_all(&self.root)?;
        write_atomic(&path, &Self::render_record(password_hash, entries))?;
        Ok(())
    }
}
