//! # Diary Core
//!
//! Core library for Diary - a CLI-first personal journal with per-account
//! flat-file storage.
//!
//! This crate provides the domain logic, storage abstraction, and export
//! adapters independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **credentials**: password hashing and verification
//! - **entry**: entry model, rendering, keyword search
//! - **session**: login state and the in-memory entry log
//! - **storage**: account store trait and the flat-file backend
//! - **export**: plain-text and PDF export adapters

pub mod credentials;
pub mod entry;
pub mod error;
pub mod export;
pub mod fs;
pub mod session;
pub mod storage;

pub use entry::Entry;
pub use error::{DiaryError, Result};
pub use session::{login, register, Session};
pub use storage::{AccountRecord, AccountStore, FlatFileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
