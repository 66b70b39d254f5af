//! Password handling and session opening with retry logic.

use std::io::IsTerminal;

use diary_core::{login, DiaryError, FlatFileStore, Session};

use crate::errors::CliError;
use crate::helpers::{env_password, prompt_password};

use super::context::AppContext;
use super::resolver::missing_account_error;

/// Open a session for the resolved account, with password retry logic.
///
/// DIARY_PASSWORD is checked first; a wrong env password fails
/// immediately. Interactive runs get three prompt attempts.
pub fn open_session(ctx: &AppContext, no_input: bool) -> anyhow::Result<(Session, FlatFileStore)> {
    let store = ctx.store()?;
    let username = ctx.username(no_input)?;
    let interactive = std::io::stdin().is_terminal() && !no_input;

    if let Some(password) = env_password() {
        return match login(&store, &username, password.as_str()) {
            Ok(session) => Ok((session, store)),
            Err(DiaryError::InvalidCredentials) => {
                CliError::auth_failed("Incorrect password.").exit()
            }
            Err(DiaryError::AccountNotFound(_)) => Err(missing_account_error(&username).into()),
            Err(err) => Err(err.into()),
        };
    }

    let max_attempts: u32 = if interactive { 3 } else { 1 };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let password = prompt_password(interactive)?;
        match login(&store, &username, password.as_str()) {
            Ok(session) => return Ok((session, store)),
            Err(DiaryError::InvalidCredentials) => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Hint: Passwords are case-sensitive. Set DIARY_PASSWORD for scripted use.",
                    )
                    .exit()
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
                continue;
            }
            Err(DiaryError::AccountNotFound(_)) => {
                return Err(missing_account_error(&username).into());
            }
            Err(err) => return Err(err.into()),
        }
    }
}
