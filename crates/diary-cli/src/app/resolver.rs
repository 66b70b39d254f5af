//! Resolution of config path and account username.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Input;

use crate::config::default_config_path;
use crate::errors::CliError;

use super::context::AppContext;

/// Resolve the config file path, checking DIARY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DIARY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the account username from the `--user` flag, the config
/// file, or an interactive prompt.
pub fn resolve_username(ctx: &AppContext, no_input: bool) -> anyhow::Result<String> {
    if let Some(ref user) = ctx.cli().user {
        let user = user.trim();
        if !user.is_empty() {
            return Ok(user.to_string());
        }
    }

    if let Some(config) = ctx.config()? {
        if let Some(ref user) = config.diary.user {
            let user = user.trim();
            if !user.is_empty() {
                return Ok(user.to_string());
            }
        }
    }

    let interactive = std::io::stdin().is_terminal() && !no_input;
    if !interactive {
        return Err(anyhow::anyhow!(
            "No username provided and no TTY available. Use --user or set DIARY_USER."
        ));
    }

    let username: String = Input::new()
        .with_prompt("Username")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read username: {}", e))?;
    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(CliError::invalid_input("Username cannot be empty").into());
    }
    Ok(username)
}

/// Error for a missing account, with a registration hint.
pub fn missing_account_error(username: &str) -> CliError {
    CliError::not_found(
        format!("No account found for {}", username),
        "Hint: Run `diary register` to create it.",
    )
}
