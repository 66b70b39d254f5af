//! Register command handler.

use std::io::IsTerminal;

use diary_core::{register, AccountStore};

use crate::app::AppContext;
use crate::cli::RegisterArgs;
use crate::config::{write_config, DiaryConfig};
use crate::errors::CliError;
use crate::helpers::{env_password, prompt_register_password};

pub fn handle_register(ctx: &AppContext, args: &RegisterArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let username = ctx.username(args.no_input)?;

    if store.exists(&username) {
        return Err(
            CliError::invalid_input(format!("Account already exists: {}", username)).into(),
        );
    }

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let password = if interactive {
        prompt_register_password()?
    } else {
        env_password().ok_or_else(|| {
            anyhow::anyhow!("No password provided and no TTY available. Set DIARY_PASSWORD.")
        })?
    };

    register(&store, &username, password.as_str())?;
    write_default_config(ctx, &username)?;

    if !ctx.quiet() {
        println!("Created account {}", username);
        println!("Diary file: {}", store.record_path(&username)?.display());
    }
    Ok(())
}

/// Write a starter config on first register so later runs resolve the
/// same data directory and account without flags.
fn write_default_config(ctx: &AppContext, username: &str) -> anyhow::Result<()> {
    let path = crate::app::resolve_config_path()?;
    if path.exists() {
        return Ok(());
    }
    let config = DiaryConfig::new(ctx.data_dir()?, Some(username.to_string()), None);
    write_config(&path, &config)
}
