//! Diary CLI - a password-protected personal diary for the command line
//!
//! This is the command-line interface for Diary. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;
use diary_core::{DiaryError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::exit_codes;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Register(args)) => commands::handle_register(ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(ctx, args),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Search(args)) => commands::handle_search(ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(ctx, args),
        None => {
            print_quickstart();
            Ok(())
        }
    }
}

/// Map an error to its exit code: typed CLI errors first, then core
/// errors, then the general failure code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<DiaryError>() {
        return match core_err {
            DiaryError::AccountNotFound(_) => exit_codes::NOT_FOUND,
            DiaryError::InvalidCredentials => exit_codes::AUTH_FAILED,
            DiaryError::MissingInput(_)
            | DiaryError::InvalidInput(_)
            | DiaryError::DuplicateAccount(_)
            | DiaryError::ExportUnavailable => exit_codes::INVALID_INPUT,
            DiaryError::Storage(_) => 1,
        };
    }
    1
}

fn print_quickstart() {
    println!("diary {}", VERSION);
    println!();
    println!("Quickstart:");
    println!("  diary register          Create an account");
    println!("  diary add               Write an entry");
    println!("  diary list              Show all entries");
    println!("  diary search <word>     Find entries");
    println!("  diary export diary.txt  Export entries");
    println!();
    println!("Run `diary --help` for all commands and flags.");
}
