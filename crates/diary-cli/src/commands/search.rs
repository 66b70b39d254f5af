//! Search entries command handler.

use crate::app::{open_session, AppContext};
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::output::print_entries;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let keyword = args.keyword.trim();
    if keyword.is_empty() {
        return Err(CliError::invalid_input("Search keyword cannot be empty").into());
    }

    let (session, _store) = open_session(ctx, false)?;
    let matches = session.search(keyword);

    if matches.is_empty() && !args.json {
        if !ctx.quiet() {
            println!("No matching entries found.");
        }
        return Ok(());
    }

    print_entries(matches, args.json)
}
