//! List entries command handler.

use crate::app::{open_session, AppContext};
use crate::cli::ListArgs;
use crate::output::print_entries;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (session, _store) = open_session(ctx, false)?;

    if session.entries().is_empty() && !args.json {
        if !ctx.quiet() {
            println!("No entries yet.");
        }
        return Ok(());
    }

    print_entries(session.entries(), args.json)
}
