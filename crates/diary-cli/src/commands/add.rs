//! Add entry command handler.

use chrono::Local;

use crate::app::{open_session, AppContext};
use crate::cli::AddArgs;
use crate::helpers::read_entry_body;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let (mut session, store) = open_session(ctx, args.no_input)?;
    let editor_override = ctx.editor()?;
    let body = read_entry_body(args.no_input, args.body.clone(), editor_override)?;

    let entry = session.append(&body, Local::now().naive_local())?;
    session.persist(&store)?;

    if !ctx.quiet() {
        println!("Added entry {}", entry.header());
    }
    Ok(())
}
