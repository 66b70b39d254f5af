//! Entry printing for list and search commands.

use diary_core::Entry;

/// Print entries as rendered blocks, or as a JSON array with `--json`.
pub fn print_entries<'a, I>(entries: I, json: bool) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a Entry>,
{
    if json {
        let collected: Vec<&Entry> = entries.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&collected)?);
        return Ok(());
    }
    for entry in entries {
        println!("{}", entry.render());
    }
    Ok(())
}
