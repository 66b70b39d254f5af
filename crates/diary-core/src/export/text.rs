//! Plain-text export: verbatim concatenation of rendered entries.

use std::io::Write;

use crate::entry::Entry;
use crate::error::Result;

pub fn export_text<W: Write>(entries: &[Entry], writer: &mut W) -> Result<()> {
    for entry in entries {
        writer.write_all(entry.render().as_bytes())?;
    }
    Ok(())
}
