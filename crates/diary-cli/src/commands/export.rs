//! Export command handler.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use diary_core::export::{export_pdf, export_text};

use crate::app::{open_session, AppContext};
use crate::cli::{ExportArgs, ExportFormat};
use crate::errors::CliError;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (session, _store) = open_session(ctx, false)?;
    let entries = session.entries();

    if entries.is_empty() {
        return Err(CliError::invalid_input("No entries to export.").into());
    }

    let destination = Path::new(&args.destination);
    match args.format {
        ExportFormat::Text => {
            let file = File::create(destination).map_err(|e| {
                anyhow::anyhow!("Failed to create {}: {}", destination.display(), e)
            })?;
            let mut writer = BufWriter::new(file);
            export_text(entries, &mut writer)?;
            writer.flush()?;
        }
        ExportFormat::Pdf => export_pdf(entries, destination)?,
    }

    if !ctx.quiet() {
        println!(
            "Exported {} entr{} to {}",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" },
            destination.display()
        );
    }
    Ok(())
}
