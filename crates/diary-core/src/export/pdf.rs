//! PDF export: one rendered line per PDF text line.
//!
//! The layout is a fixed vertical budget per page: the cursor starts
//! near the top margin, steps a constant amount for every line, and a
//! fresh page begins once it passes the bottom margin.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::entry::Entry;
use crate::error::{DiaryError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 15.0;
const TOP_CURSOR_MM: f32 = 280.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_STEP_MM: f32 = 7.0;
const FONT_SIZE_PT: f32 = 12.0;

pub fn export_pdf(entries: &[Entry], destination: &Path) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Diary entries",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "entries",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| DiaryError::Storage(format!("PDF font error: {}", e)))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = TOP_CURSOR_MM;
    for entry in entries {
        for line in entry.render().lines() {
            if cursor < BOTTOM_MARGIN_MM {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "entries");
                layer = doc.get_page(page).get_layer(layer_index);
                cursor = TOP_CURSOR_MM;
            }
            layer.use_text(line, FONT_SIZE_PT, Mm(LEFT_MARGIN_MM), Mm(cursor), &font);
            cursor -= LINE_STEP_MM;
        }
    }

    let file = File::create(destination)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| DiaryError::Storage(format!("PDF write error: {}", e)))?;
    Ok(())
}
