//! Entry export adapters.
//!
//! Both exporters iterate entries in creation order and write each one
//! as rendered. PDF support is a build-time capability: without the
//! `pdf` feature the export reports `ExportUnavailable` instead of
//! probing for anything at runtime.

mod text;

pub use text::export_text;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "pdf")]
pub use pdf::export_pdf;

#[cfg(not(feature = "pdf"))]
pub fn export_pdf(
    _entries: &[crate::entry::Entry],
    _destination: &std::path::Path,
) -> crate::error::Result<()> {
    Err(crate::error::DiaryError::ExportUnavailable)
}
