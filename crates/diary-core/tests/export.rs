use chrono::NaiveDateTime;

use diary_core::entry::TIMESTAMP_FORMAT;
use diary_core::export::export_text;
use diary_core::Entry;

fn entry(when: &str, text: &str) -> Entry {
    let ts = NaiveDateTime::parse_from_str(when, TIMESTAMP_FORMAT).expect("timestamp");
    Entry::new(ts, text).expect("entry")
}

#[test]
fn test_text_export_matches_rendered_entries() {
    let entries = vec![
        entry("2024-03-01 09:15:00", "first note"),
        entry("2024-03-02 18:00:30", "line one\nline two"),
    ];

    let mut out = Vec::new();
    export_text(&entries, &mut out).expect("export");

    let expected =
        "[2024-03-01 09:15:00]\nfirst note\n[2024-03-02 18:00:30]\nline one\nline two\n";
    assert_eq!(String::from_utf8(out).expect("utf8"), expected);
}

#[cfg(feature = "pdf")]
#[test]
fn test_pdf_export_writes_pdf_file() {
    use diary_core::export::export_pdf;

    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("diary.pdf");

    let entries = vec![entry("2024-03-01 09:15:00", "first note")];
    export_pdf(&entries, &dest).expect("export");

    let bytes = std::fs::read(&dest).expect("read");
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn test_pdf_export_is_unavailable_without_feature() {
    use diary_core::export::export_pdf;
    use diary_core::DiaryError;

    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("diary.pdf");

    let result = export_pdf(&[], &dest);
    assert!(matches!(result, Err(DiaryError::ExportUnavailable)));
}
