//! Unit tests for placeholder resolution: filename splitting, domain
//! extraction, and date/time formatting against a fixed instant.

use chrono::{Local, TimeZone};
use dlrenamer::services::placeholder_resolver::{
    extract_domain, split_filename, PlaceholderValues, UNKNOWN_DOMAIN,
};
use dlrenamer::types::download::DownloadEvent;
use rstest::rstest;

// ---------------------------------------------------------------------------
// split_filename
// ---------------------------------------------------------------------------

/// The split happens at the last dot; the extension keeps its leading dot.
/// No dot, or a dot in first position (hidden files), means no extension.
#[rstest]
#[case("archive.tar.gz", "archive.tar", ".gz")]
#[case(".bashrc", ".bashrc", "")]
#[case("noext", "noext", "")]
#[case("report.pdf", "report", ".pdf")]
#[case("trailing.", "trailing", ".")]
#[case("", "", "")]
fn test_split_filename(#[case] input: &str, #[case] name: &str, #[case] ext: &str) {
    assert_eq!(split_filename(input), (name, ext));
}

// ---------------------------------------------------------------------------
// extract_domain
// ---------------------------------------------------------------------------

/// Hostname comes straight from the parsed URL; ports and paths are dropped.
#[rstest]
#[case("https://example.com/a/b", "example.com")]
#[case("http://sub.example.co.uk/x?q=1", "sub.example.co.uk")]
#[case("https://example.com:8443/dl", "example.com")]
fn test_extract_domain_valid(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(extract_domain(url), expected);
}

/// Anything unparseable or host-less resolves to the sentinel, never an error.
#[rstest]
#[case("not a url")]
#[case("")]
#[case("://missing-scheme")]
#[case("data:text/plain,hello")]
fn test_extract_domain_fallback(#[case] url: &str) {
    assert_eq!(extract_domain(url), UNKNOWN_DOMAIN);
}

// ---------------------------------------------------------------------------
// Full resolution
// ---------------------------------------------------------------------------

/// Date is YYYYMMDD, time is HHMMSS, both zero-padded, and the timestamp is
/// their hyphen join.
#[test]
fn test_resolution_at_fixed_instant() {
    let now = Local.with_ymd_and_hms(2024, 3, 7, 8, 9, 5).unwrap();
    let event = DownloadEvent::new("invoice.March.pdf", "https://billing.example.com/dl/42");
    let values = PlaceholderValues::resolve_at(&event, now);

    assert_eq!(values.date, "20240307");
    assert_eq!(values.time, "080905");
    assert_eq!(values.timestamp, "20240307-080905");
    assert_eq!(values.domain, "billing.example.com");
    assert_eq!(values.original_filename, "invoice.March");
    assert_eq!(values.ext, ".pdf");
}

/// Resolution never fails, even for a fully degenerate event.
#[test]
fn test_resolution_of_degenerate_event() {
    let now = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let event = DownloadEvent::new("", "");
    let values = PlaceholderValues::resolve_at(&event, now);

    assert_eq!(values.domain, UNKNOWN_DOMAIN);
    assert_eq!(values.original_filename, "");
    assert_eq!(values.ext, "");
    assert_eq!(values.timestamp, "20241231-235959");
}
