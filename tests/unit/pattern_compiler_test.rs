//! Unit tests for pattern compilation through the public API: both the
//! free-text literal mode and the builder-constructed ordered mode.

use chrono::{Local, TimeZone};
use dlrenamer::services::pattern_compiler::compile;
use dlrenamer::services::placeholder_resolver::PlaceholderValues;
use dlrenamer::types::download::DownloadEvent;
use dlrenamer::types::pattern::{PatternSpec, Placeholder, Separator};

/// Resolved values for `report.pdf` downloaded from `x.com` at noon on
/// 2024-01-01.
fn values() -> PlaceholderValues {
    let now = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let event = DownloadEvent::new("report.pdf", "https://x.com/files/report.pdf");
    PlaceholderValues::resolve_at(&event, now)
}

fn literal(text: &str) -> PatternSpec {
    PatternSpec::Literal {
        text: text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Literal mode
// ---------------------------------------------------------------------------

/// The canonical default template substitutes in place.
#[test]
fn test_literal_default_template() {
    assert_eq!(
        compile(&literal("{date}_{originalFilename}{ext}"), &values()),
        "20240101_report.pdf"
    );
}

/// Every placeholder of the vocabulary substitutes.
#[test]
fn test_literal_all_placeholders() {
    assert_eq!(
        compile(
            &literal("{date} {time} {timestamp} {domain} {originalFilename}{ext}"),
            &values()
        ),
        "20240101 120000 20240101-120000 x.com report.pdf"
    );
}

/// Unrecognized tokens are left verbatim, not treated as errors.
#[test]
fn test_literal_unknown_token_verbatim() {
    assert_eq!(compile(&literal("{foo}_{date}"), &values()), "{foo}_20240101");
}

/// Substituted values are not re-scanned for tokens (single pass).
#[test]
fn test_literal_single_pass() {
    let now = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let event = DownloadEvent::new("{date}.txt", "https://x.com/a");
    let tricky = PlaceholderValues::resolve_at(&event, now);
    assert_eq!(
        compile(&literal("{originalFilename}{ext}"), &tricky),
        "{date}.txt"
    );
}

/// Templates missing {originalFilename} or {ext} compile as-is; nothing is
/// force-appended.
#[test]
fn test_literal_without_ext_is_not_forced() {
    assert_eq!(compile(&literal("{date}-{domain}"), &values()), "20240101-x.com");
}

/// Empty template compiles to the empty string.
#[test]
fn test_empty_template() {
    assert_eq!(compile(&literal(""), &values()), "");
}

/// Plain text without any tokens passes through unchanged.
#[test]
fn test_literal_plain_text() {
    assert_eq!(compile(&literal("fixed-name.bin"), &values()), "fixed-name.bin");
}

// ---------------------------------------------------------------------------
// Ordered (builder) mode
// ---------------------------------------------------------------------------

/// Builder-mode joining: token values joined by the separator, extension
/// appended unseparated at the end.
#[test]
fn test_ordered_join_with_trailing_ext() {
    let spec = PatternSpec::Ordered {
        tokens: vec![Placeholder::Domain, Placeholder::Date, Placeholder::Ext],
        separator: Separator::Hyphen,
    };
    assert_eq!(compile(&spec, &values()), "x.com-20240101.pdf");
}

/// The empty separator joins values directly.
#[test]
fn test_ordered_empty_separator() {
    let spec = PatternSpec::Ordered {
        tokens: vec![
            Placeholder::Timestamp,
            Placeholder::OriginalFilename,
            Placeholder::Ext,
        ],
        separator: Separator::None,
    };
    assert_eq!(compile(&spec, &values()), "20240101-120000report.pdf");
}

/// A list without a trailing extension token gets no extension appended.
#[test]
fn test_ordered_without_ext() {
    let spec = PatternSpec::Ordered {
        tokens: vec![Placeholder::Date, Placeholder::Time],
        separator: Separator::Dot,
    };
    assert_eq!(compile(&spec, &values()), "20240101.120000");
}

/// A single-token list has nothing to separate.
#[test]
fn test_ordered_single_token() {
    let spec = PatternSpec::Ordered {
        tokens: vec![Placeholder::OriginalFilename, Placeholder::Ext],
        separator: Separator::Underscore,
    };
    assert_eq!(compile(&spec, &values()), "report.pdf");
}

// ---------------------------------------------------------------------------
// Mode classification through parse
// ---------------------------------------------------------------------------

/// Adjacent placeholders with no literal text classify as ordered and honor
/// the separator; a template with literal text ignores the separator.
#[test]
fn test_parse_then_compile_mode_split() {
    let ordered = PatternSpec::parse("{domain}{date}{ext}", Separator::Hyphen);
    assert_eq!(compile(&ordered, &values()), "x.com-20240101.pdf");

    let with_text = PatternSpec::parse("dl_{domain}{date}{ext}", Separator::Hyphen);
    assert_eq!(compile(&with_text, &values()), "dl_x.com20240101.pdf");
}
