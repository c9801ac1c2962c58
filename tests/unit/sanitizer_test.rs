//! Unit tests for filename sanitization.
//!
//! The sanitizer must strip every filesystem-illegal character, leave clean
//! names untouched, and be idempotent.

use dlrenamer::services::sanitizer::sanitize_filename;
use rstest::rstest;

/// Each illegal character is replaced by an underscore, one for one.
#[rstest]
#[case("a/b.txt", "a_b.txt")]
#[case("a\\b.txt", "a_b.txt")]
#[case("a:b.txt", "a_b.txt")]
#[case("a*b.txt", "a_b.txt")]
#[case("a?b.txt", "a_b.txt")]
#[case("a\"b.txt", "a_b.txt")]
#[case("a<b.txt", "a_b.txt")]
#[case("a>b.txt", "a_b.txt")]
#[case("a|b.txt", "a_b.txt")]
fn test_each_illegal_char_becomes_underscore(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(sanitize_filename(input), expected);
}

/// A name with no illegal characters comes back unchanged (identity).
#[rstest]
#[case("report.pdf")]
#[case("archive.tar.gz")]
#[case(".bashrc")]
#[case("file with spaces.txt")]
#[case("")]
fn test_clean_names_are_identity(#[case] input: &str) {
    assert_eq!(sanitize_filename(input), input);
}

/// Sanitizing twice gives the same result as sanitizing once.
#[test]
fn test_idempotence_on_dirty_name() {
    let dirty = "a/b\\c:d*e?f\"g<h>i|j.txt";
    let once = sanitize_filename(dirty);
    assert_eq!(sanitize_filename(&once), once);
}

/// All nine illegal characters are handled in a single name.
#[test]
fn test_full_character_class() {
    assert_eq!(
        sanitize_filename("/\\:*?\"<>|"),
        "_________",
        "all nine illegal characters must map to underscores"
    );
}
