//! Filesystem-safe filename sanitization.

/// Characters illegal in filenames on at least one supported platform.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replaces every filesystem-illegal character with `_`.
///
/// Total and idempotent: never fails, and an already-clean name comes back
/// unchanged.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
