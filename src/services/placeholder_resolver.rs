//! Placeholder resolution for download events.
//!
//! Computes the per-event placeholder map (`date`, `time`, `timestamp`,
//! `domain`, `originalFilename`, `ext`) from the download event and the
//! current local instant. Every resolver is total: malformed input resolves
//! to a sentinel value rather than an error.

use chrono::{DateTime, Local};
use url::Url;

use crate::types::download::DownloadEvent;
use crate::types::pattern::Placeholder;

/// Domain value substituted when the source URL cannot be parsed or has no host.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// The resolved placeholder map for one download event.
/// Ephemeral: computed once per event, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderValues {
    pub date: String,
    pub time: String,
    pub timestamp: String,
    pub domain: String,
    pub original_filename: String,
    pub ext: String,
}

impl PlaceholderValues {
    /// Resolves placeholders against the current local instant.
    pub fn resolve(event: &DownloadEvent) -> Self {
        Self::resolve_at(event, Local::now())
    }

    /// Resolves placeholders against an explicit instant. The split from
    /// [`resolve`](Self::resolve) keeps date and time output testable.
    pub fn resolve_at(event: &DownloadEvent, now: DateTime<Local>) -> Self {
        let date = now.format("%Y%m%d").to_string();
        let time = now.format("%H%M%S").to_string();
        let timestamp = format!("{}-{}", date, time);
        let (name, ext) = split_filename(&event.filename);

        Self {
            date,
            time,
            timestamp,
            domain: extract_domain(&event.url),
            original_filename: name.to_string(),
            ext: ext.to_string(),
        }
    }

    /// The resolved value for a single placeholder.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Date => &self.date,
            Placeholder::Time => &self.time,
            Placeholder::Timestamp => &self.timestamp,
            Placeholder::Domain => &self.domain,
            Placeholder::OriginalFilename => &self.original_filename,
            Placeholder::Ext => &self.ext,
        }
    }
}

/// Extracts the hostname from a URL, or [`UNKNOWN_DOMAIN`] when the URL is
/// malformed or host-less (`data:`, `file:` and the like). Never fails.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string()),
        Err(_) => UNKNOWN_DOMAIN.to_string(),
    }
}

/// Splits a filename at its last dot.
///
/// With no dot, or with the dot at index 0 (hidden-file convention), the whole
/// string is the name and the extension is empty. Otherwise the extension
/// includes the leading dot.
pub fn split_filename(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(index) if index > 0 => filename.split_at(index),
        _ => (filename, ""),
    }
}
