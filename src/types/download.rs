use serde::{Deserialize, Serialize};

/// A download-determination event supplied by the host browser.
/// Read-only input; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadEvent {
    pub filename: String,
    pub url: String,
}

impl DownloadEvent {
    pub fn new(filename: &str, url: &str) -> Self {
        Self {
            filename: filename.to_string(),
            url: url.to_string(),
        }
    }
}

/// Outcome of a rename decision, mirroring the host callback contract:
/// suggest a new filename, or suggest nothing and keep the original.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameDecision {
    Keep,
    Rename(String),
}

impl RenameDecision {
    /// The filename the host ends up using, given the event's original name.
    pub fn resolved<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            RenameDecision::Keep => original,
            RenameDecision::Rename(name) => name,
        }
    }
}
