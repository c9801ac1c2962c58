//! Rename decision orchestration.
//!
//! A pure function over an explicitly passed settings snapshot: resolve
//! placeholders, compile the pattern, sanitize, suggest. Never errors — a
//! degenerate result falls back to keeping the original filename so the host
//! download is always resolved.

use chrono::{DateTime, Local};

use crate::services::pattern_compiler;
use crate::services::placeholder_resolver::PlaceholderValues;
use crate::services::sanitizer::sanitize_filename;
use crate::types::download::{DownloadEvent, RenameDecision};
use crate::types::settings::RenamerSettings;

/// Trait defining the rename engine interface.
pub trait RenameEngineTrait {
    fn decide(&self, settings: &RenamerSettings, event: &DownloadEvent) -> RenameDecision;
    fn decide_at(
        &self,
        settings: &RenamerSettings,
        event: &DownloadEvent,
        now: DateTime<Local>,
    ) -> RenameDecision;
}

/// Stateless rename engine. All inputs arrive as arguments so decisions are
/// reproducible and testable without any shared mutable settings mirror.
pub struct RenameEngine;

impl RenameEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RenameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameEngineTrait for RenameEngine {
    /// Decides against the current local instant.
    fn decide(&self, settings: &RenamerSettings, event: &DownloadEvent) -> RenameDecision {
        self.decide_at(settings, event, Local::now())
    }

    /// Decides against an explicit instant (tests, options-page preview).
    ///
    /// Disabled renaming keeps the original name. Otherwise the pipeline runs
    /// resolve → compile → sanitize; an empty compiled name falls back to the
    /// original, logged for diagnostics only, and a name identical to the
    /// original is reported as `Keep`.
    fn decide_at(
        &self,
        settings: &RenamerSettings,
        event: &DownloadEvent,
        now: DateTime<Local>,
    ) -> RenameDecision {
        if !settings.enabled {
            return RenameDecision::Keep;
        }

        let values = PlaceholderValues::resolve_at(event, now);
        let compiled = pattern_compiler::compile(&settings.pattern_spec(), &values);
        let sanitized = sanitize_filename(&compiled);

        if sanitized.is_empty() {
            eprintln!(
                "rename of '{}' fell back to the original name: pattern '{}' compiled to an empty string",
                event.filename, settings.pattern
            );
            return RenameDecision::Keep;
        }

        if sanitized == event.filename {
            return RenameDecision::Keep;
        }

        RenameDecision::Rename(sanitized)
    }
}
