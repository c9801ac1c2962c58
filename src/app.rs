//! App core for dlrenamer.
//!
//! Central struct holding the settings engine, pattern builder, and rename
//! engine, and hosting the download-interception entry point.

use crate::managers::pattern_builder::{PatternBuilder, PatternBuilderTrait};
use crate::services::rename_engine::{RenameEngine, RenameEngineTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::download::{DownloadEvent, RenameDecision};

/// Central application struct holding the engines and the builder state.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub pattern_builder: PatternBuilder,
    pub rename_engine: RenameEngine,
}

impl App {
    /// Creates a new App.
    ///
    /// If `config_path` is `Some`, settings are stored at that path; otherwise
    /// at the platform config directory. A missing settings file yields the
    /// documented defaults; an unreadable one is logged and ignored so the
    /// renamer still starts.
    pub fn new(config_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            eprintln!("failed to load settings, starting with defaults: {}", e);
        }

        let mut pattern_builder = PatternBuilder::new();
        pattern_builder.load_from(&settings_engine.get_settings().pattern_spec());

        Self {
            settings_engine,
            pattern_builder,
            rename_engine: RenameEngine::new(),
        }
    }

    /// Handles one host download-determination event.
    ///
    /// Invokes `suggest` exactly once with the decision, matching the host
    /// contract: the download must always be resolved, synchronously, within
    /// this call. The decision itself never errors (see `RenameEngine`).
    pub fn process_download<F: FnOnce(RenameDecision)>(&self, event: &DownloadEvent, suggest: F) {
        let decision = self
            .rename_engine
            .decide(self.settings_engine.get_settings(), event);
        suggest(decision);
    }

    /// Reloads the builder's token list from the current settings snapshot.
    /// Called after any settings write that may have replaced the pattern.
    pub fn sync_builder(&mut self) {
        let spec = self.settings_engine.get_settings().pattern_spec();
        self.pattern_builder.load_from(&spec);
    }
}
