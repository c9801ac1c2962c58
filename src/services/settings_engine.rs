// dlrenamer settings engine
// Manages user settings: loading, saving, updating individual keys, resetting
// to defaults, and notifying subscribers of changes.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::pattern::Separator;
use crate::types::settings::RenamerSettings;

/// Callback invoked with the new settings snapshot after every successful write.
/// This is the crate's rendition of the host storage change notification: UI
/// surfaces race only through these writes, last write wins, next read sees it.
pub type ChangeListener = Box<dyn Fn(&RenamerSettings) + Send>;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<RenamerSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &RenamerSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn replace(&mut self, settings: RenamerSettings) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn subscribe(&mut self, listener: ChangeListener) -> Uuid;
    fn unsubscribe(&mut self, id: &Uuid) -> bool;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: RenamerSettings,
    listeners: Vec<(Uuid, ChangeListener)>,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: RenamerSettings::default(),
            listeners: Vec::new(),
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.settings);
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings. Missing keys in
    /// an existing file take their documented defaults. A malformed file is a
    /// serialization error.
    fn load(&mut self) -> Result<RenamerSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = RenamerSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: RenamerSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory settings snapshot.
    fn get_settings(&self) -> &RenamerSettings {
        &self.settings
    }

    /// Updates one of the flat settings keys: `enabled`, `pattern`, or
    /// `separator`. Persists to disk and notifies subscribers on success.
    ///
    /// A separator outside the fixed set is rejected; patterns are stored
    /// verbatim (token stripping and shape classification happen at use time).
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut updated = self.settings.clone();
        match key {
            "enabled" => {
                updated.enabled = value.as_bool().ok_or_else(|| {
                    SettingsError::InvalidValue(format!("'enabled' expects a boolean, got {}", value))
                })?;
            }
            "pattern" => {
                updated.pattern = value
                    .as_str()
                    .ok_or_else(|| {
                        SettingsError::InvalidValue(format!(
                            "'pattern' expects a string, got {}",
                            value
                        ))
                    })?
                    .to_string();
            }
            "separator" => {
                let s = value.as_str().ok_or_else(|| {
                    SettingsError::InvalidValue(format!(
                        "'separator' expects a string, got {}",
                        value
                    ))
                })?;
                if Separator::parse(s).is_none() {
                    return Err(SettingsError::InvalidValue(format!(
                        "'{}' is not a recognized separator",
                        s
                    )));
                }
                updated.separator = s.to_string();
            }
            other => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    other
                )));
            }
        }

        self.settings = updated;
        self.save()?;
        self.notify();
        Ok(())
    }

    /// Replaces the whole snapshot in one write (one save, one notification).
    /// Used when the builder saves pattern and separator together.
    fn replace(&mut self, settings: RenamerSettings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.save()?;
        self.notify();
        Ok(())
    }

    /// Resets all settings to factory defaults, saves, and notifies.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = RenamerSettings::default();
        self.save()?;
        self.notify();
        Ok(())
    }

    /// Registers a change listener; the returned id unsubscribes it later.
    fn subscribe(&mut self, listener: ChangeListener) -> Uuid {
        let id = Uuid::new_v4();
        self.listeners.push((id, listener));
        id
    }

    /// Removes a change listener. Returns whether it was registered.
    fn unsubscribe(&mut self, id: &Uuid) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| listener_id != id);
        self.listeners.len() != before
    }

    /// Returns the path to the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
