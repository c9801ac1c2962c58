use serde::{Deserialize, Serialize};

use super::pattern::{PatternSpec, Separator};

/// Default renaming pattern applied when no pattern key is stored.
pub const DEFAULT_PATTERN: &str = "{date}_{originalFilename}{ext}";

/// Default separator for builder-constructed patterns.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Persisted renamer settings: a flat, independently-overwritable key set.
///
/// `pattern` and `separator` are stored in their string forms; the tagged
/// [`PatternSpec`] view is derived on demand via [`pattern_spec`].
/// Missing keys deserialize to the documented defaults.
///
/// [`pattern_spec`]: RenamerSettings::pattern_spec
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenamerSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_enabled() -> bool {
    true
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for RenamerSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            pattern: default_pattern(),
            separator: default_separator(),
        }
    }
}

impl RenamerSettings {
    /// Classifies the stored template into the tagged pattern representation.
    /// An unrecognized stored separator falls back to the default underscore.
    pub fn pattern_spec(&self) -> PatternSpec {
        let separator = Separator::parse(&self.separator).unwrap_or(Separator::Underscore);
        PatternSpec::parse(&self.pattern, separator)
    }
}
