use crate::config::types::*;
use crate::constants::EQUIVALENCES_FILENAME;
use crate::diff::context::DiffOptions;

// Export and Objects derive Default: every toggle off, no patterns.

impl Default for Config {
    fn default() -> Self {
        Self {
            diff: DiffOptions::default(),
            equivalences_file: EQUIVALENCES_FILENAME.to_string(),
            substitutions: SubstitutionSettings::default(),
            export: Export::default(),
            objects: Objects::default(),
        }
    }
}

impl Default for SubstitutionSettings {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            save_new: false,
        }
    }
}
