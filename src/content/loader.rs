//! Loader for the RON settings file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::SettingsDef;

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate settings from file contents.
pub(crate) fn parse_settings(
    contents: &str,
    file: &str,
) -> Result<SettingsDef, SettingsLoadError> {
    let def: SettingsDef = ron_options()
        .from_str(contents)
        .map_err(|e| SettingsLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    def.validate().map_err(|message| SettingsLoadError {
        file: file.to_string(),
        message,
    })?;

    Ok(def)
}

/// Load the settings file from disk.
pub fn load_settings(path: &Path) -> Result<SettingsDef, SettingsLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| SettingsLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&contents, &file_name)
}
