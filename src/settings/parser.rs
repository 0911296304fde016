use crate::error::{JumpError, Result};
use crate::settings::types::Settings;
use std::path::Path;

/// Parse a settings file from the given path.
pub fn parse_settings_file(path: &Path) -> Result<Settings> {
	let content = std::fs::read_to_string(path).map_err(|source| JumpError::SettingsReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_settings_str(&content, path)
}

/// Parse settings from a string (useful for testing).
pub fn parse_settings_str(content: &str, path: &Path) -> Result<Settings> {
	serde_json::from_str(content).map_err(|source| JumpError::SettingsParseError {
		path: path.to_path_buf(),
		source,
	})
}
