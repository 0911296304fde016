use crate::error::{JumpError, Result};
use crate::settings::parser::parse_settings_file;
use crate::settings::types::Settings;
use std::path::{Path, PathBuf};

/// Name of the per-project settings file.
pub const SETTINGS_FILE: &str = ".projections.json";

/// Template directory, relative to the project root.
pub const TEMPLATE_DIR: &str = ".vscode/jumpto/templates";

/// Environment variable that, if truthy, skips the ~/.projections.json
/// lookup. Useful for CI environments.
pub const NO_USER_SETTINGS_ENV_VAR: &str = "JUMPTO_NO_USER_SETTINGS";

/// Find the project root by walking up from `start_dir` until a directory
/// containing the settings file is found.
pub fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		if current_dir.join(SETTINGS_FILE).exists() {
			return Some(current_dir);
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			return None;
		}
	}
}

/// Path of the settings file under a project root.
pub fn settings_path(root: &Path) -> PathBuf {
	root.join(SETTINGS_FILE)
}

/// Path of the template directory under a project root.
pub fn template_dir(root: &Path) -> PathBuf {
	root.join(TEMPLATE_DIR)
}

/// Get the path to the user's settings file.
pub fn user_settings_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(JumpError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(SETTINGS_FILE))
}

/// Load the effective settings for a project root.
///
/// User-level rules act as defaults underneath the project file; a project
/// rule with the same pattern replaces the user one. A missing project file
/// yields the user rules alone (or an empty table).
pub fn load_settings(root: &Path) -> Result<Settings> {
	let path = settings_path(root);
	let project = if path.exists() {
		parse_settings_file(&path)?
	} else {
		Settings::default()
	};

	let user = load_user_settings()?;
	Ok(merge_settings(user, project))
}

/// Load the user's ~/.projections.json if present and not disabled.
fn load_user_settings() -> Result<Option<Settings>> {
	if is_env_truthy(NO_USER_SETTINGS_ENV_VAR) {
		return Ok(None);
	}

	let Some(home_dir) = dirs::home_dir() else {
		return Ok(None);
	};

	let path = home_dir.join(SETTINGS_FILE);
	if path.exists() {
		Ok(Some(parse_settings_file(&path)?))
	} else {
		Ok(None)
	}
}

/// Merge user defaults underneath project rules (project keys win).
pub fn merge_settings(user: Option<Settings>, project: Settings) -> Settings {
	let mut merged = user.unwrap_or_default();
	merged.rules.extend(project.rules);
	merged
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
