use std::path::PathBuf;

/// Library-level structured errors for jumpto.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum JumpError {
	#[error("Failed to read settings file: {path}")]
	SettingsReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	SettingsParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Invalid rule pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read template file: {path}")]
	TemplateReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create directory: {path}")]
	DirCreateError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write alternate file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Source file is not under the project root: {path}")]
	OutsideProjectRoot { path: PathBuf },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using JumpError.
pub type Result<T> = std::result::Result<T, JumpError>;
