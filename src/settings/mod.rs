//! Settings loading and parsing for jumpto.
//!
//! This module handles:
//! - `.projections.json` parsing
//! - Project-root discovery
//! - User-level default rules

pub mod discover;
pub mod init;
pub mod parser;
pub mod types;

pub use discover::{
	NO_USER_SETTINGS_ENV_VAR, SETTINGS_FILE, TEMPLATE_DIR, find_project_root, load_settings,
	merge_settings, settings_path, template_dir, user_settings_path,
};
pub use init::starter_settings;
pub use parser::{parse_settings_file, parse_settings_str};
pub use types::{Rule, Settings, Template};
