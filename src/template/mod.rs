//! Template rendering for jumpto.
//!
//! This module handles:
//! - Placeholder expansion against the transform pipeline
//! - Loading template files from the project template directory

pub mod renderer;

pub use renderer::{NO_TEMPLATE_PLACEHOLDER, render};

use crate::error::{JumpError, Result};
use crate::settings::discover::template_dir;
use crate::settings::types::Template;
use std::path::Path;

/// Load a template file from the project template directory as lines.
///
/// The content is split on `\r?\n`, so a file with a trailing newline
/// yields a trailing empty line.
pub fn load_template_file(root: &Path, name: &str) -> Result<Template> {
	let path = template_dir(root).join(name);
	let content = std::fs::read_to_string(&path).map_err(|source| JumpError::TemplateReadError {
		path: path.clone(),
		source,
	})?;

	let lines = content
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
		.collect();

	Ok(Template::Lines(lines))
}
