use inflector::Inflector;
use std::path::{Component, Path, PathBuf};

/// Paths available to the path-reading transforms, built once per match.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
	/// The project root, absolute.
	pub root_path: PathBuf,

	/// The file the jump started from, absolute.
	pub source_file: PathBuf,

	/// The alternate file being resolved, absolute.
	pub alternate_file: PathBuf,
}

/// A named string transform usable inside template placeholders.
///
/// The separator transforms substitute only the first occurrence of their
/// target character; captures spanning several separators keep the rest
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
	Dot,
	Underscore,
	Backlash,
	Colons,
	Hyphenate,
	Blank,
	Uppercase,
	Lowercase,
	Snakecase,
	Camelcase,
	Capitalize,
	Singular,
	Plural,
	Dirname,
	Basename,
	Relative,
	File,
	Project,
	Open,
	Close,
	/// Fallback for unrecognized names; passes the value through unchanged.
	Identity,
}

impl Transform {
	/// Look up a transform by its placeholder name.
	///
	/// Unknown names resolve to `Identity`, never an error.
	pub fn from_name(name: &str) -> Self {
		match name {
			"dot" => Transform::Dot,
			"underscore" => Transform::Underscore,
			"backlash" => Transform::Backlash,
			"colons" => Transform::Colons,
			"hyphenate" => Transform::Hyphenate,
			"blank" => Transform::Blank,
			"uppercase" => Transform::Uppercase,
			"lowercase" => Transform::Lowercase,
			"snakecase" => Transform::Snakecase,
			"camelcase" => Transform::Camelcase,
			"capitalize" => Transform::Capitalize,
			"singular" => Transform::Singular,
			"plural" => Transform::Plural,
			"dirname" => Transform::Dirname,
			"basename" => Transform::Basename,
			"relative" => Transform::Relative,
			"file" => Transform::File,
			"project" => Transform::Project,
			"open" => Transform::Open,
			"close" => Transform::Close,
			_ => Transform::Identity,
		}
	}

	/// Apply this transform to a value.
	///
	/// The path-reading transforms (`dirname` through `project`) take their
	/// output from the resolution context and ignore the piped value.
	pub fn apply(self, value: &str, ctx: &ResolutionContext) -> String {
		match self {
			Transform::Dot => value.replacen('/', ".", 1),
			Transform::Underscore => value.replacen('/', "_", 1),
			Transform::Backlash => value.replacen('/', "\\", 1),
			Transform::Colons => value.replacen('/', "::", 1),
			Transform::Hyphenate => value.replacen('_', "-", 1),
			Transform::Blank => value.replacen('_', " ", 1).replacen('-', " ", 1),
			Transform::Uppercase => value.to_uppercase(),
			Transform::Lowercase => value.to_lowercase(),
			Transform::Snakecase => value.to_snake_case(),
			Transform::Camelcase => value.to_camel_case(),
			Transform::Capitalize => capitalize(value),
			// Reserved names, currently pass-throughs.
			Transform::Singular | Transform::Plural => value.to_string(),
			Transform::Dirname => parent_display(&ctx.source_file),
			Transform::Basename => file_stem_display(&ctx.source_file),
			Transform::Relative => {
				parent_display(&relative_path(&ctx.alternate_file, &ctx.source_file))
			}
			Transform::File => ctx.alternate_file.display().to_string(),
			Transform::Project => ctx.root_path.display().to_string(),
			Transform::Open => "{".to_string(),
			Transform::Close => "}".to_string(),
			Transform::Identity => value.to_string(),
		}
	}
}

/// Apply a `|`-separated chain of transform names to a seed value,
/// left to right. Names are looked up untrimmed.
pub fn apply_pipeline(names: &str, seed: &str, ctx: &ResolutionContext) -> String {
	names.split('|').fold(seed.to_string(), |value, name| {
		Transform::from_name(name).apply(&value, ctx)
	})
}

/// First character uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
		None => String::new(),
	}
}

fn parent_display(path: &Path) -> String {
	path.parent()
		.map(|p| p.display().to_string())
		.unwrap_or_default()
}

fn file_stem_display(path: &Path) -> String {
	path.file_stem()
		.map(|s| s.to_string_lossy().to_string())
		.unwrap_or_default()
}

/// Compute the relative path from `from` to `to`.
///
/// Both arguments are treated as entries to step out of / into, so the
/// result `..`-steps over `from` itself, then descends into `to`.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
	let from_parts: Vec<Component> = from.components().collect();
	let to_parts: Vec<Component> = to.components().collect();

	let common = from_parts
		.iter()
		.zip(to_parts.iter())
		.take_while(|(a, b)| a == b)
		.count();

	let mut rel = PathBuf::new();
	for _ in common..from_parts.len() {
		rel.push("..");
	}
	for part in &to_parts[common..] {
		rel.push(part);
	}
	rel
}
