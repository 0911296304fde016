//! Alternate-file resolution for jumpto.
//!
//! This module handles:
//! - Matching the source path against every configured rule
//! - Deriving candidate alternate paths
//! - Creating missing alternates, seeded from rendered templates
//! - Handing alternates to the editor host for display

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{JumpError, Result};
use crate::host::{EditorHost, target_column};
use crate::rules::matcher::{collect_matches, match_pattern};
use crate::rules::transform::ResolutionContext;
use crate::settings::types::{Settings, Template};
use crate::template::{NO_TEMPLATE_PLACEHOLDER, load_template_file, render};

/// One resolved alternate for a single rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlternate {
	/// Path relative to the project root.
	pub relative_path: String,

	/// Absolute path handed to the host.
	pub absolute_path: PathBuf,

	/// Whether the file was created by this resolution pass.
	pub created: bool,
}

/// Outcome of one resolution pass over all rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionOutcome {
	/// Alternates opened, in rule evaluation order.
	pub alternates: Vec<ResolvedAlternate>,

	/// Candidates skipped because they resolved to the source path itself.
	pub skipped: Vec<String>,
}

/// Resolve and open every alternate of `source_file`.
///
/// Every rule is evaluated; a source matching several rules opens several
/// alternates. A missing alternate is created first, seeded from a rendered
/// template when one is configured for the candidate path. Existing files
/// are never overwritten.
pub fn resolve_alternates(
	settings: &Settings,
	root: &Path,
	source_file: &Path,
	host: &mut dyn EditorHost,
) -> Result<ResolutionOutcome> {
	let source_rel = relative_to_root(root, source_file)?;
	let matches = collect_matches(settings, &source_rel)?;

	let mut outcome = ResolutionOutcome::default();
	// Template files are read once per pass and reused across matches,
	// keyed by the rule entry that references them.
	let mut template_cache: HashMap<String, Template> = HashMap::new();

	for m in matches {
		let Some(alternate) = m.rule.alternate.as_deref() else {
			continue;
		};

		let captured = m.captured.as_deref();
		let candidate_rel = alternate.replacen("{}", captured.unwrap_or(""), 1);

		if candidate_rel == source_rel {
			outcome.skipped.push(candidate_rel);
			continue;
		}

		let candidate_abs = root.join(&candidate_rel);
		let ctx = ResolutionContext {
			root_path: root.to_path_buf(),
			source_file: source_file.to_path_buf(),
			alternate_file: candidate_abs.clone(),
		};

		let created = if candidate_abs.exists() {
			false
		} else {
			let content = resolve_template(
				settings,
				&candidate_rel,
				captured,
				&ctx,
				root,
				&mut template_cache,
			)?;
			create_alternate(&candidate_abs, content.as_deref())?;
			host.show_info(&format!("Alternate file created: {candidate_rel}"));
			true
		};

		let column = target_column(host.active_view_column());
		host.open_document(&candidate_abs, column);

		outcome.alternates.push(ResolvedAlternate {
			relative_path: candidate_rel,
			absolute_path: candidate_abs,
			created,
		});
	}

	Ok(outcome)
}

/// Find initial content for a missing candidate by re-matching the
/// candidate path against the rule table.
///
/// The first rule matching the candidate with a usable template wins
/// (`templateFile` over inline `template`). A rule matching without one
/// yields the fixed placeholder comment; no matching rule at all yields an
/// empty file.
fn resolve_template(
	settings: &Settings,
	candidate_rel: &str,
	captured: Option<&str>,
	ctx: &ResolutionContext,
	root: &Path,
	cache: &mut HashMap<String, Template>,
) -> Result<Option<String>> {
	let mut any_match = false;

	for (pattern, rule) in &settings.rules {
		if match_pattern(candidate_rel, pattern)?.is_none() {
			continue;
		}
		any_match = true;

		if let Some(name) = rule.template_file.as_deref() {
			let template = match cache.get(pattern) {
				Some(template) => template.clone(),
				None => {
					let template = load_template_file(root, name)?;
					cache.insert(pattern.to_string(), template.clone());
					template
				}
			};
			return Ok(Some(render(&template, captured, ctx)));
		}

		if let Some(template) = rule.template.as_ref() {
			return Ok(Some(render(template, captured, ctx)));
		}
	}

	Ok(any_match.then(|| NO_TEMPLATE_PLACEHOLDER.to_string()))
}

/// Create the alternate file, appending the rendered content if any.
fn create_alternate(path: &Path, content: Option<&str>) -> Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).map_err(|source| JumpError::DirCreateError {
			path: parent.to_path_buf(),
			source,
		})?;
	}

	let mut file = std::fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|source| JumpError::FileWriteError {
			path: path.to_path_buf(),
			source,
		})?;

	if let Some(content) = content {
		file.write_all(content.as_bytes())
			.map_err(|source| JumpError::FileWriteError {
				path: path.to_path_buf(),
				source,
			})?;
	}

	Ok(())
}

/// Express the source path relative to the project root, as a string the
/// rule patterns can match.
fn relative_to_root(root: &Path, source_file: &Path) -> Result<String> {
	let rel = source_file
		.strip_prefix(root)
		.map_err(|_| JumpError::OutsideProjectRoot {
			path: source_file.to_path_buf(),
		})?;

	Ok(rel.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::ViewColumn;
	use crate::settings::parser::parse_settings_str;

	#[derive(Debug, Default)]
	struct RecordingHost {
		active: Option<ViewColumn>,
		opened: Vec<(PathBuf, ViewColumn)>,
		messages: Vec<String>,
	}

	impl EditorHost for RecordingHost {
		fn active_view_column(&self) -> ViewColumn {
			self.active.unwrap_or(ViewColumn::One)
		}

		fn open_document(&mut self, path: &Path, column: ViewColumn) {
			self.opened.push((path.to_path_buf(), column));
		}

		fn show_info(&mut self, message: &str) {
			self.messages.push(message.to_string());
		}
	}

	fn settings(json: &str) -> Settings {
		parse_settings_str(json, Path::new("test.json")).unwrap()
	}

	fn project() -> tempfile::TempDir {
		tempfile::tempdir().unwrap()
	}

	#[test]
	fn test_creates_missing_alternate_without_template() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("controllers")).unwrap();
		std::fs::write(root.join("controllers/user.js"), "// user").unwrap();

		let settings = settings(r#"{"controllers/*.js": {"alternate": "test/{}.test.js"}}"#);
		let mut host = RecordingHost::default();

		let outcome = resolve_alternates(
			&settings,
			root,
			&root.join("controllers/user.js"),
			&mut host,
		)
		.unwrap();

		assert_eq!(outcome.alternates.len(), 1);
		let alt = &outcome.alternates[0];
		assert_eq!(alt.relative_path, "test/user.test.js");
		assert!(alt.created);

		// No rule matches the candidate, so the file is created empty.
		let content = std::fs::read_to_string(root.join("test/user.test.js")).unwrap();
		assert_eq!(content, "");

		assert_eq!(host.messages, vec!["Alternate file created: test/user.test.js"]);
		assert_eq!(host.opened.len(), 1);
		assert_eq!(host.opened[0].1, ViewColumn::Two);
	}

	#[test]
	fn test_existing_alternate_is_opened_untouched() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("controllers")).unwrap();
		std::fs::create_dir_all(root.join("test")).unwrap();
		std::fs::write(root.join("controllers/user.js"), "// user").unwrap();
		std::fs::write(root.join("test/user.test.js"), "// existing").unwrap();

		let settings = settings(r#"{"controllers/*.js": {"alternate": "test/{}.test.js"}}"#);
		let mut host = RecordingHost::default();

		let outcome = resolve_alternates(
			&settings,
			root,
			&root.join("controllers/user.js"),
			&mut host,
		)
		.unwrap();

		assert!(!outcome.alternates[0].created);
		assert!(host.messages.is_empty());
		assert_eq!(
			std::fs::read_to_string(root.join("test/user.test.js")).unwrap(),
			"// existing"
		);
		assert_eq!(host.opened.len(), 1);
	}

	#[test]
	fn test_candidate_equal_to_source_is_skipped() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/x.js"), "").unwrap();

		let settings = settings(r#"{"*": {"alternate": "{}"}}"#);
		let mut host = RecordingHost::default();

		let outcome =
			resolve_alternates(&settings, root, &root.join("src/x.js"), &mut host).unwrap();

		assert!(outcome.alternates.is_empty());
		assert_eq!(outcome.skipped, vec!["src/x.js"]);
		assert!(host.opened.is_empty());
		assert!(host.messages.is_empty());
	}

	#[test]
	fn test_rule_without_alternate_is_ignored() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/x.js"), "").unwrap();

		let settings = settings(r#"{"src/*.js": {"template": ["x"]}}"#);
		let mut host = RecordingHost::default();

		let outcome =
			resolve_alternates(&settings, root, &root.join("src/x.js"), &mut host).unwrap();

		assert!(outcome.alternates.is_empty());
		assert!(host.opened.is_empty());
	}

	#[test]
	fn test_created_alternate_rendered_from_matching_rule_template() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/user.js"), "").unwrap();

		let settings = settings(
			r#"{
				"src/*.js": { "alternate": "test/{}.test.js" },
				"test/*.test.js": {
					"alternate": "src/{}.js",
					"template": ["describe('{camelcase}', () => {open}", "{close});"]
				}
			}"#,
		);
		let mut host = RecordingHost::default();

		resolve_alternates(&settings, root, &root.join("src/user.js"), &mut host).unwrap();

		let content = std::fs::read_to_string(root.join("test/user.test.js")).unwrap();
		assert_eq!(content, "describe('user', () => {\n});");
	}

	#[test]
	fn test_candidate_matching_templateless_rule_gets_placeholder() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/user.js"), "").unwrap();

		let settings = settings(
			r#"{
				"src/*.js": { "alternate": "test/{}.test.js" },
				"test/*.test.js": { "alternate": "src/{}.js" }
			}"#,
		);
		let mut host = RecordingHost::default();

		resolve_alternates(&settings, root, &root.join("src/user.js"), &mut host).unwrap();

		let content = std::fs::read_to_string(root.join("test/user.test.js")).unwrap();
		assert_eq!(content, NO_TEMPLATE_PLACEHOLDER);
	}

	#[test]
	fn test_multiple_matching_rules_open_multiple_alternates() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("controllers")).unwrap();
		std::fs::write(root.join("controllers/user.js"), "").unwrap();

		let settings = settings(
			r#"{
				"controllers/*.js": { "alternate": "test/{}.test.js" },
				"controllers/user.js": { "alternate": "docs/user.md" }
			}"#,
		);
		let mut host = RecordingHost::default();

		let outcome = resolve_alternates(
			&settings,
			root,
			&root.join("controllers/user.js"),
			&mut host,
		)
		.unwrap();

		assert_eq!(outcome.alternates.len(), 2);
		assert!(root.join("test/user.test.js").exists());
		assert!(root.join("docs/user.md").exists());
		assert_eq!(host.opened.len(), 2);
	}

	#[test]
	fn test_template_file_renders_and_is_cached() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/user.js"), "").unwrap();

		let dir = root.join(".vscode/jumpto/templates");
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("spec.js"), "test('{}')").unwrap();

		let settings = settings(
			r#"{
				"src/*.js": { "alternate": "test/{}.test.js" },
				"test/*.test.js": { "templateFile": "spec.js" }
			}"#,
		);
		let mut host = RecordingHost::default();

		resolve_alternates(&settings, root, &root.join("src/user.js"), &mut host).unwrap();

		let content = std::fs::read_to_string(root.join("test/user.test.js")).unwrap();
		assert_eq!(content, "test('user')");
	}

	#[test]
	fn test_missing_template_file_is_an_error() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/user.js"), "").unwrap();

		let settings = settings(
			r#"{
				"src/*.js": { "alternate": "test/{}.test.js" },
				"test/*.test.js": { "templateFile": "absent.js" }
			}"#,
		);
		let mut host = RecordingHost::default();

		let result = resolve_alternates(&settings, root, &root.join("src/user.js"), &mut host);

		assert!(matches!(
			result.unwrap_err(),
			JumpError::TemplateReadError { .. }
		));
	}

	#[test]
	fn test_no_matching_rule_is_a_quiet_noop() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("views")).unwrap();
		std::fs::write(root.join("views/index.html"), "").unwrap();

		let settings = settings(r#"{"controllers/*.js": {"alternate": "test/{}.test.js"}}"#);
		let mut host = RecordingHost::default();

		let outcome = resolve_alternates(
			&settings,
			root,
			&root.join("views/index.html"),
			&mut host,
		)
		.unwrap();

		assert_eq!(outcome, ResolutionOutcome::default());
		assert!(host.opened.is_empty());
	}

	#[test]
	fn test_source_outside_root_is_an_error() {
		let temp = project();
		let root = temp.path();
		let settings = Settings::default();
		let mut host = RecordingHost::default();

		let result = resolve_alternates(
			&settings,
			root,
			Path::new("/elsewhere/user.js"),
			&mut host,
		);

		assert!(matches!(
			result.unwrap_err(),
			JumpError::OutsideProjectRoot { .. }
		));
	}

	#[test]
	fn test_open_column_toggles_away_from_active() {
		let temp = project();
		let root = temp.path();
		std::fs::create_dir_all(root.join("src")).unwrap();
		std::fs::write(root.join("src/x.js"), "").unwrap();

		let settings = settings(r#"{"src/*.js": {"alternate": "test/{}.test.js"}}"#);

		let mut host = RecordingHost {
			active: Some(ViewColumn::Two),
			..Default::default()
		};
		resolve_alternates(&settings, root, &root.join("src/x.js"), &mut host).unwrap();
		assert_eq!(host.opened[0].1, ViewColumn::One);
	}
}
