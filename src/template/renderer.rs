use regex::Regex;
use std::sync::LazyLock;

use crate::rules::transform::{ResolutionContext, apply_pipeline};
use crate::settings::types::Template;

/// Content written to a created alternate when a rule matches it but no
/// usable template is configured anywhere.
pub const NO_TEMPLATE_PLACEHOLDER: &str = "/** TODO: No matching template **/";

// `{body}` with a non-empty body; the bare `{}` token is handled before
// placeholder scanning. Constant pattern, verified valid.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{(.+?)\}").expect("constant regex pattern is valid"));

/// Render a template for a newly created alternate file.
///
/// Whole-string templates are returned verbatim; only line templates go
/// through placeholder expansion. Lines are rejoined with a single newline.
pub fn render(template: &Template, captured: Option<&str>, ctx: &ResolutionContext) -> String {
	match template {
		Template::Text(text) => text.clone(),
		Template::Lines(lines) => lines
			.iter()
			.map(|line| render_line(line, captured, ctx))
			.collect::<Vec<_>>()
			.join("\n"),
	}
}

/// Expand one template line.
///
/// The first bare `{}` receives the captured fragment verbatim. Remaining
/// `{a|b|...}` placeholders are collected in scan order, piped through the
/// transform chain seeded with the captured fragment, and substituted back
/// by first-occurrence literal replacement.
fn render_line(line: &str, captured: Option<&str>, ctx: &ResolutionContext) -> String {
	let seed = captured.unwrap_or("");
	let line = line.replacen("{}", seed, 1);

	let mut replacements = Vec::new();
	for caps in PLACEHOLDER.captures_iter(&line) {
		let value = apply_pipeline(&caps[1], seed, ctx);
		replacements.push((caps[0].to_string(), value));
	}

	let mut rendered = line;
	for (matched, value) in replacements {
		rendered = rendered.replacen(&matched, &value, 1);
	}
	rendered
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	fn ctx() -> ResolutionContext {
		ResolutionContext {
			root_path: PathBuf::from("/proj"),
			source_file: PathBuf::from("/proj/src/x.js"),
			alternate_file: PathBuf::from("/proj/test/x.test.js"),
		}
	}

	fn render_lines(lines: &[&str], captured: Option<&str>) -> String {
		let template = Template::Lines(lines.iter().map(|l| l.to_string()).collect());
		render(&template, captured, &ctx())
	}

	#[test]
	fn test_literal_lines_render_unchanged() {
		assert_eq!(
			render_lines(&["const x = 1;", "export default x;"], Some("x")),
			"const x = 1;\nexport default x;"
		);
	}

	#[test]
	fn test_whole_string_template_is_verbatim() {
		// Placeholder expansion is deliberately not applied to
		// whole-string templates.
		let template = Template::Text("module.exports = {uppercase}".to_string());
		assert_eq!(
			render(&template, Some("x"), &ctx()),
			"module.exports = {uppercase}"
		);
	}

	#[test]
	fn test_bare_braces_receive_captured_fragment() {
		assert_eq!(render_lines(&["require('{}')"], Some("user")), "require('user')");
		// Only the first bare token per line is substituted.
		assert_eq!(render_lines(&["{} {}"], Some("x")), "x {}");
	}

	#[test]
	fn test_placeholder_pipeline() {
		assert_eq!(render_lines(&["{uppercase}"], Some("user")), "USER");
		assert_eq!(
			render_lines(&["class {dirname|basename|capitalize} {open}{close}"], Some("x")),
			"class X {}"
		);
	}

	#[test]
	fn test_unknown_transform_placeholder_keeps_seed() {
		assert_eq!(render_lines(&["{unknownTransform}"], Some("user")), "user");
	}

	#[test]
	fn test_repeated_placeholders_replace_in_scan_order() {
		assert_eq!(
			render_lines(&["{uppercase}, {uppercase}"], Some("ab")),
			"AB, AB"
		);
	}

	#[test]
	fn test_missing_capture_seeds_empty_string() {
		assert_eq!(render_lines(&["name: {uppercase}!"], None), "name: !");
	}

	#[test]
	fn test_multiline_join() {
		assert_eq!(
			render_lines(&["describe('{}', () => {open}", "{close});"], Some("user")),
			"describe('user', () => {\n});"
		);
	}
}
