use serde::Deserialize;
use std::collections::BTreeMap;

/// Rule table from a `.projections.json` file.
///
/// Keys are glob rule patterns (at most one `*` wildcard), values describe
/// how the alternate for a matching path is derived and seeded. Matching
/// never depends on table order: every rule is evaluated for each lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Settings {
	pub rules: BTreeMap<String, Rule>,
}

/// A single alternate-file rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
	/// Target path template for the derived alternate.
	/// May contain one `{}` placeholder receiving the captured fragment.
	pub alternate: Option<String>,

	/// Inline template used to seed a missing alternate.
	pub template: Option<Template>,

	/// Template file name, relative to the project template directory.
	/// Takes precedence over `template` when both are set.
	pub template_file: Option<String>,
}

/// A template body: either a whole string or an ordered sequence of lines.
///
/// Whole-string templates are written verbatim; only line templates go
/// through placeholder expansion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Template {
	Text(String),
	Lines(Vec<String>),
}

impl Rule {
	/// Whether this rule can supply initial content for a created alternate.
	pub fn has_template(&self) -> bool {
		self.template.is_some() || self.template_file.is_some()
	}
}
