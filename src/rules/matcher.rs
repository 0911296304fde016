use crate::error::{JumpError, Result};
use crate::settings::types::{Rule, Settings};
use regex::Regex;

/// Outcome of matching a relative path against a single rule pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
	/// Substring bound to `*`, absent when the pattern has no wildcard.
	pub captured: Option<String>,
}

/// A rule that matched a relative path.
#[derive(Debug)]
pub struct RuleMatch<'a> {
	/// The glob pattern the rule is keyed by.
	pub pattern: &'a str,

	/// The matched rule.
	pub rule: &'a Rule,

	/// The fragment bound to the pattern's `*` wildcard.
	pub captured: Option<String>,
}

/// Match a relative path against a glob rule pattern.
///
/// The pattern is anchored at both ends and `*` is the only special token;
/// every other character reaches the regex engine untouched (a `.` in a
/// pattern matches any character). Each `*` expands to its own `(.*)`
/// group, but only the first group's capture is retained, so patterns with
/// more than one wildcard are unsupported.
///
/// Case-sensitive, no path normalization.
pub fn match_pattern(path: &str, pattern: &str) -> Result<Option<PatternMatch>> {
	let regex = compile_pattern(pattern)?;

	Ok(regex.captures(path).map(|caps| PatternMatch {
		captured: caps.get(1).map(|m| m.as_str().to_string()),
	}))
}

/// Compile a glob rule pattern into an anchored regex.
fn compile_pattern(pattern: &str) -> Result<Regex> {
	let regex_str = format!(
		"^{}$",
		pattern.split('*').collect::<Vec<_>>().join("(.*)")
	);

	Regex::new(&regex_str).map_err(|source| JumpError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Evaluate every rule against a relative path and collect all matches.
///
/// Matching never short-circuits: a path matching several rules yields
/// several alternates downstream.
pub fn collect_matches<'a>(settings: &'a Settings, rel_path: &str) -> Result<Vec<RuleMatch<'a>>> {
	let mut matches = Vec::new();

	for (pattern, rule) in &settings.rules {
		if let Some(m) = match_pattern(rel_path, pattern)? {
			matches.push(RuleMatch {
				pattern,
				rule,
				captured: m.captured,
			});
		}
	}

	Ok(matches)
}
