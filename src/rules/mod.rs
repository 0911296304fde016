//! Rule matching and the transform pipeline for jumpto.
//!
//! This module handles:
//! - Glob pattern matching with wildcard capture
//! - The named string transforms applied inside template placeholders

pub mod matcher;
pub mod transform;

pub use matcher::{PatternMatch, RuleMatch, collect_matches, match_pattern};
pub use transform::{ResolutionContext, Transform, apply_pipeline, relative_path};
