//! Editor-host integration for jumpto.
//!
//! The resolver talks to its surroundings through a narrow trait so the CLI
//! adapter and tests can supply their own document handling.

use std::path::Path;

/// View column a document is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewColumn {
	One,
	Two,
	Three,
}

/// Pick the column to open an alternate in: a two-pane toggle relative to
/// the active column, not a general layout manager.
pub fn target_column(active: ViewColumn) -> ViewColumn {
	match active {
		ViewColumn::One => ViewColumn::Two,
		_ => ViewColumn::One,
	}
}

/// Host operations the resolver needs from its surrounding editor or shell.
pub trait EditorHost {
	/// Column the user is currently working in.
	fn active_view_column(&self) -> ViewColumn;

	/// Show a document. Fire-and-forget: the resolver never waits on or
	/// reacts to open failures.
	fn open_document(&mut self, path: &Path, column: ViewColumn);

	/// Display an informational message.
	fn show_info(&mut self, message: &str);
}

/// Host adapter for the command line: prints opened paths to stdout so an
/// editor or script wrapping the binary can pick them up.
#[derive(Debug, Default)]
pub struct CliHost;

impl EditorHost for CliHost {
	fn active_view_column(&self) -> ViewColumn {
		ViewColumn::One
	}

	fn open_document(&mut self, path: &Path, _column: ViewColumn) {
		println!("{}", path.display());
	}

	fn show_info(&mut self, message: &str) {
		println!("{message}");
	}
}
