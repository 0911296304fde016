//! Jumpto - CLI tool for jumping to alternate files via glob mapping rules.
//!
//! This library provides the core functionality for jumpto, including:
//! - Settings file parsing and project-root discovery
//! - Glob rule matching with wildcard capture
//! - A transform pipeline and template renderer for seeding new files
//! - Alternate-file resolution against a pluggable editor host
//!
//! # Example
//!
//! ```no_run
//! use jumpto_cli::host::CliHost;
//! use jumpto_cli::resolve::resolve_alternates;
//! use jumpto_cli::settings::load_settings;
//!
//! let root = std::env::current_dir().unwrap();
//! let settings = load_settings(&root).unwrap_or_default();
//! let source = root.join("src/user.js");
//!
//! let mut host = CliHost;
//! let outcome = resolve_alternates(&settings, &root, &source, &mut host).unwrap();
//!
//! for alternate in outcome.alternates {
//!     println!("{}", alternate.relative_path);
//! }
//! ```

pub mod error;
pub mod host;
pub mod resolve;
pub mod rules;
pub mod settings;
pub mod template;

pub use error::{JumpError, Result};
