use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jumpto_cli::host::CliHost;
use jumpto_cli::resolve::resolve_alternates;
use jumpto_cli::settings::{
	Template, find_project_root, load_settings, parse_settings_file, settings_path,
	starter_settings, user_settings_path,
};

#[derive(Parser)]
#[command(name = "jumpto")]
#[command(
	author,
	version,
	about = "CLI tool for jumping to alternate files via glob mapping rules and templates"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a starter .projections.json in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .projections.json when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Project root (default: nearest ancestor of FILE containing .projections.json)
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Print diagnostics for suppressed resolution failures
	#[arg(long)]
	verbose: bool,

	/// Source file to resolve alternates for
	file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective rule table
	Show,
	/// Check the settings file for errors without resolving anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	// Handle alternate resolution
	if let Some(ref file) = cli.file {
		return handle_jump(file, cli.root.as_deref(), cli.verbose);
	}

	// No file specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let settings_file = PathBuf::from(".projections.json");

	if settings_file.exists() && !force {
		anyhow::bail!(".projections.json already exists. Use --force to overwrite.");
	}

	std::fs::write(&settings_file, starter_settings())
		.with_context(|| format!("Failed to write {}", settings_file.display()))?;

	println!("Created .projections.json");
	Ok(ExitCode::SUCCESS)
}

fn handle_jump(file: &Path, root_override: Option<&Path>, verbose: bool) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let source_file = if file.is_absolute() {
		file.to_path_buf()
	} else {
		cwd.join(file)
	};

	let root = match root_override {
		Some(root) => root.to_path_buf(),
		None => source_file
			.parent()
			.and_then(find_project_root)
			.unwrap_or(cwd),
	};

	// Missing or malformed settings mean an empty rule table, not a failure.
	let settings = match load_settings(&root) {
		Ok(settings) => settings,
		Err(e) => {
			if verbose {
				eprintln!("jumpto: using empty rule table: {e}");
			}
			Default::default()
		}
	};

	// Best-effort policy: resolution faults are logged, never surfaced as
	// a failing exit.
	let mut host = CliHost;
	if let Err(e) = resolve_alternates(&settings, &root, &source_file, &mut host)
		&& verbose
	{
		eprintln!("jumpto: resolution failed: {e}");
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let root = find_project_root(&cwd).unwrap_or(cwd);
	let path = settings_path(&root);

	if !path.exists() {
		println!("No settings file found.");
	} else {
		let settings = parse_settings_file(&path).context("Failed to parse settings file")?;

		println!("# Source: {}", path.display());
		println!("# rules: {}", settings.rules.len());
		println!();

		for (pattern, rule) in &settings.rules {
			println!("  {pattern}:");
			if let Some(ref alternate) = rule.alternate {
				println!("    alternate: {alternate}");
			}
			match rule.template {
				Some(Template::Text(_)) => println!("    template: <string>"),
				Some(Template::Lines(ref lines)) => {
					println!("    template: {} lines", lines.len());
				}
				None => {}
			}
			if let Some(ref template_file) = rule.template_file {
				println!("    templateFile: {template_file}");
			}
			println!();
		}
	}

	// Show user settings path
	if let Ok(user_path) = user_settings_path() {
		println!("User settings path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let root = find_project_root(&cwd).unwrap_or(cwd);
	let path = settings_path(&root);

	if !path.exists() {
		println!("No settings file found.");
		return Ok(ExitCode::SUCCESS);
	}

	match parse_settings_file(&path) {
		Ok(settings) => {
			println!("{} is valid ({} rules)", path.display(), settings.rules.len());
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Settings error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}
