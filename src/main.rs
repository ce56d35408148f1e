use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use relink_cli::config::{Config, parse_config_file};
use relink_cli::document::{Mode, rewrite_file};
use relink_cli::rules::{Preset, RuleSet, compile_rules};

#[derive(Parser)]
#[command(name = "relink")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting numbered-prefix markdown links into static-site routes"
)]
struct Cli {
	/// Markdown file to rewrite in place (defaults to docs/intro.md with the docs preset)
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,

	/// Built-in rule table: "docs" or "supporting"
	#[arg(long, default_value = "docs", value_name = "PRESET")]
	preset: Preset,

	/// TOML file with extra rules, applied after the preset
	#[arg(long, value_name = "FILE")]
	rules: Option<PathBuf>,

	/// Report whether the file would change without writing it
	#[arg(long)]
	check: bool,

	/// Print the effective rule table and exit
	#[arg(long)]
	list_rules: bool,

	/// Log each applied rule to stderr
	#[arg(short, long)]
	verbose: bool,
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
	init_tracing(cli.verbose);

	let rules = build_rules(cli.preset, cli.rules.as_deref())?;

	if cli.list_rules {
		return handle_list_rules(&rules);
	}

	let Some(path) = cli
		.file
		.or_else(|| cli.preset.default_path().map(Path::to_path_buf))
	else {
		eprintln!("Usage: relink --preset {} <FILE>", cli.preset);
		return Ok(ExitCode::FAILURE);
	};

	if cli.check {
		handle_check(&path, &rules)
	} else {
		handle_rewrite(&path, &rules)
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.init();
}

fn build_rules(preset: Preset, rules_path: Option<&Path>) -> Result<RuleSet> {
	let config = match rules_path {
		Some(path) => parse_config_file(path)
			.with_context(|| format!("Failed to load rules from {}", path.display()))?,
		None => Config::default(),
	};

	let mut rules = preset
		.rule_set(config.license_url.as_deref())
		.with_context(|| format!("Failed to build the {preset} preset"))?;
	rules.extend(compile_rules(&config).context("Failed to compile rules")?);

	tracing::debug!(%preset, rules = rules.len(), "rule table ready");
	Ok(rules)
}

fn handle_list_rules(rules: &RuleSet) -> Result<ExitCode> {
	println!("Rules (applied in order):\n");

	for (i, rule) in rules.iter().enumerate() {
		println!("  Rule {}: {}", i + 1, rule.description);
		println!("    {}: {}", rule.kind(), rule.pattern());
		println!("    replacement: {}", rule.replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rewrite(path: &Path, rules: &RuleSet) -> Result<ExitCode> {
	rewrite_file(path, rules, Mode::Write)
		.with_context(|| format!("Failed to fix links in {}", path.display()))?;

	println!("Fixed links in {}", path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_check(path: &Path, rules: &RuleSet) -> Result<ExitCode> {
	let outcome = rewrite_file(path, rules, Mode::Check)
		.with_context(|| format!("Failed to check links in {}", path.display()))?;

	if outcome.modified {
		println!(
			"{}: {} link(s) need fixing",
			path.display(),
			outcome.replacements
		);
		Ok(ExitCode::FAILURE)
	} else {
		println!("{}: links are up to date", path.display());
		Ok(ExitCode::SUCCESS)
	}
}
