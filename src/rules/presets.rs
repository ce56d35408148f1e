use crate::error::Result;
use crate::rules::rewriter::{CompiledRule, RuleSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Matches `[label](NN-section/page.md#anchor)` with optional `./` or `../`
/// prefixes. Stacked prefixes (`01-2024-roadmap`) are stripped together so
/// the output never carries a numeric prefix. Targets ending in `.md` may
/// contain dots (`v1.2-notes.md`); other targets may only contain word
/// characters, `-` and `/`, so assets such as `diagram.png` and absolute
/// URLs never match.
pub const NUMBERED_LINK_PATTERN: &str = r"\[([^\]]+)\]\(((?:\./)?(?:\.\./)*)(?:\d+-)+([\w-]+)/(?:([\w./-]+?)\.md|([\w/-]+))(#[^)\s]*)?\)";
pub const NUMBERED_LINK_REPLACEMENT: &str = "[${1}](${2}${3}/${4}${5}${6})";

/// The principles section's landing page is routed at the section root.
pub const PRINCIPLES_INDEX_PATTERN: &str = r"\[([^\]]+)\]\(principles/principles(#[^)\s]*)?\)";
pub const PRINCIPLES_INDEX_REPLACEMENT: &str = "[${1}](principles${2})";

pub const LICENSE_PATTERN: &str = r"\[([^\]]+)\]\(LICENSE\)";
pub const DEFAULT_LICENSE_URL: &str =
	"https://github.com/franciscolopezv/architecture_modernization/blob/main/LICENSE";

/// Document rewritten when no path is given.
pub const DEFAULT_DOCUMENT: &str = "docs/intro.md";

/// Built-in rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
	/// Numbered-prefix links only. Used for the docs landing page.
	#[default]
	Docs,

	/// Numbered-prefix links, the principles index and the license link.
	/// Used for the top-level guides (ABOUT, STRUCTURE, USAGE).
	Supporting,
}

impl Preset {
	pub fn as_str(&self) -> &'static str {
		match self {
			Preset::Docs => "docs",
			Preset::Supporting => "supporting",
		}
	}

	/// The document a preset rewrites when no path is given, if any.
	pub fn default_path(&self) -> Option<&'static Path> {
		match self {
			Preset::Docs => Some(Path::new(DEFAULT_DOCUMENT)),
			Preset::Supporting => None,
		}
	}

	/// Build the preset's rule table.
	///
	/// `license_url` overrides [`DEFAULT_LICENSE_URL`] for presets that
	/// rewrite license links.
	pub fn rule_set(&self, license_url: Option<&str>) -> Result<RuleSet> {
		let mut rules = vec![numbered_link_rule()?];

		if *self == Preset::Supporting {
			rules.push(CompiledRule::regex(
				PRINCIPLES_INDEX_PATTERN,
				PRINCIPLES_INDEX_REPLACEMENT,
				"principles/principles -> principles",
			)?);
			rules.push(license_rule(license_url.unwrap_or(DEFAULT_LICENSE_URL))?);
		}

		Ok(RuleSet::new(rules))
	}
}

impl FromStr for Preset {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"docs" => Ok(Preset::Docs),
			"supporting" => Ok(Preset::Supporting),
			other => Err(format!(
				"unknown preset '{other}' (expected 'docs' or 'supporting')"
			)),
		}
	}
}

impl fmt::Display for Preset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn numbered_link_rule() -> Result<CompiledRule> {
	CompiledRule::regex(
		NUMBERED_LINK_PATTERN,
		NUMBERED_LINK_REPLACEMENT,
		"NN-section/page.md -> section/page",
	)
}

fn license_rule(url: &str) -> Result<CompiledRule> {
	// `$` is special in regex replacements.
	let replacement = format!("[${{1}}]({})", url.replace('$', "$$"));
	CompiledRule::regex(LICENSE_PATTERN, replacement, format!("LICENSE -> {url}"))
}
