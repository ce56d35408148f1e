use crate::error::RelinkError;
use serde::Deserialize;

/// Top-level contents of a rule file passed with `--rules`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Absolute URL that `[label](LICENSE)` links are rewritten to.
	/// Only consulted by presets that carry the license rule.
	#[serde(default)]
	pub license_url: Option<String>,

	/// Extra rules, applied in order after the preset's table.
	#[serde(default)]
	pub rules: Vec<Rule>,
}

/// A single substitution rule as written in a rule file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rule {
	/// Exact substring to replace (mutually exclusive with `pattern`).
	pub literal: Option<String>,

	/// Regex to replace (mutually exclusive with `literal`).
	/// The replacement may reference capture groups as `$1` or `${1}`.
	pub pattern: Option<String>,

	/// Text substituted for every match.
	pub replacement: String,

	/// Shown by `--list-rules`.
	pub description: Option<String>,
}

impl Rule {
	/// Validate that exactly one of `literal` and `pattern` is set.
	///
	/// `index` is 1-based and only used for error reporting.
	pub fn validate(&self, index: usize) -> Result<(), RelinkError> {
		match (&self.literal, &self.pattern) {
			(Some(_), Some(_)) => Err(RelinkError::InvalidRule {
				index,
				reason: "`literal` and `pattern` are mutually exclusive".to_string(),
			}),
			(None, None) => Err(RelinkError::InvalidRule {
				index,
				reason: "one of `literal` or `pattern` is required".to_string(),
			}),
			(Some(literal), None) if literal.is_empty() => Err(RelinkError::InvalidRule {
				index,
				reason: "`literal` must not be empty".to_string(),
			}),
			_ => Ok(()),
		}
	}
}

impl Config {
	/// Validate all rules in this config.
	pub fn validate(&self) -> Result<(), RelinkError> {
		for (i, rule) in self.rules.iter().enumerate() {
			rule.validate(i + 1)?;
		}
		Ok(())
	}
}
