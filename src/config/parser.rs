//! A rule file is a TOML document holding an optional `license-url` and a
//! `[[rules]]` array. Each rule sets `replacement` and exactly one of
//! `literal` (exact substring) or `pattern` (regex with `$n` groups):
//!
//! ```toml
//! license-url = "https://example.com/LICENSE"
//!
//! [[rules]]
//! literal = "(old-guide.md)"
//! replacement = "(guides/new-guide)"
//! ```

use crate::config::types::Config;
use crate::error::{RelinkError, Result};
use std::path::Path;

/// Load the rule file passed with `--rules`.
///
/// Unreadable files (missing, not UTF-8) yield `ConfigReadError`.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let text = std::fs::read_to_string(path).map_err(|source| RelinkError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let config = parse_config_str(&text, path)?;
	tracing::debug!(path = %path.display(), rules = config.rules.len(), "loaded rule file");
	Ok(config)
}

/// Parse rule-file text; `path` only labels errors.
///
/// Malformed TOML or a rule without `replacement` yields `ConfigParseError`.
/// Rules that set both or neither of `literal` and `pattern`, or an empty
/// `literal`, yield `InvalidRule` with the rule's 1-based position.
/// Regexes are compiled later, by `rules::compile_rules`.
pub fn parse_config_str(text: &str, path: &Path) -> Result<Config> {
	let config = toml::from_str::<Config>(text).map_err(|source| {
		RelinkError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		}
	})?;

	config.validate()?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("rules.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(config.license_url.is_none());
		assert!(config.rules.is_empty());
	}

	#[test]
	fn test_parse_license_url() {
		let content = r#"license-url = "https://example.com/LICENSE""#;
		let path = PathBuf::from("rules.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(
			config.license_url,
			Some("https://example.com/LICENSE".to_string())
		);
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r#"
[[rules]]
literal = "(old-guide.md)"
replacement = "(guides/new-guide)"

[[rules]]
pattern = '\[([^\]]+)\]\(LEGACY\)'
replacement = '[$1](legacy)'
description = "legacy page"
"#;
		let path = PathBuf::from("rules.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules.len(), 2);

		let rule1 = &config.rules[0];
		assert_eq!(rule1.literal, Some("(old-guide.md)".to_string()));
		assert!(rule1.pattern.is_none());
		assert_eq!(rule1.replacement, "(guides/new-guide)");

		let rule2 = &config.rules[1];
		assert_eq!(rule2.pattern, Some(r"\[([^\]]+)\]\(LEGACY\)".to_string()));
		assert_eq!(rule2.replacement, "[$1](legacy)");
		assert_eq!(rule2.description, Some("legacy page".to_string()));
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { literal = "a", replacement = "b" },
    { pattern = "c+", replacement = "d" },
]
"#;
		let path = PathBuf::from("rules.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules.len(), 2);
	}

	#[test]
	fn test_missing_replacement_is_parse_error() {
		let content = r#"
[[rules]]
literal = "a"
"#;
		let path = PathBuf::from("rules.toml");
		let result = parse_config_str(content, &path);

		assert!(matches!(
			result,
			Err(RelinkError::ConfigParseError { .. })
		));
	}

	#[test]
	fn test_literal_and_pattern_are_mutually_exclusive() {
		let content = r#"
[[rules]]
literal = "a"
replacement = "b"

[[rules]]
literal = "a"
pattern = "a"
replacement = "b"
"#;
		let path = PathBuf::from("rules.toml");
		let result = parse_config_str(content, &path);

		match result.unwrap_err() {
			RelinkError::InvalidRule { index, reason } => {
				assert_eq!(index, 2);
				assert!(reason.contains("mutually exclusive"));
			}
			_ => panic!("Expected InvalidRule error"),
		}
	}

	#[test]
	fn test_rule_without_match_kind_is_rejected() {
		let content = r#"
[[rules]]
replacement = "b"
"#;
		let path = PathBuf::from("rules.toml");
		let result = parse_config_str(content, &path);

		assert!(matches!(
			result,
			Err(RelinkError::InvalidRule { index: 1, .. })
		));
	}

	#[test]
	fn test_empty_literal_is_rejected() {
		let content = r#"
[[rules]]
literal = ""
replacement = "b"
"#;
		let path = PathBuf::from("rules.toml");
		let result = parse_config_str(content, &path);

		assert!(matches!(result, Err(RelinkError::InvalidRule { .. })));
	}

	#[test]
	fn test_patterns_are_not_compiled_while_parsing() {
		let content = r#"
[[rules]]
pattern = "(unclosed"
replacement = "x"
"#;
		let path = PathBuf::from("rules.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules[0].pattern, Some("(unclosed".to_string()));
	}

	#[test]
	fn test_missing_file_is_read_error() {
		let result = parse_config_file(Path::new("/nonexistent/relink-rules.toml"));
		assert!(matches!(result, Err(RelinkError::ConfigReadError { .. })));
	}
}
