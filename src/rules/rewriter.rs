use crate::config::types::{Config, Rule};
use crate::error::{RelinkError, Result};
use regex::Regex;

/// How a compiled rule locates the text it replaces.
#[derive(Debug)]
pub enum Matcher {
	/// Exact substring match.
	Literal(String),

	/// Regex match; the replacement may use `$n` back-references.
	Regex(Regex),
}

/// A rule ready to be applied to document text.
#[derive(Debug)]
pub struct CompiledRule {
	/// What to match.
	pub matcher: Matcher,

	/// Replacement text for every match.
	pub replacement: String,

	/// Human-readable summary for `--list-rules` and logs.
	pub description: String,
}

impl CompiledRule {
	/// Build a literal substring rule.
	pub fn literal(
		from: impl Into<String>,
		to: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		CompiledRule {
			matcher: Matcher::Literal(from.into()),
			replacement: to.into(),
			description: description.into(),
		}
	}

	/// Build a regex rule, compiling `pattern`.
	pub fn regex(
		pattern: &str,
		replacement: impl Into<String>,
		description: impl Into<String>,
	) -> Result<Self> {
		Ok(CompiledRule {
			matcher: Matcher::Regex(compile_regex(pattern)?),
			replacement: replacement.into(),
			description: description.into(),
		})
	}

	/// Compile a rule read from a rule file.
	///
	/// `index` is the rule's 1-based position in the file, used in errors.
	pub fn from_rule(rule: &Rule, index: usize) -> Result<Self> {
		rule.validate(index)?;

		let description = rule.description.clone();
		match (&rule.literal, &rule.pattern) {
			(Some(literal), None) => Ok(CompiledRule::literal(
				literal.as_str(),
				rule.replacement.as_str(),
				description.unwrap_or_else(|| format!("replace {literal}")),
			)),
			(None, Some(pattern)) => CompiledRule::regex(
				pattern,
				rule.replacement.as_str(),
				description.unwrap_or_else(|| format!("rewrite /{pattern}/")),
			),
			// Rejected by `validate`.
			_ => Err(RelinkError::InvalidRule {
				index,
				reason: "exactly one of `literal` or `pattern` is required".to_string(),
			}),
		}
	}

	/// Short label for the match kind.
	pub fn kind(&self) -> &'static str {
		match self.matcher {
			Matcher::Literal(_) => "literal",
			Matcher::Regex(_) => "regex",
		}
	}

	/// The literal text or regex source this rule matches.
	pub fn pattern(&self) -> &str {
		match &self.matcher {
			Matcher::Literal(from) => from,
			Matcher::Regex(regex) => regex.as_str(),
		}
	}

	/// Replace every non-overlapping match in `input`.
	///
	/// Returns the rewritten text and the number of matches replaced.
	pub fn apply(&self, input: &str) -> (String, usize) {
		match &self.matcher {
			Matcher::Literal(from) => {
				let count = input.matches(from.as_str()).count();
				if count == 0 {
					return (input.to_string(), 0);
				}
				(input.replace(from.as_str(), &self.replacement), count)
			}
			Matcher::Regex(regex) => {
				let count = regex.find_iter(input).count();
				if count == 0 {
					return (input.to_string(), 0);
				}
				(
					regex
						.replace_all(input, self.replacement.as_str())
						.into_owned(),
					count,
				)
			}
		}
	}
}

/// Result of running a rule set over some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// The rewritten text.
	pub content: String,

	/// Total matches replaced across all rules.
	pub replacements: usize,
}

/// An ordered rule table.
///
/// Rules run one after another, each over the output of the previous one.
#[derive(Debug, Default)]
pub struct RuleSet {
	rules: Vec<CompiledRule>,
}

impl RuleSet {
	pub fn new(rules: Vec<CompiledRule>) -> Self {
		RuleSet { rules }
	}

	/// Append rules after the existing ones.
	pub fn extend(&mut self, rules: impl IntoIterator<Item = CompiledRule>) {
		self.rules.extend(rules);
	}

	pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
		self.rules.iter()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Apply every rule in table order.
	pub fn apply(&self, input: &str) -> Rewrite {
		let mut content = input.to_string();
		let mut replacements = 0;

		for rule in &self.rules {
			let (next, count) = rule.apply(&content);
			if count > 0 {
				tracing::debug!(rule = %rule.description, count, "applied rule");
			}
			content = next;
			replacements += count;
		}

		Rewrite {
			content,
			replacements,
		}
	}
}

impl IntoIterator for RuleSet {
	type Item = CompiledRule;
	type IntoIter = std::vec::IntoIter<CompiledRule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.into_iter()
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| RelinkError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Compile all rules in a rule file, keeping their order.
pub fn compile_rules(config: &Config) -> Result<RuleSet> {
	let rules = config
		.rules
		.iter()
		.enumerate()
		.map(|(i, rule)| CompiledRule::from_rule(rule, i + 1))
		.collect::<Result<Vec<_>>>()?;

	Ok(RuleSet::new(rules))
}
