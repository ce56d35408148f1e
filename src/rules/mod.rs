//! Link rewriting rules for relink.
//!
//! This module handles:
//! - Compiling literal and regex substitution rules
//! - Applying ordered rule tables to document text
//! - The built-in rule tables for the documentation tree

pub mod presets;
pub mod rewriter;

pub use presets::{DEFAULT_DOCUMENT, DEFAULT_LICENSE_URL, Preset};
pub use rewriter::{CompiledRule, Matcher, Rewrite, RuleSet, compile_rules};
