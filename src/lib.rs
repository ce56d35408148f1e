//! Relink - CLI tool for rewriting numbered-prefix markdown links.
//!
//! Documentation trees often order their sections with numeric directory
//! prefixes (`01-strategy/vision.md`) that the static-site generator strips
//! from its routes (`strategy/vision`). This library provides:
//! - Ordered literal and regex rule tables
//! - Built-in presets for the documentation tree
//! - TOML rule files for extra rules
//! - In-place document rewriting
//!
//! # Example
//!
//! ```no_run
//! use relink_cli::document::{Mode, rewrite_file};
//! use relink_cli::rules::Preset;
//! use std::path::Path;
//!
//! let rules = Preset::Docs.rule_set(None).unwrap();
//! let outcome = rewrite_file(Path::new("docs/intro.md"), &rules, Mode::Write).unwrap();
//! println!("{} links rewritten", outcome.replacements);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod rules;

pub use error::{RelinkError, Result};
