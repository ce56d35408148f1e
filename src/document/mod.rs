//! Document loading and in-place rewriting for relink.
//!
//! This module handles:
//! - Reading a markdown file into memory
//! - Applying a rule table to its text
//! - Writing the result back to the same path

use crate::error::{RelinkError, Result};
use crate::rules::RuleSet;
use std::path::{Path, PathBuf};

/// The full text of one file, held in memory while it is rewritten.
#[derive(Debug)]
pub struct Document {
	path: PathBuf,
	original: String,
	content: String,
}

impl Document {
	/// Read a UTF-8 document from disk.
	pub fn load(path: &Path) -> Result<Self> {
		let original = std::fs::read_to_string(path).map_err(|source| RelinkError::ReadFailed {
			path: path.to_path_buf(),
			source,
		})?;

		Ok(Document {
			path: path.to_path_buf(),
			content: original.clone(),
			original,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	/// Apply `rules` to the in-memory text and return the number of replacements.
	pub fn rewrite(&mut self, rules: &RuleSet) -> usize {
		let rewrite = rules.apply(&self.content);
		self.content = rewrite.content;
		rewrite.replacements
	}

	/// Whether the text differs from what was read.
	pub fn is_modified(&self) -> bool {
		self.content != self.original
	}

	/// Overwrite the source file with the current text. No backup is kept.
	pub fn save(&self) -> Result<()> {
		std::fs::write(&self.path, &self.content).map_err(|source| RelinkError::WriteFailed {
			path: self.path.clone(),
			source,
		})
	}
}

/// What [`rewrite_file`] does after transforming the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Overwrite the file, even when nothing changed.
	Write,

	/// Leave the file alone and only report.
	Check,
}

/// Summary of one [`rewrite_file`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub path: PathBuf,

	/// Matches replaced across all rules.
	pub replacements: usize,

	/// Whether the rewritten text differs from the file's original text.
	pub modified: bool,

	/// Whether the file was written back.
	pub written: bool,
}

/// Read `path`, apply `rules`, and write the result back in [`Mode::Write`].
pub fn rewrite_file(path: &Path, rules: &RuleSet, mode: Mode) -> Result<Outcome> {
	let mut document = Document::load(path)?;
	let replacements = document.rewrite(rules);
	let modified = document.is_modified();

	let written = match mode {
		Mode::Write => {
			document.save()?;
			tracing::info!(path = %path.display(), replacements, "rewrote document");
			true
		}
		Mode::Check => {
			tracing::debug!(path = %path.display(), replacements, modified, "checked document");
			false
		}
	};

	Ok(Outcome {
		path: path.to_path_buf(),
		replacements,
		modified,
		written,
	})
}
