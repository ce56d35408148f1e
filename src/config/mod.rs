//! Rule file loading and parsing for relink.
//!
//! This module handles:
//! - TOML rule file parsing
//! - Rule validation

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Rule};
