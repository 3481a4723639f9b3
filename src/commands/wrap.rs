use std::fs;
use std::io::{Read, stdin, stdout};

use anyhow::{Context, Result};

use crate::{
	config::Config,
	render::{write_separated, write_wrapped},
};

/// Handles the wrap command - wraps text from an argument, file, or stdin
pub fn handle_wrap(
	config: &Config,
	text: Option<String>,
	width: Option<usize>,
	file: Option<String>,
	separated: bool,
) -> Result<()> {
	let line_length = width.unwrap_or(config.wrap.line_length);

	let input = match (text, file) {
		(Some(text), None) => text,
		(None, Some(path)) => {
			let content =
				fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
			normalize_whitespace(&content)
		}
		(None, None) => {
			let mut buf = String::new();
			stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
			normalize_whitespace(&buf)
		}
		(Some(_), Some(_)) => anyhow::bail!("Provide either TEXT or --file, not both"),
	};

	let mut out = stdout().lock();
	if separated {
		write_separated(&mut out, &input, line_length, config.output.separator)
	} else {
		write_wrapped(&mut out, &input, line_length)
	}
}

/// Collapses all whitespace runs to single spaces. The wrapping core is
/// defined for single-space-separated text; file and stdin input may carry
/// newlines and indentation.
fn normalize_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
