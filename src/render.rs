//! Console rendering for wrapped text.
//!
//! Thin presentation layer over the wrapping core. Output goes through a
//! caller-supplied writer, so commands target stdout while tests capture
//! into a buffer.

use std::io::Write;

use anyhow::Result;

use crate::utils::wrap_string;

/// Writes `text` wrapped to at most `line_length` characters per line.
pub fn write_wrapped<W: Write>(out: &mut W, text: &str, line_length: usize) -> Result<()> {
	let wrapped = wrap_string(text, line_length)?;
	writeln!(out, "{wrapped}")?;
	Ok(())
}

/// Writes wrapped text framed above and below by a separator line of the
/// same width.
pub fn write_separated<W: Write>(
	out: &mut W,
	text: &str,
	line_length: usize,
	separator: char,
) -> Result<()> {
	let sep = separator.to_string().repeat(line_length);
	writeln!(out, "{sep}")?;
	write_wrapped(out, text, line_length)?;
	writeln!(out, "{sep}")?;
	Ok(())
}
