//! Greedy line wrapping with hyphenation of overlong words.

use anyhow::Result;

/// Wraps `text` so that no line exceeds `line_length` characters, splitting
/// words with hyphens when a word cannot fit on a line of its own.
///
/// Words are taken to be separated by single spaces. No characters are
/// dropped: separators survive as single spaces or become the inserted
/// newlines, and overlong words gain a `-` at each split point. Runs of
/// consecutive spaces are not collapsed and produce empty words, so the
/// function is only well-defined for single-space-separated text.
///
/// A `line_length` of 1 cannot hold a fragment plus its hyphen; splits then
/// take a single character per line and the limit is exceeded by the hyphen.
///
/// # Examples
/// ```
/// use qwrap::utils::wrap_string;
///
/// assert_eq!(wrap_string("Too long", 4).unwrap(), "Too\nlong");
/// assert_eq!(wrap_string("Long", 3).unwrap(), "Lo-\nng");
/// ```
pub fn wrap_string(text: &str, line_length: usize) -> Result<String> {
	if line_length == 0 {
		anyhow::bail!("line length must be at least 1");
	}

	let mut wrapped = String::with_capacity(text.len() + text.len() / line_length.max(2));
	let mut current_line_length = 0;

	for word in text.split(' ') {
		let word_length = word.chars().count();
		let remaining = line_length - current_line_length;

		// Break before hyphenating a word that would fit whole on a fresh
		// line, and before splits that would leave fewer than two characters
		// ahead of the hyphen. Must run before the overlong check below.
		if (word_length >= remaining && word_length <= line_length)
			|| (word_length > line_length && remaining < 3)
		{
			wrapped.push('\n');
			current_line_length = 0;
		}

		if word_length > line_length {
			current_line_length = push_hyphenated(&mut wrapped, word, line_length, current_line_length);
		} else if current_line_length == 0 {
			wrapped.push_str(word);
			current_line_length += word_length;
		} else {
			wrapped.push(' ');
			wrapped.push_str(word);
			current_line_length += word_length + 1;
		}
	}

	Ok(wrapped)
}

/// Emits `word` as hyphen-terminated fragments until the remainder fits on a
/// line of its own, returning the resulting line length.
fn push_hyphenated(
	wrapped: &mut String,
	word: &str,
	line_length: usize,
	current_line_length: usize,
) -> usize {
	let mut rest = word;

	if current_line_length > 0 {
		// The first fragment continues the current line: one column goes to
		// the separating space and one to the hyphen. The forced-break rule
		// guarantees at least three columns remain here.
		let (first, second) = split_at_chars(rest, line_length - current_line_length - 2);
		wrapped.push(' ');
		wrapped.push_str(first);
		wrapped.push_str("-\n");
		rest = second;
	}

	while rest.chars().count() > line_length {
		// One column is reserved for the hyphen. Take at least one character
		// so the split makes progress when line_length is 1.
		let (first, second) = split_at_chars(rest, (line_length - 1).max(1));
		wrapped.push_str(first);
		wrapped.push_str("-\n");
		rest = second;
	}

	wrapped.push_str(rest);
	rest.chars().count()
}

/// Splits `s` after `n` characters, respecting UTF-8 boundaries.
fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
	match s.char_indices().nth(n) {
		Some((idx, _)) => s.split_at(idx),
		None => (s, ""),
	}
}
