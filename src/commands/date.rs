use std::io::{BufRead, stdin};

use anyhow::Result;
use serde::Serialize;

use crate::utils::is_valid_date_string;

/// Check result for a single date input, serialized by `--json`.
#[derive(Serialize)]
struct DateCheck {
	input: String,
	valid: bool,
}

/// Handles the date command - checks date strings from arguments or stdin
pub fn handle_date(dates: &[String], json: bool) -> Result<()> {
	let dates = if dates.is_empty() { read_stdin_lines()? } else { dates.to_vec() };

	if json {
		let checks: Vec<DateCheck> = dates
			.into_iter()
			.map(|input| {
				let valid = is_valid_date_string(&input);
				DateCheck { input, valid }
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&checks)?);
	} else {
		for input in dates {
			let verdict = if is_valid_date_string(&input) { "valid" } else { "invalid" };
			println!("{input}\t{verdict}");
		}
	}
	Ok(())
}

/// Reads non-blank lines from stdin, one date per line.
fn read_stdin_lines() -> Result<Vec<String>> {
	let mut lines = Vec::new();
	for line in stdin().lock().lines() {
		let line = line?;
		if !line.trim().is_empty() {
			lines.push(line);
		}
	}
	Ok(lines)
}
