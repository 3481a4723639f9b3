//! Strict DD/MM/YYYY date string validation.

/// Days per month in a non-leap year. February is corrected by the
/// leap-year rule in `days_in_month`.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `date` is a calendar-valid date in strict DD/MM/YYYY
/// format: exactly two digits, `/`, two digits, `/`, four digits.
///
/// This is a total function: any string that does not match, including
/// empty or whitespace-only input, yields `false` rather than an error.
/// Numerically equivalent spellings with the wrong digit count, such as
/// "5/10/2025", are rejected.
///
/// # Examples
/// ```
/// use qwrap::utils::is_valid_date_string;
///
/// assert!(is_valid_date_string("29/02/2020"));
/// assert!(!is_valid_date_string("29/02/2021"));
/// assert!(!is_valid_date_string("5/10/2025"));
/// ```
pub fn is_valid_date_string(date: &str) -> bool {
	if date.trim().is_empty() {
		return false;
	}

	let segments: Vec<&str> = date.split('/').collect();
	if segments.len() != 3 {
		return false;
	}

	let (day_str, month_str, year_str) = (segments[0], segments[1], segments[2]);
	if day_str.len() != 2 || month_str.len() != 2 || year_str.len() != 4 {
		return false;
	}

	let (Some(day), Some(month), Some(year)) =
		(parse_segment(day_str), parse_segment(month_str), parse_segment(year_str))
	else {
		return false;
	};

	if day == 0 || month == 0 || month > 12 || year == 0 {
		return false;
	}

	day <= days_in_month(month, year)
}

/// Parses a fixed-width digit segment. Signs are rejected along with any
/// other non-digit character, so "+9" does not pass as 9.
fn parse_segment(segment: &str) -> Option<u32> {
	if !segment.chars().all(|c| c.is_ascii_digit()) {
		return None;
	}
	segment.parse().ok()
}

/// Returns true for Gregorian leap years: divisible by 4, except century
/// years not divisible by 400.
fn is_leap_year(year: u32) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Maximum day number for the given month and year.
fn days_in_month(month: u32, year: u32) -> u32 {
	if month == 2 && is_leap_year(year) { 29 } else { DAYS_IN_MONTH[(month - 1) as usize] }
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn ordinary_dates_are_accepted() {
		assert!(is_valid_date_string("05/10/2025"));
		assert!(is_valid_date_string("31/12/1999"));
		assert!(is_valid_date_string("01/01/0001"));
	}

	#[test]
	fn leap_day_is_accepted_only_in_leap_years() {
		assert!(is_valid_date_string("29/02/2020"));
		assert!(!is_valid_date_string("29/02/2021"));
	}

	#[test]
	fn century_years_follow_the_400_rule() {
		assert!(is_valid_date_string("29/02/2000"));
		assert!(!is_valid_date_string("29/02/1900"));
	}

	#[test]
	fn single_digit_segments_are_rejected() {
		assert!(!is_valid_date_string("5/10/2025"));
		assert!(!is_valid_date_string("05/1/2025"));
		assert!(!is_valid_date_string("05/10/25"));
	}

	#[test]
	fn out_of_range_components_are_rejected() {
		assert!(!is_valid_date_string("31/04/2025"));
		assert!(!is_valid_date_string("32/01/2025"));
		assert!(!is_valid_date_string("01/13/2025"));
		assert!(!is_valid_date_string("00/01/2025"));
		assert!(!is_valid_date_string("01/00/2025"));
		assert!(!is_valid_date_string("01/01/0000"));
	}

	#[test]
	fn wrong_segment_counts_are_rejected() {
		assert!(!is_valid_date_string("01/2025"));
		assert!(!is_valid_date_string("2025"));
		assert!(!is_valid_date_string("01/01/2025/12"));
	}

	#[test]
	fn non_numeric_segments_are_rejected() {
		assert!(!is_valid_date_string("aa/01/2025"));
		assert!(!is_valid_date_string("01-01-2025"));
		assert!(!is_valid_date_string("+9/01/2025"));
		assert!(!is_valid_date_string("0x/01/2025"));
	}

	#[test]
	fn empty_and_whitespace_input_is_rejected() {
		assert!(!is_valid_date_string(""));
		assert!(!is_valid_date_string("   "));
		assert!(!is_valid_date_string("not a date"));
	}

	#[test]
	fn validation_has_no_memory_across_calls() {
		assert!(is_valid_date_string("29/02/2020"));
		assert!(is_valid_date_string("29/02/2020"));
		assert!(!is_valid_date_string("29/02/2021"));
		assert!(!is_valid_date_string("29/02/2021"));
	}

	proptest! {
		#[test]
		fn verdicts_match_the_calendar(
			day in 0u32..=40,
			month in 0u32..=15,
			year in 1u32..=9999,
		) {
			let date = format!("{day:02}/{month:02}/{year:04}");
			let expected = NaiveDate::from_ymd_opt(year as i32, month, day).is_some();
			prop_assert_eq!(is_valid_date_string(&date), expected);
		}
	}
}
