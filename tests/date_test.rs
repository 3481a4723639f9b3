//! Integration tests for strict DD/MM/YYYY date validation.
//!
//! These tests verify the full decision tree: format strictness, numeric
//! range checks, and the leap-year rule for February.

use qwrap::utils::is_valid_date_string;

#[test]
fn test_valid_dates_are_accepted() {
	let valid_dates = vec![
		"01/01/2024",
		"31/01/2025",
		"30/04/2025",
		"28/02/2023",
		"29/02/2020",
		"29/02/2000",
		"31/12/9999",
		"01/01/0001",
	];

	for date in valid_dates {
		assert!(is_valid_date_string(date), "Should accept: {date}");
	}
}

#[test]
fn test_calendar_violations_are_rejected() {
	let invalid_dates = vec![
		("32/01/2025", "January has 31 days"),
		("31/04/2025", "April has 30 days"),
		("31/06/2025", "June has 30 days"),
		("31/09/2025", "September has 30 days"),
		("31/11/2025", "November has 30 days"),
		("30/02/2024", "February never has 30 days"),
		("29/02/2021", "2021 is not a leap year"),
		("29/02/1900", "century years need the 400 rule"),
		("00/01/2025", "day zero"),
		("01/00/2025", "month zero"),
		("01/13/2025", "month 13"),
		("01/01/0000", "year zero"),
	];

	for (date, reason) in invalid_dates {
		assert!(!is_valid_date_string(date), "Should reject {date}: {reason}");
	}
}

#[test]
fn test_format_violations_are_rejected() {
	let malformed = vec![
		"5/10/2025",
		"05/1/2025",
		"05/10/25",
		"005/10/2025",
		"05/010/2025",
		"05/10/02025",
		"05-10-2025",
		"2025/10/05",
		"05/10",
		"05/10/20/25",
		"05102025",
		"aa/bb/cccc",
		"+9/01/2025",
		"-1/01/2025",
		"",
		"   ",
		"not a date",
	];

	for date in malformed {
		assert!(!is_valid_date_string(date), "Should reject malformed: {date:?}");
	}
}

#[test]
fn test_leap_year_rule_across_centuries() {
	// Divisible by 4: leap, unless a century year not divisible by 400.
	assert!(is_valid_date_string("29/02/1600"));
	assert!(!is_valid_date_string("29/02/1700"));
	assert!(!is_valid_date_string("29/02/1800"));
	assert!(!is_valid_date_string("29/02/1900"));
	assert!(is_valid_date_string("29/02/2000"));
	assert!(is_valid_date_string("29/02/2024"));
	assert!(!is_valid_date_string("29/02/2025"));
}

#[test]
fn test_repeated_calls_return_the_same_verdict() {
	for _ in 0..3 {
		assert!(is_valid_date_string("29/02/2020"));
		assert!(!is_valid_date_string("29/02/2021"));
	}
}
