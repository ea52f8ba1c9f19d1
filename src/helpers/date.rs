//! Date helper functions

use chrono::NaiveDate;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMM D, YYYY") // -> "Jan 15, 2026"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a date in full format (like "January 15, 2026")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parse a date string in the formats accepted by content files
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Convert a Moment.js date format to a chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Process from longest to shortest patterns so e.g. MMM is consumed
    // before MM. Only date patterns apply; posts carry no time component.
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        ("DD", "%d"),   // Two-digit day
        ("D", "%-d"),   // Day without leading zero
        ("dddd", "%A"), // Full weekday name
        ("ddd", "%a"),  // Abbreviated weekday name
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
