//! Calendar date recognition.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// How a candidate string is handed to chrono once its shape matched.
#[derive(Debug, Clone, Copy)]
enum DateFormat {
    Date(&'static str),
    DateTime(&'static str),
    Zoned(&'static str),
    Rfc3339,
    Rfc2822,
}

impl DateFormat {
    fn accepts(self, value: &str) -> bool {
        match self {
            DateFormat::Date(fmt) => NaiveDate::parse_from_str(value, fmt).is_ok(),
            DateFormat::DateTime(fmt) => NaiveDateTime::parse_from_str(value, fmt).is_ok(),
            DateFormat::Zoned(fmt) => DateTime::parse_from_str(value, fmt).is_ok(),
            DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(value).is_ok(),
            DateFormat::Rfc2822 => DateTime::parse_from_rfc2822(value).is_ok(),
        }
    }
}

/// A cheap shape check plus the chrono formats that confirm it.
struct DateShape {
    pattern: Regex,
    formats: &'static [DateFormat],
}

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Shapes compiled once on first use. The regex rejects most non-dates cheaply;
// chrono then rejects impossible calendar dates such as 2023-02-30.

const ISO_DATE: &[DateFormat] = &[DateFormat::Date("%Y-%m-%d")];

const ISO_DATE_TIME: &[DateFormat] = &[
    DateFormat::Rfc3339,
    DateFormat::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
    DateFormat::DateTime("%Y-%m-%d %H:%M:%S%.f"),
    DateFormat::DateTime("%Y-%m-%dT%H:%M"),
    DateFormat::DateTime("%Y-%m-%d %H:%M"),
    DateFormat::Zoned("%Y-%m-%dT%H:%M:%S%.f%z"),
    DateFormat::Zoned("%Y-%m-%d %H:%M:%S%.f%z"),
];

const SLASHED_ISO_DATE: &[DateFormat] = &[DateFormat::Date("%Y/%m/%d")];

const SLASHED_DATE: &[DateFormat] = &[DateFormat::Date("%m/%d/%Y"), DateFormat::Date("%d/%m/%Y")];

const DASHED_DATE: &[DateFormat] = &[DateFormat::Date("%d-%m-%Y"), DateFormat::Date("%m-%d-%Y")];

const MONTH_FIRST: &[DateFormat] = &[DateFormat::Date("%B %d, %Y"), DateFormat::Date("%B %d %Y")];

const DAY_FIRST: &[DateFormat] = &[DateFormat::Date("%d %B %Y"), DateFormat::Date("%d %B, %Y")];

const RFC_2822: &[DateFormat] = &[DateFormat::Rfc2822];

static DATE_SHAPES: Lazy<Vec<DateShape>> = Lazy::new(|| {
    let shape = |pattern: &str, formats: &'static [DateFormat]| DateShape {
        pattern: Regex::new(pattern).unwrap(),
        formats,
    };

    vec![
        shape(r"^\d{4}-\d{1,2}-\d{1,2}$", ISO_DATE),
        shape(
            r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$",
            ISO_DATE_TIME,
        ),
        shape(r"^\d{4}/\d{1,2}/\d{1,2}$", SLASHED_ISO_DATE),
        // US first, then day-first
        shape(r"^\d{1,2}/\d{1,2}/\d{4}$", SLASHED_DATE),
        // European first, then month-first
        shape(r"^\d{1,2}-\d{1,2}-\d{4}$", DASHED_DATE),
        // "Jan 5, 2023", "January 5 2023"
        shape(r"^[A-Za-z]{3,9} \d{1,2},? \d{4}$", MONTH_FIRST),
        // "5 Jan 2023"
        shape(r"^\d{1,2} [A-Za-z]{3,9},? \d{4}$", DAY_FIRST),
        shape(r"^[A-Za-z]{3}, \d{1,2} [A-Za-z]{3} \d{4} \d{2}:\d{2}", RFC_2822),
    ]
});

/// Check whether text is a valid calendar date or timestamp.
pub fn looks_like_date(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    DATE_SHAPES
        .iter()
        .filter(|shape| shape.pattern.is_match(trimmed))
        .any(|shape| shape.formats.iter().any(|format| format.accepts(trimmed)))
}
