//! Range detection for date columns.

use crate::input::Scalar;
use crate::schema::DateRange;

/// Earliest and latest non-null value, by lexicographic order.
///
/// Values are compared as text, not parsed. That is chronological for
/// ISO-8601 strings and only approximate for other layouts: "02/01/2023"
/// sorts before "12/31/2022".
pub fn date_range<'a>(values: impl IntoIterator<Item = &'a Scalar>) -> Option<DateRange> {
    let mut dates: Vec<String> = values
        .into_iter()
        .filter(|value| !value.is_null())
        .map(|value| value.to_string())
        .collect();

    dates.sort();

    let earliest = dates.first()?.clone();
    let latest = dates.last()?.clone();
    Some(DateRange { earliest, latest })
}
