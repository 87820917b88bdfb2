//! Frequency ranking for categorical columns.

use indexmap::IndexMap;

use crate::input::Scalar;
use crate::schema::ValueCount;

/// Token counted for null and empty values.
pub const NULL_TOKEN: &str = "null";

/// Rank values by frequency and keep the `limit` most frequent.
///
/// Null and empty values are counted under [`NULL_TOKEN`]. Equal counts keep
/// the order in which the values were first seen.
pub fn top_values<'a>(values: impl IntoIterator<Item = &'a Scalar>, limit: usize) -> Vec<ValueCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        let key = if value.is_null() {
            NULL_TOKEN.to_string()
        } else {
            value.to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut ranked: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();

    // Stable: ties stay in first-encountered order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(values: &[&str]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    #[test]
    fn test_ranked_by_count() {
        let values = scalars(&["A", "B", "A", "C", "B", "A"]);
        let top = top_values(&values, 10);

        let pairs: Vec<(&str, usize)> = top.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(pairs, vec![("A", 3), ("B", 2), ("C", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let values = scalars(&["z", "y", "x", "y", "z", "x"]);
        let top = top_values(&values, 10);

        let order: Vec<&str> = top.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_nulls_counted_as_token() {
        let values = vec![Scalar::Null, Scalar::from(""), Scalar::from("A")];
        let top = top_values(&values, 10);

        assert_eq!(top[0], ValueCount { value: "null".into(), count: 2 });
    }

    #[test]
    fn test_limit() {
        let values: Vec<Scalar> = (0..15).map(|i| Scalar::from(format!("v{i}"))).collect();
        assert_eq!(top_values(&values, 10).len(), 10);
    }
}
