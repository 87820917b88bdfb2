//! Loosely-typed cell values and the records that hold them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a dataset: column name to cell value, in column order.
pub type Record = IndexMap<String, Scalar>;

/// Shared null returned for cells whose key is missing from a ragged row.
static NULL: Scalar = Scalar::Null;

/// A single cell value as delivered by the ingester.
///
/// Cells arrive as strings, numbers or nulls interchangeably. The type of a
/// column is resolved once by the type inferencer; downstream stages only
/// ask a scalar whether it is null, numeric, or for its string form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Missing value.
    #[default]
    Null,
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl Scalar {
    /// Null or empty text.
    pub fn is_null(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.is_empty(),
            Scalar::Number(_) => false,
        }
    }

    /// Numeric reading of this value, if it has one.
    ///
    /// Numbers must be finite. Text is trimmed and parsed leniently, so
    /// `"007"` reads as 7 here even though it is not a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n),
            Scalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Whether this value is a numeric literal.
    ///
    /// Text qualifies only when it parses to a finite number whose canonical
    /// form is the same text, which keeps zero-padded codes (`"007"`),
    /// grouped digits (`"1,000"`) and trailing zeros (`"1.50"`) out.
    pub fn is_numeric_literal(&self) -> bool {
        match self {
            Scalar::Number(n) => n.is_finite(),
            Scalar::Text(s) => match s.parse::<f64>() {
                Ok(n) if n.is_finite() => format_number(n) == *s,
                _ => false,
            },
            Scalar::Null => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Number(n) => write!(f, "{}", format_number(*n)),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Scalar::Null)
    }
}

/// Canonical text for a number: shortest round-trip form, `-0` as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Look up a cell, reading a missing key as null.
pub fn cell<'a>(record: &'a Record, column: &str) -> &'a Scalar {
    record.get(column).unwrap_or(&NULL)
}

/// Build a record from `(column, value)` pairs.
pub fn record<I, K, V>(pairs: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Scalar>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
