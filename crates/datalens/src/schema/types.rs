//! Core type definitions for column classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
///
/// Fixed for the lifetime of a profile: inferred once from a leading sample
/// and never re-inspected per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Numeric values.
    Number,
    /// Categorical/free text values.
    String,
    /// Calendar dates or timestamps.
    Date,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Number)
    }

    /// Returns true if this type holds categorical text.
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnType::String)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date)
    }

    /// Label used in human-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Number => "numeric",
            ColumnType::String => "categorical",
            ColumnType::Date => "date",
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::String
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Number => write!(f, "number"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Date => write!(f, "date"),
        }
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" | "numeric" | "num" => Ok(ColumnType::Number),
            "string" | "text" | "categorical" | "category" => Ok(ColumnType::String),
            "date" | "datetime" | "time" => Ok(ColumnType::Date),
            _ => Err(format!(
                "Unknown column type: {}. Use number, string, or date.",
                s
            )),
        }
    }
}
