//! Cross-row analysis: group-by aggregation and correlation.

mod aggregate;
mod correlation;

pub use aggregate::{
    UNKNOWN_GROUP, aggregate, build_aggregation, build_time_series, describe, time_series,
};
pub use correlation::{correlate, pearson};
