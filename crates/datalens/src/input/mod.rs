//! Input data model: scalar cells, records and datasets.

mod dataset;
mod record;

pub use dataset::{Dataset, column_values};
pub use record::{Record, Scalar, cell, format_number, record};
