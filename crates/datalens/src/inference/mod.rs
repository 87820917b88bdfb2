//! Type inference for loosely-typed columns.

mod dates;
mod detector;

pub use dates::looks_like_date;
pub use detector::{TypeInferencer, classify, infer_column_type, infer_types, is_date_value};
