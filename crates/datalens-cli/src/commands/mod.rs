//! CLI command implementations.

pub mod aggregate;
pub mod ask;
pub mod correlate;
pub mod digest;
pub mod profile;

use datalens::{DataSummary, Dataset, DatalensError, Profiler};

use crate::cli::DataArgs;
use crate::ingest;

/// Load the data file and build its summary with the requested options.
pub(crate) fn summarize(data: &DataArgs) -> Result<(Dataset, DataSummary), Box<dyn std::error::Error>> {
    let config = data.limits.to_config();
    config.validate()?;

    let dataset = ingest::load(&data.file)?;
    let hints = data.type_hints();
    for column in hints.keys() {
        require_column(&dataset, column)?;
    }

    let summary = Profiler::with_config(config).build_with_types(&dataset, &hints);
    Ok((dataset, summary))
}

/// Fail with `UnknownColumn` when the dataset has no such column.
pub(crate) fn require_column(dataset: &Dataset, column: &str) -> Result<(), DatalensError> {
    if dataset.has_column(column) {
        Ok(())
    } else {
        Err(DatalensError::UnknownColumn(column.to_string()))
    }
}
