//! Aggregate command - ad hoc group-by reduction.

use std::path::PathBuf;

use datalens::Operation;
use datalens::analysis::build_aggregation;

use crate::ingest;

pub fn run(
    file: PathBuf,
    by: String,
    metric: String,
    op: Operation,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ingest::load(&file)?;
    super::require_column(&dataset, &by)?;
    super::require_column(&dataset, &metric)?;

    let agg = build_aggregation(&dataset.rows, &by, &metric, op);
    println!("{}", agg.description);
    println!();
    super::ask::print_table(&agg);
    Ok(())
}
