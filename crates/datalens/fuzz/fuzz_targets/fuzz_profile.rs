//! Fuzz target for the full profile build.
//!
//! This fuzzer tests that building a summary, rendering its digest and
//! matching a query never panic, whatever the cells hold.

#![no_main]

use arbitrary::Arbitrary;
use datalens::{Dataset, Profiler, Record, Scalar, find_relevant_aggregation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl From<Cell> for Scalar {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Null => Scalar::Null,
            Cell::Number(n) => Scalar::Number(n),
            Cell::Text(s) => Scalar::Text(s),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    query: String,
}

fuzz_target!(|input: Input| {
    if input.columns.len() > 16 || input.rows.len() > 500 {
        return;
    }

    let rows: Vec<Record> = input
        .rows
        .into_iter()
        .map(|cells| {
            input
                .columns
                .iter()
                .cloned()
                .zip(cells.into_iter().map(Scalar::from))
                .collect()
        })
        .collect();
    let dataset = Dataset::new(input.columns.clone(), rows);

    let summary = Profiler::new().build(&dataset);
    let _ = summary.digest();
    let _ = find_relevant_aggregation(&summary, &input.query);
});
