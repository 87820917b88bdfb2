//! Correlate command - Pearson r between two columns.

use std::path::PathBuf;

use colored::Colorize;
use datalens::analysis::correlate;
use datalens::digest::describe_correlation;

use crate::ingest;

pub fn run(file: PathBuf, x: String, y: String, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ingest::load(&file)?;
    super::require_column(&dataset, &x)?;
    super::require_column(&dataset, &y)?;

    let result = correlate(&dataset.rows, &x, &y);
    println!(
        "{} vs {}: r={} ({})",
        x.bold(),
        y.bold(),
        format!("{:.3}", result.correlation).white().bold(),
        describe_correlation(result.correlation)
    );
    println!("  {} scatter points", result.scatter_data.len());

    if verbose {
        for point in &result.scatter_data {
            println!("  {}, {}", point.x, point.y);
        }
    }
    Ok(())
}
