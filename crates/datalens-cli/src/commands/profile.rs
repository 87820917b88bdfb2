//! Profile command - build a summary and show an overview.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use datalens::{ColumnType, DataSummary, DatalensError};

use crate::cli::DataArgs;

pub fn run(
    data: DataArgs,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dataset, summary) = super::summarize(&data)?;

    if let Some(path) = output {
        fs::write(&path, summary.to_json_pretty()?).map_err(|e| DatalensError::Io {
            path: path.clone(),
            source: e,
        })?;
        println!("{} {}", "Summary written to".green(), path.display());
        return Ok(());
    }

    if json {
        println!("{}", summary.to_json_pretty()?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Profile of".cyan().bold(),
        data.file.display().to_string().white()
    );
    if verbose {
        println!("  Fingerprint: {}", dataset.fingerprint().dimmed());
    }
    println!();

    println!(
        "{} rows, {} columns",
        summary.row_count.to_string().white().bold(),
        summary.column_count.to_string().white().bold()
    );
    println!();

    print_columns(&summary);

    println!(
        "{} {} aggregations, {} correlations",
        "Precomputed:".yellow().bold(),
        summary.aggregations.len(),
        summary.correlations.len()
    );
    if verbose {
        for agg in &summary.aggregations {
            println!("  {} {}", agg.id.dimmed(), agg.description);
        }
    }

    Ok(())
}

fn print_columns(summary: &DataSummary) {
    println!("{}", "Columns:".yellow().bold());
    for stats in &summary.column_stats {
        let label = format!("{:<12}", stats.column_type.label());
        let kind = match stats.column_type {
            ColumnType::Number => label.blue(),
            ColumnType::String => label.green(),
            ColumnType::Date => label.magenta(),
        };
        let nulls = if stats.null_count > 0 {
            format!(", {} null", stats.null_count).red().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<24} {} {} unique{}",
            stats.column, kind, stats.unique_count, nulls
        );
    }
    println!();
}
