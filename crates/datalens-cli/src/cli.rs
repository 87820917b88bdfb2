//! CLI argument definitions using clap.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use datalens::{ColumnType, Operation, ProfilerConfig};

/// Datalens: statistical profiling for tabular data
#[derive(Parser)]
#[command(name = "datalens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and show an overview
    Profile {
        #[command(flatten)]
        data: DataArgs,

        /// Print the full summary as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the plain-text digest of a data file
    Digest {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Find the precomputed aggregation that answers a question
    Ask {
        #[command(flatten)]
        data: DataArgs,

        /// Question, e.g. "total revenue by region"
        #[arg(value_name = "QUERY")]
        query: String,

        /// Show how the winning aggregation was scored
        #[arg(long)]
        explain: bool,
    },

    /// Run an ad hoc group-by aggregation
    Aggregate {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to group by
        #[arg(long, value_name = "COLUMN")]
        by: String,

        /// Numeric column to reduce
        #[arg(long, value_name = "COLUMN")]
        metric: String,

        /// Reduction to apply (sum, mean, count)
        #[arg(long, default_value = "sum")]
        op: Operation,
    },

    /// Correlate two numeric columns
    Correlate {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// First column
        #[arg(value_name = "X")]
        x: String,

        /// Second column
        #[arg(value_name = "Y")]
        y: String,
    },
}

/// Input file plus profiling options shared by the summary-building commands.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Path to the data file (CSV/TSV/JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Force a column type, e.g. --type zip=string (repeatable)
    #[arg(long = "type", value_name = "COLUMN=TYPE", value_parser = parse_type_hint)]
    pub types: Vec<(String, ColumnType)>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

impl DataArgs {
    pub fn type_hints(&self) -> HashMap<String, ColumnType> {
        self.types.iter().cloned().collect()
    }
}

/// Overrides for the profiling caps.
#[derive(Args, Debug, Default)]
pub struct LimitArgs {
    /// Rows sampled per column for type inference
    #[arg(long, value_name = "N")]
    pub type_sample_size: Option<usize>,

    /// Most frequent values kept per categorical column
    #[arg(long, value_name = "N")]
    pub top_values: Option<usize>,

    /// Highest distinct-value count for a group-by column
    #[arg(long, value_name = "N")]
    pub max_group_cardinality: Option<usize>,

    /// Categorical columns used for group-by aggregations
    #[arg(long, value_name = "N")]
    pub max_group_columns: Option<usize>,

    /// Numeric columns reduced per group-by column
    #[arg(long, value_name = "N")]
    pub max_metric_columns: Option<usize>,

    /// Date columns used for time series
    #[arg(long, value_name = "N")]
    pub max_time_series_columns: Option<usize>,

    /// Numeric columns reduced per date column
    #[arg(long, value_name = "N")]
    pub max_time_series_metrics: Option<usize>,

    /// Numeric columns considered for correlations
    #[arg(long, value_name = "N")]
    pub max_correlation_columns: Option<usize>,
}

impl LimitArgs {
    /// Apply the overrides on top of the default configuration.
    pub fn to_config(&self) -> ProfilerConfig {
        let mut config = ProfilerConfig::default();
        if let Some(n) = self.type_sample_size {
            config = config.with_type_sample_size(n);
        }
        if let Some(n) = self.top_values {
            config = config.with_top_values_limit(n);
        }
        if let Some(n) = self.max_group_cardinality {
            config = config.with_max_group_cardinality(n);
        }
        if let Some(n) = self.max_group_columns {
            config = config.with_max_group_columns(n);
        }
        if let Some(n) = self.max_metric_columns {
            config = config.with_max_metric_columns(n);
        }
        if let Some(n) = self.max_time_series_columns {
            config = config.with_max_time_series_columns(n);
        }
        if let Some(n) = self.max_time_series_metrics {
            config = config.with_max_time_series_metrics(n);
        }
        if let Some(n) = self.max_correlation_columns {
            config = config.with_max_correlation_columns(n);
        }
        config
    }
}

/// Parse a `COLUMN=TYPE` hint.
pub fn parse_type_hint(s: &str) -> Result<(String, ColumnType), String> {
    let (column, kind) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("Invalid type hint: {}. Use COLUMN=TYPE.", s))?;
    if column.is_empty() {
        return Err(format!("Invalid type hint: {}. Column name is empty.", s));
    }
    Ok((column.to_string(), kind.parse()?))
}
