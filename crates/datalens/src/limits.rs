//! Named limits that bound the work done per dataset.
//!
//! The profile-builder caps are policy: they keep the aggregation and
//! correlation banks small and predictable on wide or high-cardinality
//! datasets. `ProfilerConfig` defaults to these values.

/// Leading rows sampled when inferring a column type.
pub const TYPE_SAMPLE_SIZE: usize = 10;

/// Most frequent values kept per categorical column.
pub const TOP_VALUES_LIMIT: usize = 10;

/// A categorical column is only grouped on when it has at most this many
/// distinct values.
pub const MAX_GROUP_CARDINALITY: usize = 20;

/// Categorical columns used as group keys.
pub const MAX_GROUP_COLUMNS: usize = 4;

/// Numeric columns reduced per categorical group key.
pub const MAX_METRIC_COLUMNS: usize = 6;

/// Date columns used for time series.
pub const MAX_TIME_SERIES_COLUMNS: usize = 2;

/// Numeric columns reduced per date column.
pub const MAX_TIME_SERIES_METRICS: usize = 4;

/// Numeric columns considered for pairwise correlation.
pub const MAX_CORRELATION_COLUMNS: usize = 5;

/// Paired samples needed before a correlation is computed.
pub const MIN_CORRELATION_SAMPLES: usize = 3;

/// Paired samples kept as the scatter payload.
pub const SCATTER_SAMPLE_LIMIT: usize = 100;

/// Lowest relevance score that still counts as a match.
pub const MIN_MATCH_SCORE: u32 = 3;

/// Query words shorter than this are ignored by the word rules.
pub const MIN_QUERY_WORD_LEN: usize = 3;

/// Correlations listed in the text digest.
pub const DIGEST_CORRELATIONS: usize = 5;

/// Aggregations listed in the text digest.
pub const DIGEST_AGGREGATIONS: usize = 20;

/// Top values listed per categorical column in the text digest.
pub const DIGEST_TOP_VALUES: usize = 5;
