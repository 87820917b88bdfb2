//! Ask command - answer a question from the precomputed aggregations.

use colored::Colorize;
use datalens::{AggregationResult, RelevanceMatcher};

use crate::cli::DataArgs;

pub fn run(data: DataArgs, query: String, explain: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, summary) = super::summarize(&data)?;
    let matcher = RelevanceMatcher::new();

    let Some(agg) = matcher.find(&summary, &query) else {
        println!("{}", "No matching aggregation".yellow());
        return Ok(());
    };

    println!("{} {}", agg.description.cyan().bold(), format!("({})", agg.id).dimmed());
    println!();
    print_table(agg);

    if explain {
        println!();
        println!(
            "{} {}",
            "Score:".yellow().bold(),
            matcher.score(agg, &query).to_string().white().bold()
        );
        for hit in matcher.explain(agg, &query) {
            println!("  {:<28} x{:<3} +{}", hit.rule, hit.hits, hit.points);
        }
    }

    Ok(())
}

pub(crate) fn print_table(agg: &AggregationResult) {
    let width = agg
        .entries()
        .map(|(key, _)| key.chars().count())
        .chain([agg.group_by.chars().count()])
        .max()
        .unwrap_or_default();

    let header = format!("{:<width$}", agg.group_by, width = width);
    println!("  {}  {}", header.bold(), agg.metric.bold());
    for (key, value) in agg.entries() {
        println!(
            "  {:<width$}  {}",
            key,
            datalens::input::format_number(value),
            width = width
        );
    }
}
