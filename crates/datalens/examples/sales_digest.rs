//! Example: Profile an in-memory sales table and answer a question.
//!
//! Usage:
//!   cargo run --example sales_digest -- "average units by product"

use std::env;

use datalens::{Dataset, Profiler, Scalar, find_relevant_aggregation, record};

fn main() {
    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "total revenue by region".to_string());

    let dataset = Dataset::from_rows(vec![
        record([
            ("date", Scalar::from("2024-01-01")),
            ("region", Scalar::from("North")),
            ("product", Scalar::from("Widget")),
            ("units", Scalar::from(12)),
            ("revenue", Scalar::from(240.0)),
        ]),
        record([
            ("date", Scalar::from("2024-01-01")),
            ("region", Scalar::from("South")),
            ("product", Scalar::from("Gadget")),
            ("units", Scalar::from(4)),
            ("revenue", Scalar::from(180.5)),
        ]),
        record([
            ("date", Scalar::from("2024-01-02")),
            ("region", Scalar::from("North")),
            ("product", Scalar::from("Gadget")),
            ("units", Scalar::from(7)),
            ("revenue", Scalar::from(315.0)),
        ]),
        record([
            ("date", Scalar::from("2024-01-03")),
            ("region", Scalar::Null),
            ("product", Scalar::from("Widget")),
            ("units", Scalar::from(3)),
            ("revenue", Scalar::from(60.0)),
        ]),
    ]);

    let summary = Profiler::new().build(&dataset);

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("{}", summary.digest());
    println!("{}", separator);
    println!();

    println!("Question: {}", query);
    match find_relevant_aggregation(&summary, &query) {
        Some(agg) => {
            println!("Answer: {}", agg.description);
            for (key, value) in agg.entries() {
                println!("  {:<12} {}", key, value);
            }
        }
        None => println!("No matching aggregation"),
    }
}
