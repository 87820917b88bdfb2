//! The lexical rule table behind relevance scoring.
//!
//! Each rule is a named predicate with a weight. Query rules fire at most once
//! per candidate; word rules fire once per qualifying query word. Rules are
//! evaluated in table order.

use crate::schema::{AggregationResult, Operation};

/// Lower-cased view of an aggregation, prepared once per query.
#[derive(Debug)]
pub struct Candidate<'a> {
    pub aggregation: &'a AggregationResult,
    pub group_by: String,
    pub metric: String,
    pub description: String,
}

impl<'a> Candidate<'a> {
    pub fn new(aggregation: &'a AggregationResult) -> Self {
        Self {
            aggregation,
            group_by: aggregation.group_by.to_lowercase(),
            metric: aggregation.metric.to_lowercase(),
            description: aggregation.description.to_lowercase(),
        }
    }
}

/// What a rule looks at.
#[derive(Clone, Copy)]
pub enum RulePredicate {
    /// Evaluated once against the whole lower-cased query.
    Query(fn(&str, &Candidate<'_>) -> bool),
    /// Evaluated once per query word that is long enough.
    Word(fn(&str, &Candidate<'_>) -> bool),
}

/// A weighted scoring rule.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub weight: u32,
    pub predicate: RulePredicate,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = match self.predicate {
            RulePredicate::Query(_) => "query",
            RulePredicate::Word(_) => "word",
        };
        f.debug_struct("ScoringRule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("scope", &scope)
            .finish()
    }
}

/// Rule table, in evaluation order.
pub static SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "query_mentions_group_by",
        weight: 3,
        predicate: RulePredicate::Query(query_mentions_group_by),
    },
    ScoringRule {
        name: "query_mentions_metric",
        weight: 3,
        predicate: RulePredicate::Query(query_mentions_metric),
    },
    ScoringRule {
        name: "description_contains_word",
        weight: 1,
        predicate: RulePredicate::Word(description_contains_word),
    },
    ScoringRule {
        name: "group_by_contains_word",
        weight: 2,
        predicate: RulePredicate::Word(group_by_contains_word),
    },
    ScoringRule {
        name: "metric_contains_word",
        weight: 2,
        predicate: RulePredicate::Word(metric_contains_word),
    },
    ScoringRule {
        name: "operation_keyword",
        weight: 2,
        predicate: RulePredicate::Query(operation_keyword),
    },
];

const SUM_KEYWORDS: &[&str] = &["total", "sum"];
const MEAN_KEYWORDS: &[&str] = &["average", "avg", "mean"];

fn query_mentions_group_by(query: &str, candidate: &Candidate<'_>) -> bool {
    !candidate.group_by.is_empty() && query.contains(candidate.group_by.as_str())
}

fn query_mentions_metric(query: &str, candidate: &Candidate<'_>) -> bool {
    !candidate.metric.is_empty() && query.contains(candidate.metric.as_str())
}

fn description_contains_word(word: &str, candidate: &Candidate<'_>) -> bool {
    candidate.description.contains(word)
}

fn group_by_contains_word(word: &str, candidate: &Candidate<'_>) -> bool {
    candidate.group_by.contains(word)
}

fn metric_contains_word(word: &str, candidate: &Candidate<'_>) -> bool {
    candidate.metric.contains(word)
}

fn operation_keyword(query: &str, candidate: &Candidate<'_>) -> bool {
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| query.contains(k));
    match candidate.aggregation.operation {
        Operation::Sum => mentions(SUM_KEYWORDS),
        Operation::Mean => mentions(MEAN_KEYWORDS),
        Operation::Count => false,
    }
}
