//! Relevance matching of free-text questions against precomputed aggregations.

mod rules;

pub use rules::{Candidate, RulePredicate, SCORING_RULES, ScoringRule};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::limits::{MIN_MATCH_SCORE, MIN_QUERY_WORD_LEN};
use crate::schema::{AggregationResult, DataSummary};

/// Points one rule contributed to a candidate's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub hits: u32,
    pub points: u32,
}

/// Scores aggregations against a query with [`SCORING_RULES`].
#[derive(Debug, Clone)]
pub struct RelevanceMatcher {
    min_score: u32,
}

impl Default for RelevanceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceMatcher {
    /// Create a matcher with the default minimum score.
    pub fn new() -> Self {
        Self {
            min_score: MIN_MATCH_SCORE,
        }
    }

    /// Set the lowest score a candidate needs to be returned.
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Minimum score in use.
    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    /// Total score of one aggregation for a query.
    pub fn score(&self, aggregation: &AggregationResult, query: &str) -> u32 {
        self.explain(aggregation, query)
            .iter()
            .map(|hit| hit.points)
            .sum()
    }

    /// Per-rule breakdown, in rule order. Rules that did not fire are omitted.
    pub fn explain(&self, aggregation: &AggregationResult, query: &str) -> Vec<RuleHit> {
        let query = query.to_lowercase();
        let words = query_words(&query);
        evaluate(&Candidate::new(aggregation), &query, &words)
    }

    /// The best scoring aggregation of the summary, if it reaches the minimum score.
    pub fn find<'a>(&self, summary: &'a DataSummary, query: &str) -> Option<&'a AggregationResult> {
        self.find_in(&summary.aggregations, query)
    }

    /// The best scoring aggregation of a slice. Ties keep the earlier one.
    pub fn find_in<'a>(
        &self,
        aggregations: &'a [AggregationResult],
        query: &str,
    ) -> Option<&'a AggregationResult> {
        let query = query.to_lowercase();
        let words = query_words(&query);

        let mut best: Option<(&AggregationResult, u32)> = None;
        for aggregation in aggregations {
            let score: u32 = evaluate(&Candidate::new(aggregation), &query, &words)
                .iter()
                .map(|hit| hit.points)
                .sum();
            trace!(id = %aggregation.id, description = %aggregation.description, score, "scored aggregation");

            if best.is_none_or(|(_, top)| score > top) {
                best = Some((aggregation, score));
            }
        }

        best.filter(|(_, score)| *score >= self.min_score)
            .map(|(aggregation, _)| aggregation)
    }
}

/// Find the precomputed aggregation that best answers a question.
pub fn find_relevant_aggregation<'a>(
    summary: &'a DataSummary,
    query: &str,
) -> Option<&'a AggregationResult> {
    RelevanceMatcher::new().find(summary, query)
}

fn query_words(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_QUERY_WORD_LEN)
        .collect()
}

fn evaluate(candidate: &Candidate<'_>, query: &str, words: &[&str]) -> Vec<RuleHit> {
    SCORING_RULES
        .iter()
        .filter_map(|rule| {
            let hits = match rule.predicate {
                RulePredicate::Query(predicate) => u32::from(predicate(query, candidate)),
                RulePredicate::Word(predicate) => {
                    words.iter().filter(|word| predicate(word, candidate)).count() as u32
                }
            };
            (hits > 0).then(|| RuleHit {
                rule: rule.name.to_string(),
                hits,
                points: hits * rule.weight,
            })
        })
        .collect()
}
