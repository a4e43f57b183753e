//! Query intent model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::extractors::ExtractorKind;

/// Confidence assigned to an intent resolved from a pattern match.
pub const MATCHED_CONFIDENCE: f64 = 0.9;

/// Confidence assigned when no pattern matched (general fallback).
pub const GENERAL_CONFIDENCE: f64 = 0.5;

/// Classified query category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Count,
    Sum,
    List,
    Compare,
    Trend,
    General,
}

/// The classified intent for one input message.
///
/// Invariants:
/// - `kind == General` iff no pattern matched; then `confidence == 0.5`,
///   `entities` is empty, `extractor` is `None`, and `parameters["query"]`
///   carries the raw input.
/// - A pattern match fixes `confidence == 0.9` and sets `extractor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryIntent {
    pub kind: QueryType,
    /// Captured groups, in pattern order. Non-participating optional groups
    /// yield empty strings.
    pub entities: Vec<String>,
    /// The data accessor this intent routes to. `None` for general queries.
    pub extractor: Option<ExtractorKind>,
    pub parameters: Map<String, JsonValue>,
    pub confidence: f64,
}

impl QueryIntent {
    /// Intent for a successful pattern match.
    pub fn matched(kind: QueryType, entities: Vec<String>, extractor: ExtractorKind) -> Self {
        Self {
            kind,
            entities,
            extractor: Some(extractor),
            parameters: Map::new(),
            confidence: MATCHED_CONFIDENCE,
        }
    }

    /// Fallback intent when no pattern matched.
    pub fn general(raw_query: &str) -> Self {
        let mut parameters = Map::new();
        parameters.insert("query".to_string(), JsonValue::String(raw_query.to_string()));
        Self {
            kind: QueryType::General,
            entities: Vec::new(),
            extractor: None,
            parameters,
            confidence: GENERAL_CONFIDENCE,
        }
    }
}
