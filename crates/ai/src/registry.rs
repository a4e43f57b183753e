//! Ordered pattern registry and intent resolver.
//!
//! Classification is an explicit ordered table of (pattern, query type,
//! extractor) rules, evaluated with a single short-circuiting scan: the
//! first rule whose pattern matches wins, later rules are never consulted.
//! Ordering is fixed at construction and is a tested property.

use regex::Regex;

use crate::extractors::ExtractorKind;
use crate::intent::{QueryIntent, QueryType};
use crate::response::AiError;

/// One classification rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    kind: QueryType,
    extractor: ExtractorKind,
}

impl PatternRule {
    fn new(pattern: &str, kind: QueryType, extractor: ExtractorKind) -> Result<Self, AiError> {
        // Case-insensitive, unanchored: the pattern may match anywhere.
        let regex = Regex::new(&format!("(?i){pattern}"))
            .map_err(|e| AiError::Internal(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(Self {
            regex,
            kind,
            extractor,
        })
    }

    pub fn kind(&self) -> QueryType {
        self.kind
    }

    pub fn extractor(&self) -> ExtractorKind {
        self.extractor
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Fixed, ordered rule table. Never reordered at runtime.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// The standard rule set of the assistant, in registration order.
    pub fn standard() -> Result<Self, AiError> {
        let rules = vec![
            PatternRule::new(
                r"(.+)码头有多少(.+)",
                QueryType::Count,
                ExtractorKind::PortInventory,
            )?,
            PatternRule::new(
                r"(.+)仓库有多少(.+)",
                QueryType::Count,
                ExtractorKind::WarehouseInventory,
            )?,
            PatternRule::new(
                r"(.+)的库存是多少",
                QueryType::Count,
                ExtractorKind::MaterialInventory,
            )?,
            PatternRule::new(
                r"库存总览|库存汇总|库存统计",
                QueryType::List,
                ExtractorKind::InventorySummary,
            )?,
            PatternRule::new(
                r"搜索(.+)|查找(.+)|(.+)在哪里",
                QueryType::List,
                ExtractorKind::MaterialSearch,
            )?,
            PatternRule::new(
                r"最近(.+)天的交易记录",
                QueryType::List,
                ExtractorKind::RecentTransactions,
            )?,
        ];
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Resolve input text to an intent.
    ///
    /// Deterministic: the same input always yields the same intent for an
    /// unchanged registry.
    pub fn resolve(&self, input: &str) -> QueryIntent {
        let input = input.trim();

        for rule in &self.rules {
            if let Some(captures) = rule.regex.captures(input) {
                // Non-participating alternation groups become empty strings.
                let entities: Vec<String> = captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect();

                tracing::debug!(
                    pattern = rule.pattern(),
                    kind = ?rule.kind,
                    entities = ?entities,
                    "query matched pattern"
                );

                return QueryIntent::matched(rule.kind, entities, rule.extractor);
            }
        }

        tracing::debug!(input, "no pattern matched; falling back to general intent");
        QueryIntent::general(input)
    }
}
