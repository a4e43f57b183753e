//! Assistant service: the engine's single entry point.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value as JsonValue};

use portstock_data::ReferenceStore;

use crate::executor;
use crate::formatter::format_response;
use crate::intent::QueryIntent;
use crate::quick_actions::{self, QuickAction};
use crate::registry::PatternRegistry;
use crate::response::{AiError, AiResponse};
use crate::suggestions;

/// The intent-resolution and query-dispatch service.
///
/// Holds a read-only reference store capability (constructor injection, no
/// process-wide singleton) and the fixed pattern registry. Safe to share
/// across request handlers: all state is immutable after construction.
pub struct AiService {
    store: Arc<dyn ReferenceStore>,
    registry: PatternRegistry,
    quick_actions: Vec<QuickAction>,
}

impl AiService {
    pub fn new(store: Arc<dyn ReferenceStore>) -> Result<Self, AiError> {
        Ok(Self {
            store,
            registry: PatternRegistry::standard()?,
            quick_actions: quick_actions::defaults(),
        })
    }

    /// Process one user message end to end.
    ///
    /// Total: any internal failure yields a best-effort apology response
    /// instead of propagating. Deterministic for an unchanged store
    /// (modulo timing fields). The optional caller context is accepted for
    /// interface compatibility; no multi-turn state is carried over.
    pub fn process_query(
        &self,
        input: &str,
        context: Option<&Map<String, JsonValue>>,
    ) -> AiResponse {
        let started = Instant::now();

        if let Some(ctx) = context {
            tracing::trace!(keys = ?ctx.keys().collect::<Vec<_>>(), "request context ignored");
        }

        match self.try_process(input, started) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "query pipeline failed; answering with apology");
                Self::apology(&e, started.elapsed().as_secs_f64())
            }
        }
    }

    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    fn try_process(&self, input: &str, started: Instant) -> Result<AiResponse, AiError> {
        let intent = self.registry.resolve(input);
        let query_result = executor::execute(self.store.as_ref(), &intent, input);
        let message = format_response(&intent, &query_result);
        let suggestions = suggestions::generate(&intent, &query_result);

        tracing::debug!(
            kind = ?intent.kind,
            success = query_result.success,
            count = ?query_result.count,
            "answered query"
        );

        Ok(AiResponse {
            message,
            query_result: Some(query_result),
            suggestions,
            confidence: intent.confidence,
            processing_time: started.elapsed().as_secs_f64(),
        })
    }

    fn apology(error: &AiError, processing_time: f64) -> AiResponse {
        AiResponse {
            message: format!("抱歉，处理您的查询时出现了错误：{error}"),
            query_result: None,
            suggestions: suggestions::fallback(),
            confidence: 0.0,
            processing_time,
        }
    }

    /// Intent resolution only (exposed for diagnostics).
    pub fn resolve(&self, input: &str) -> QueryIntent {
        self.registry.resolve(input)
    }
}
