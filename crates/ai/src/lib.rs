//! `portstock-ai`
//!
//! **Responsibility:** intent resolution and query dispatch for the port
//! materials assistant.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate reference data (it only borrows read access through
//!   [`portstock_data::ReferenceStore`]).
//! - It performs no I/O of its own; lookups are in-memory.
//! - Its entry point ([`AiService::process_query`]) is total: it never
//!   panics or propagates an error to the caller.
//!
//! Pipeline: text → resolver → extractor → executor → formatter + suggestions.

pub mod executor;
pub mod extractors;
pub mod formatter;
pub mod intent;
pub mod quick_actions;
pub mod registry;
pub mod response;
pub mod service;
pub mod suggestions;

pub use extractors::ExtractorKind;
pub use intent::{QueryIntent, QueryType};
pub use quick_actions::QuickAction;
pub use registry::PatternRegistry;
pub use response::{AiError, AiResponse, QueryResult};
pub use service::AiService;

#[cfg(test)]
pub(crate) mod fixtures;
