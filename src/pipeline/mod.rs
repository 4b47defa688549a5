//! Query pipeline: knowledge search → context assembly → formatted reply.
//!
//! [`QueryPipeline`] owns the injected read-only [`KnowledgeStore`] and the
//! completion provider. Each call to [`QueryPipeline::handle`] is independent;
//! the pipeline holds no per-request state and is cheap to clone.

pub mod matcher;
pub mod prompt;
pub mod responder;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::knowledge::KnowledgeStore;
use crate::llm::{LlmProvider, ProviderError};

pub use matcher::{MatchResult, search};
pub use responder::respond;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum QueryError {
    /// The completion service could not produce a reply. No partial reply
    /// exists; the request fails as a whole.
    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(#[source] ProviderError),
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct QueryReply {
    pub reply: String,
    pub match_count: usize,
}

#[derive(Debug, Clone)]
pub struct QueryPipeline {
    store: Arc<KnowledgeStore>,
    provider: LlmProvider,
}

impl QueryPipeline {
    pub fn new(store: Arc<KnowledgeStore>, provider: LlmProvider) -> Self {
        Self { store, provider }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    /// Answer one submitted query.
    pub async fn handle(&self, query: &str) -> Result<QueryReply, QueryError> {
        let matches = search(query, self.store.reasons(), self.store.issues());
        debug!(query_len = query.len(), matches = matches.len(), "knowledge search done");

        let reply = respond(&self.provider, query, &matches).await?;
        Ok(QueryReply { reply, match_count: matches.len() })
    }
}
