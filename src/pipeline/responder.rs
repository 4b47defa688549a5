//! Turns a query and its matches into reply text.

use tracing::{debug, warn};

use crate::llm::LlmProvider;

use super::QueryError;
use super::matcher::MatchResult;
use super::prompt;

/// Produce the reply for `query`.
///
/// No matches: the fixed fallback message, without touching the provider.
/// Otherwise exactly one completion call; its trimmed text is returned as-is
/// and any provider failure is surfaced as [`QueryError::ServiceUnavailable`].
pub async fn respond(
    provider: &LlmProvider,
    query: &str,
    matches: &[MatchResult],
) -> Result<String, QueryError> {
    if matches.is_empty() {
        debug!("no matches — using fallback message");
        return Ok(prompt::fallback_message(query));
    }

    let context = prompt::assemble_context(matches);
    let instruction = prompt::build_instruction(query, &context);
    debug!(
        provider = provider.name(),
        matches = matches.len(),
        instruction_len = instruction.len(),
        "requesting formatted reply"
    );

    let reply = provider.complete(&instruction).await.map_err(|e| {
        warn!(provider = provider.name(), error = %e, "completion service failed");
        QueryError::ServiceUnavailable(e)
    })?;

    Ok(reply.trim().to_string())
}
