//! Dummy provider — echoes the instruction back prefixed with `[echo]`.
//! Lets the whole pipeline run without an API key.

use crate::llm::ProviderError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, content: &str) -> Result<String, ProviderError> {
        Ok(format!("[echo] {}", content.trim()))
    }
}
