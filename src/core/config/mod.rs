//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `QUERY_AGENT_LOG_LEVEL` and `QUERY_AGENT_BIND` env overrides.
//!
//! # Module layout
//!
//! - **types** — Public configuration structs (`Config`, `LlmConfig`,
//!   `KnowledgeConfig`, etc.).
//! - **raw** — Raw TOML deserialization types (`RawConfig`, `RawLlm`, …).
//!   These mirror the file shape and use serde defaults; kept private.
//! - **load** — Loading logic: `merge_toml`, `load_raw_merged`, `load`,
//!   `load_from`, `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{Overrides, expand_home, load, load_from};
pub use types::*;

#[cfg(test)]
impl Config {
    /// Safe `Config` for tests — dummy LLM, no API key, no external calls.
    pub fn test_default(data_dir: &std::path::Path) -> Self {
        Self {
            service_name: "test".into(),
            log_level: "info".into(),
            knowledge: KnowledgeConfig {
                reasons: data_dir.join("reasons.csv"),
                issues: data_dir.join("issues.json"),
            },
            comms: CommsConfig {
                axum_channel: AxumChannelConfig {
                    enabled: false,
                    bind: raw::default_http_bind(),
                },
            },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    timeout_seconds: 1,
                },
            },
            llm_api_key: None,
        }
    }
}
