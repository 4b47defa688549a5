//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs the service consumes.
//! Raw TOML deserialization types live in `raw.rs`.

use std::path::PathBuf;

// ── Comms ───────────────────────────────────────────────────────────────────

/// Axum HTTP channel configuration.
#[derive(Debug, Clone)]
pub struct AxumChannelConfig {
    /// Whether the axum channel is explicitly enabled.
    pub enabled: bool,
    /// Socket address to bind the axum listener to.
    pub bind: String,
}

/// Comms configuration.
#[derive(Debug, Clone)]
pub struct CommsConfig {
    pub axum_channel: AxumChannelConfig,
}

// ── Knowledge ────────────────────────────────────────────────────────────────

/// Locations of the two knowledge sources, already `~`-expanded.
#[derive(Debug, Clone)]
pub struct KnowledgeConfig {
    /// Tabular reasons dataset (CSV with a header row).
    pub reasons: PathBuf,
    /// Category → issue list mapping (JSON object).
    pub issues: PathBuf,
}

// ── LLM ──────────────────────────────────────────────────────────────────────

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature. Kept low so replies follow the templates.
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Active provider name (`"dummy"`, `"openai"`).
    pub provider: String,
    pub openai: OpenAiConfig,
}

// ── Top-level ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub log_level: String,
    pub knowledge: KnowledgeConfig,
    pub comms: CommsConfig,
    pub llm: LlmConfig,
    /// Sourced from `LLM_API_KEY` / `OPENAI_API_KEY`, never from TOML.
    pub llm_api_key: Option<String>,
}
