//! Inbound channels that accept queries and return replies.

#[cfg(feature = "channel-axum")]
pub mod axum_channel;
