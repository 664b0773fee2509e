//! Adapters for the Bravia remote server.

mod client;
pub mod codec;
mod icons;
mod sse;

pub use client::{HttpClient, build_client};
pub use codec::SseDecoder;
pub use icons::IconFetcher;
pub use sse::{SSE_ENDPOINT, SseChannel, SseConnector};
