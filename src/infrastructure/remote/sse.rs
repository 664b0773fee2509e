//! Server-sent events push channel.

use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::{Client, header};
use tracing::{debug, info, trace};

use super::codec::SseDecoder;
use crate::domain::errors::{StreamError, StreamResult};
use crate::domain::ports::{PushChannel, PushConnector};

/// Route of the event stream, relative to the API base.
pub const SSE_ENDPOINT: &str = "/sse";

const EVENT_STREAM: &str = "text/event-stream";

/// Opens `GET <api>/sse` as a [`PushChannel`].
pub struct SseConnector {
    client: Client,
    url: String,
}

impl SseConnector {
    #[must_use]
    pub fn new(client: Client, api_base: &str) -> Self {
        Self {
            client,
            url: format!("{}{SSE_ENDPOINT}", api_base.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PushConnector for SseConnector {
    async fn open(&self) -> StreamResult<Box<dyn PushChannel>> {
        debug!(url = %self.url, "Opening event stream");

        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, EVENT_STREAM)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| StreamError::connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StreamError::connect(format!(
                "event stream returned {status}"
            )));
        }

        info!(url = %self.url, "Event stream connected");

        Ok(Box::new(SseChannel::new(response.bytes_stream().boxed())))
    }
}

/// An open event stream.
pub struct SseChannel {
    stream: BoxStream<'static, reqwest::Result<Bytes>>,
    decoder: SseDecoder,
    pending: VecDeque<String>,
}

impl SseChannel {
    fn new(stream: BoxStream<'static, reqwest::Result<Bytes>>) -> Self {
        Self {
            stream,
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
        }
    }
}

#[async_trait]
impl PushChannel for SseChannel {
    async fn next_frame(&mut self) -> StreamResult<String> {
        loop {
            if let Some(frame) = self.pending.pop_front() {
                trace!(frame = %frame, "Event stream frame");
                return Ok(frame);
            }

            match self.stream.next().await {
                Some(Ok(chunk)) => self.pending.extend(self.decoder.decode(&chunk)),
                Some(Err(e)) => return Err(StreamError::channel(e.to_string())),
                None => {
                    return match self.decoder.finish() {
                        Some(frame) => Ok(frame),
                        None => Err(StreamError::Closed),
                    };
                }
            }
        }
    }
}
