//! Server-push channel ports.

use async_trait::async_trait;

use crate::domain::errors::StreamResult;

/// One open push channel.
#[async_trait]
pub trait PushChannel: Send {
    /// Waits for the next frame's text.
    ///
    /// Returns `StreamError::Closed` when the server ends the stream.
    async fn next_frame(&mut self) -> StreamResult<String>;
}

/// Factory for push channels; called again for every reconnect.
#[async_trait]
pub trait PushConnector: Send + Sync {
    async fn open(&self) -> StreamResult<Box<dyn PushChannel>>;
}
