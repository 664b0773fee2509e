//! Application icon fetcher.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::domain::errors::IconError;
use crate::domain::ports::{IconDimensions, IconPort};

/// Downloads icons and decodes them to check they are usable images.
pub struct IconFetcher {
    client: Client,
}

impl IconFetcher {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    async fn download(&self, url: &str) -> Result<Bytes, IconError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IconError::fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconError::Status {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| IconError::fetch(format!("failed to read body: {e}")))
    }
}

#[async_trait]
impl IconPort for IconFetcher {
    async fn resolve(&self, url: &str) -> Result<IconDimensions, IconError> {
        debug!(%url, "Fetching icon");

        let bytes = self.download(url).await?;

        tokio::task::spawn_blocking(move || decode_dimensions(&bytes))
            .await
            .map_err(|e| IconError::decode(format!("decode task panicked: {e}")))?
    }
}

fn decode_dimensions(bytes: &[u8]) -> Result<IconDimensions, IconError> {
    let image = image::load_from_memory(bytes).map_err(|e| IconError::decode(e.to_string()))?;

    Ok(IconDimensions {
        width: image.width(),
        height: image.height(),
    })
}
