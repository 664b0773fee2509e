//! Application icon port.

use async_trait::async_trait;

use crate::domain::errors::IconError;

/// Pixel size of a decoded icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDimensions {
    pub width: u32,
    pub height: u32,
}

/// Port for resolving icon URLs.
#[async_trait]
pub trait IconPort: Send + Sync {
    /// Fetches and decodes the icon at `url`.
    async fn resolve(&self, url: &str) -> Result<IconDimensions, IconError>;
}
