use crate::utils::error::Result;
use async_trait::async_trait;

/// Encoding of the raw catalog bytes returned by a [`CatalogSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    fn format(&self) -> CatalogFormat;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
