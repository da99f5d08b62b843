use crate::domain::ports::{CatalogFormat, CatalogSource};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the catalog from a URL, e.g. an export published by the back-office.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
    format: CatalogFormat,
}

impl HttpCatalogSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        validate_url("catalog.url", &url)?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let format = if url.split('?').next().unwrap_or_default().ends_with(".toml") {
            CatalogFormat::Toml
        } else {
            CatalogFormat::Json
        };

        Ok(Self {
            client,
            url,
            format,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatchError::HttpStatusError {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Fetched {} bytes from {}", bytes.len(), self.url);
        Ok(bytes.to_vec())
    }

    fn format(&self) -> CatalogFormat {
        self.format
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
