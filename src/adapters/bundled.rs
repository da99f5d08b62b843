use crate::domain::ports::{CatalogFormat, CatalogSource};
use crate::utils::error::Result;
use async_trait::async_trait;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(BUNDLED_CATALOG.as_bytes().to_vec())
    }

    fn format(&self) -> CatalogFormat {
        CatalogFormat::Json
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}
