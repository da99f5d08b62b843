use crate::config::toml_config::CATALOG_EXTENSIONS;
use crate::domain::ports::{CatalogFormat, CatalogSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalCatalogSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl LocalCatalogSource {
    /// The format follows the file extension (`.json` or `.toml`).
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        validate_path("catalog.path", &path)?;
        let format = match validate_file_extension("catalog.path", &path, &CATALOG_EXTENSIONS)? {
            "toml" => CatalogFormat::Toml,
            _ => CatalogFormat::Json,
        };

        Ok(Self {
            path: PathBuf::from(path),
            format,
        })
    }
}

#[async_trait]
impl CatalogSource for LocalCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    fn format(&self) -> CatalogFormat {
        self.format
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
