// Adapters layer: concrete catalog sources (bundled data file, local file, http).

pub mod bundled;
pub mod http;
pub mod local;

pub use bundled::BundledCatalog;
pub use http::HttpCatalogSource;
pub use local::LocalCatalogSource;

use crate::config::toml_config::CatalogLocation;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::time::Duration;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub fn source_for(
    location: &CatalogLocation,
    timeout: Option<Duration>,
) -> Result<Box<dyn CatalogSource>> {
    let source: Box<dyn CatalogSource> = match location {
        CatalogLocation::Bundled => Box::new(BundledCatalog),
        CatalogLocation::Path(path) => Box::new(LocalCatalogSource::new(path)?),
        CatalogLocation::Url(url) => Box::new(HttpCatalogSource::new(
            url.clone(),
            timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT),
        )?),
    };
    Ok(source)
}
