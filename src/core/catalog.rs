use crate::domain::model::{Axis, Template};
use crate::domain::ports::{CatalogFormat, CatalogSource};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::Deserialize;
use std::collections::HashSet;

/// Validated, read-only template catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<Template>,
}

#[derive(Deserialize)]
struct TomlCatalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Builds a catalog and validates it. Nothing invalid gets past this point,
    /// so scoring never has to deal with malformed entries.
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        let catalog = Self { templates };
        catalog.validate()?;

        for template in &catalog.templates {
            for axis in Axis::ALL {
                if template.values(axis).is_empty() {
                    tracing::warn!(
                        template = %template.id,
                        axis = %axis,
                        "template declares no values for axis, it will never match it"
                    );
                }
            }
        }

        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let templates: Vec<Template> = serde_json::from_str(content)?;
        Self::new(templates)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::new(parsed.templates)
    }

    pub fn from_bytes(bytes: &[u8], format: CatalogFormat) -> Result<Self> {
        let content = std::str::from_utf8(bytes).map_err(|e| MatchError::CatalogValidationError {
            template_id: "<catalog>".to_string(),
            field: "encoding".to_string(),
            reason: format!("catalog is not valid UTF-8: {}", e),
        })?;

        match format {
            CatalogFormat::Json => Self::from_json_str(content),
            CatalogFormat::Toml => Self::from_toml_str(content),
        }
    }

    pub async fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::info!("📚 Loading template catalog from {}", source.describe());
        let bytes = source.fetch().await?;
        let catalog = Self::from_bytes(&bytes, source.format())?;
        tracing::info!("✅ Loaded {} templates", catalog.len());
        Ok(catalog)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Curated default ids that do not exist in this catalog.
    pub fn missing_ids<'a>(&self, ids: &'a [String]) -> Vec<&'a str> {
        ids.iter()
            .filter(|id| self.get(id).is_none())
            .map(|id| id.as_str())
            .collect()
    }
}

fn invalid(template_id: &str, field: &str, reason: impl Into<String>) -> MatchError {
    MatchError::CatalogValidationError {
        template_id: template_id.to_string(),
        field: field.to_string(),
        reason: reason.into(),
    }
}

impl Validate for Template {
    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(invalid("<unnamed>", "id", "id cannot be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid(&self.id, "title", "title cannot be empty"));
        }

        for axis in Axis::ALL {
            if self.values(axis).iter().any(|v| v.trim().is_empty()) {
                return Err(invalid(&self.id, axis.key(), "axis values cannot be blank"));
            }
        }

        for (field, url) in [
            ("demoUrl", &self.demo_url),
            ("previewImageUrl", &self.preview_image_url),
        ] {
            if let Some(url) = url {
                validate_url(field, url).map_err(|e| invalid(&self.id, field, e.to_string()))?;
            }
        }

        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(invalid("<catalog>", "templates", "catalog contains no templates"));
        }

        let mut ids = HashSet::new();
        for template in &self.templates {
            template.validate()?;
            if !ids.insert(template.id.as_str()) {
                return Err(invalid(&template.id, "id", "duplicate template id"));
            }
        }

        Ok(())
    }
}
