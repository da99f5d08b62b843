use crate::core::catalog::Catalog;
use crate::core::options::available_options;
use crate::core::selector::Recommender;
use crate::domain::model::{AvailableOptions, Recommendation, UserPreferences};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Utc;

/// Catalog loaded once plus the recommender that runs against it.
pub struct MatchEngine {
    catalog: Catalog,
    recommender: Recommender,
}

impl MatchEngine {
    pub fn new(catalog: Catalog, recommender: Recommender) -> Self {
        let missing = catalog.missing_ids(&recommender.settings().fallback_ids);
        if !missing.is_empty() {
            tracing::warn!(
                "⚠️ Curated default templates not in catalog: {}",
                missing.join(", ")
            );
        }
        Self {
            catalog,
            recommender,
        }
    }

    pub async fn load<S: CatalogSource + ?Sized>(source: &S, recommender: Recommender) -> Result<Self> {
        let catalog = Catalog::load(source).await?;
        Ok(Self::new(catalog, recommender))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn options(&self) -> AvailableOptions {
        available_options(self.catalog.templates())
    }

    /// Checks that all four answers are present, then builds the shortlist.
    pub fn run(&self, preferences: &UserPreferences) -> Result<Recommendation> {
        preferences.validate()?;

        tracing::debug!(
            industry = %preferences.industry,
            goal = %preferences.goal,
            style = %preferences.style,
            level = %preferences.level,
            "scoring {} templates",
            self.catalog.len()
        );

        let shortlist = self.recommender.select(self.catalog.templates(), preferences);

        tracing::info!(
            "🎯 Shortlisted {} templates ({})",
            shortlist.templates.len(),
            shortlist.path
        );

        Ok(Recommendation {
            preferences: preferences.clone(),
            path: shortlist.path,
            templates: shortlist.templates,
            generated_at: Utc::now(),
        })
    }
}
