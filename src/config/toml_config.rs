use crate::core::labels::{LabelBook, LabelOverrides};
use crate::core::scorer::ScoringWeights;
use crate::core::selector::{Recommender, SelectionSettings};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CATALOG_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Upper bound for any single scoring weight or the coherence bonus.
pub const MAX_WEIGHT: u32 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub catalog: CatalogConfig,
    pub scoring: ScoringWeights,
    pub selection: SelectionSettings,
    pub labels: LabelOverrides,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

/// Where the catalog should be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Bundled,
    Path(String),
    Url(String),
}

impl RecommenderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        match (&self.catalog.path, &self.catalog.url) {
            (Some(_), Some(_)) => {
                return Err(MatchError::ConfigValidationError {
                    field: "catalog".to_string(),
                    message: "set either catalog.path or catalog.url, not both".to_string(),
                })
            }
            (Some(path), None) => {
                validate_path("catalog.path", path)?;
                validate_file_extension("catalog.path", path, &CATALOG_EXTENSIONS)?;
            }
            (None, Some(url)) => validate_url("catalog.url", url)?,
            (None, None) => {}
        }

        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_range("catalog.timeout_seconds", timeout, 1, 300)?;
        }

        self.validate_weights()?;

        let max_score = self.scoring.max_score();
        validate_range(
            "selection.strong_match_threshold",
            self.selection.strong_match_threshold,
            1,
            max_score,
        )?;

        if self.selection.fallback_ids.is_empty() {
            return Err(MatchError::MissingConfigError {
                field: "selection.fallback_ids".to_string(),
            });
        }
        for id in &self.selection.fallback_ids {
            validate_non_empty_string("selection.fallback_ids", id)?;
        }

        Ok(())
    }

    fn validate_weights(&self) -> Result<()> {
        let w = &self.scoring;
        for (field, value) in [
            ("scoring.industry", w.industry),
            ("scoring.goal", w.goal),
            ("scoring.style", w.style),
            ("scoring.level", w.level),
            ("scoring.coherence_bonus", w.coherence_bonus),
        ] {
            validate_range(field, value, 0, MAX_WEIGHT)?;
        }

        let ordering = [
            ("scoring.goal", w.goal, "scoring.industry", w.industry),
            ("scoring.goal", w.goal, "scoring.style", w.style),
            ("scoring.industry", w.industry, "scoring.level", w.level),
            ("scoring.style", w.style, "scoring.level", w.level),
        ];

        for (higher, high, lower, low) in ordering {
            if high <= low {
                return Err(MatchError::InvalidConfigValueError {
                    field: higher.to_string(),
                    value: high.to_string(),
                    reason: format!("must be greater than {} ({})", lower, low),
                });
            }
        }

        validate_range("scoring.coherence_min_axes", w.coherence_min_axes, 1, 4)?;
        Ok(())
    }

    pub fn catalog_location(&self) -> CatalogLocation {
        match (&self.catalog.path, &self.catalog.url) {
            (Some(path), _) => CatalogLocation::Path(path.clone()),
            (None, Some(url)) => CatalogLocation::Url(url.clone()),
            (None, None) => CatalogLocation::Bundled,
        }
    }

    pub fn recommender(&self) -> Recommender {
        Recommender::new(self.scoring, self.selection.clone())
    }

    pub fn label_book(&self) -> LabelBook {
        LabelBook::new(self.labels.clone())
    }
}

impl Validate for RecommenderConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
