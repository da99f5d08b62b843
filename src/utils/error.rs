use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Catalog source returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid catalog entry '{template_id}' ({field}): {reason}")]
    CatalogValidationError {
        template_id: String,
        field: String,
        reason: String,
    },

    #[error("Preferences incomplete, missing: {}", .missing.join(", "))]
    IncompletePreferences { missing: Vec<&'static str> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Network,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. }
            | MatchError::TomlError(_) => ErrorCategory::Configuration,
            MatchError::CatalogValidationError { .. } | MatchError::SerializationError(_) => {
                ErrorCategory::Catalog
            }
            MatchError::HttpError(_) | MatchError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            MatchError::IncompletePreferences { .. } => ErrorCategory::Input,
            MatchError::IoError(_) | MatchError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::IoError(_) => "Check that the file exists and is readable",
            MatchError::HttpError(_) | MatchError::HttpStatusError { .. } => {
                "Check the catalog URL and network connectivity, then retry"
            }
            MatchError::SerializationError(_) => {
                "Make sure the catalog is a JSON array of templates"
            }
            MatchError::TomlError(_) => "Fix the TOML syntax in the configuration or catalog file",
            MatchError::CsvError(_) => "Retry with --format text or --format json",
            MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => {
                "Review the configuration file against the documented defaults"
            }
            MatchError::CatalogValidationError { .. } => {
                "Fix the reported catalog entry; the catalog is rejected as a whole"
            }
            MatchError::IncompletePreferences { .. } => {
                "Provide a value for industry, goal, style and level"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::IncompletePreferences { missing } => {
                format!("Please choose a value for: {}", missing.join(", "))
            }
            MatchError::CatalogValidationError {
                template_id,
                field,
                reason,
            } => format!("The template catalog is invalid ({template_id}.{field}): {reason}"),
            MatchError::HttpError(_) | MatchError::HttpStatusError { .. } => {
                "Could not download the template catalog".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
