pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::catalog::Catalog;
pub use crate::core::engine::MatchEngine;
pub use crate::core::labels::{
    format_goal_key, format_industry_key, format_level_key, format_style_key, LabelBook,
};
pub use crate::core::options::available_options;
pub use crate::core::scorer::{score, Scorer, ScoringWeights};
pub use crate::core::selector::{recommend, DuplicatePolicy, Recommender, SelectionSettings};
pub use crate::core::wizard::{Wizard, WizardStep};
pub use config::toml_config::RecommenderConfig;
pub use domain::model::{
    Axis, AvailableOptions, MatchDetails, Recommendation, ScoredTemplate, SelectionPath, Template,
    UserPreferences,
};
pub use utils::error::{MatchError, Result};
