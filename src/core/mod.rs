pub mod catalog;
pub mod engine;
pub mod labels;
pub mod options;
pub mod scorer;
pub mod selector;
pub mod wizard;

pub use crate::domain::model::{
    Axis, AvailableOptions, MatchDetails, Recommendation, ScoredTemplate, SelectionPath,
    Shortlist, Template, UserPreferences,
};
pub use crate::domain::ports::{CatalogFormat, CatalogSource};
pub use crate::utils::error::Result;
