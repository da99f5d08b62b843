use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four preference dimensions a visitor picks in the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Industry,
    Goal,
    Style,
    Level,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Industry, Axis::Goal, Axis::Style, Axis::Level];

    pub fn key(&self) -> &'static str {
        match self {
            Axis::Industry => "industry",
            Axis::Goal => "goal",
            Axis::Style => "style",
            Axis::Level => "level",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "industry" | "industries" => Some(Axis::Industry),
            "goal" | "goals" => Some(Axis::Goal),
            "style" | "styles" => Some(Axis::Style),
            "level" | "levels" => Some(Axis::Level),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A design template from the catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
}

impl Template {
    pub fn values(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Industry => &self.industries,
            Axis::Goal => &self.goals,
            Axis::Style => &self.styles,
            Axis::Level => &self.levels,
        }
    }

    pub fn supports(&self, axis: Axis, value: &str) -> bool {
        self.values(axis).iter().any(|v| v == value)
    }
}

/// The four answers of one simulator session.
///
/// Setters consume and return a new value so each wizard step hands an
/// updated copy to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub industry: String,
    pub goal: String,
    pub style: String,
    pub level: String,
}

impl UserPreferences {
    pub fn new(
        industry: impl Into<String>,
        goal: impl Into<String>,
        style: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            industry: industry.into(),
            goal: goal.into(),
            style: style.into(),
            level: level.into(),
        }
    }

    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::Industry => &self.industry,
            Axis::Goal => &self.goal,
            Axis::Style => &self.style,
            Axis::Level => &self.level,
        }
    }

    pub fn with(self, axis: Axis, value: impl Into<String>) -> Self {
        let value = value.into();
        match axis {
            Axis::Industry => Self {
                industry: value,
                ..self
            },
            Axis::Goal => Self { goal: value, ..self },
            Axis::Style => Self {
                style: value,
                ..self
            },
            Axis::Level => Self {
                level: value,
                ..self
            },
        }
    }

    pub fn with_industry(self, value: impl Into<String>) -> Self {
        self.with(Axis::Industry, value)
    }

    pub fn with_goal(self, value: impl Into<String>) -> Self {
        self.with(Axis::Goal, value)
    }

    pub fn with_style(self, value: impl Into<String>) -> Self {
        self.with(Axis::Style, value)
    }

    pub fn with_level(self, value: impl Into<String>) -> Self {
        self.with(Axis::Level, value)
    }

    /// Axes still blank (empty or whitespace), in wizard order.
    pub fn missing_axes(&self) -> Vec<&'static str> {
        Axis::ALL
            .iter()
            .filter(|axis| self.get(**axis).trim().is_empty())
            .map(|axis| axis.key())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_axes().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub industry_match: bool,
    pub goal_match: bool,
    pub style_match: bool,
    pub level_match: bool,
}

impl MatchDetails {
    pub fn get(&self, axis: Axis) -> bool {
        match axis {
            Axis::Industry => self.industry_match,
            Axis::Goal => self.goal_match,
            Axis::Style => self.style_match,
            Axis::Level => self.level_match,
        }
    }

    pub fn matched_count(&self) -> usize {
        Axis::ALL.iter().filter(|axis| self.get(**axis)).count()
    }

    pub fn matched_axes(&self) -> Vec<Axis> {
        Axis::ALL.into_iter().filter(|axis| self.get(*axis)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTemplate {
    #[serde(flatten)]
    pub template: Template,
    pub score: u32,
    pub match_details: MatchDetails,
}

impl ScoredTemplate {
    pub fn id(&self) -> &str {
        &self.template.id
    }
}

/// Selectable values per axis, derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableOptions {
    pub industries: Vec<String>,
    pub goals: Vec<String>,
    pub styles: Vec<String>,
    pub levels: Vec<String>,
}

impl AvailableOptions {
    pub fn for_axis(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Industry => &self.industries,
            Axis::Goal => &self.goals,
            Axis::Style => &self.styles,
            Axis::Level => &self.levels,
        }
    }

    pub(crate) fn for_axis_mut(&mut self, axis: Axis) -> &mut Vec<String> {
        match axis {
            Axis::Industry => &mut self.industries,
            Axis::Goal => &mut self.goals,
            Axis::Style => &mut self.styles,
            Axis::Level => &mut self.levels,
        }
    }
}

/// Which branch of the selector produced a shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    StrongMatch,
    FallbackBlend,
    FallbackUnavailable,
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SelectionPath::StrongMatch => "strong match",
            SelectionPath::FallbackBlend => "blended with curated defaults",
            SelectionPath::FallbackUnavailable => "weak match, no curated default in catalog",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortlist {
    pub path: SelectionPath,
    pub templates: Vec<ScoredTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub preferences: UserPreferences,
    pub path: SelectionPath,
    pub templates: Vec<ScoredTemplate>,
    pub generated_at: DateTime<Utc>,
}
