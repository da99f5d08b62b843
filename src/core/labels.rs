use crate::domain::model::Axis;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const INDUSTRY_LABELS: &[(&str, &str)] = &[
    ("artisan", "Artisan"),
    ("resto", "Restaurant"),
    ("boutique", "Boutique"),
    ("beaute", "Beauté & bien-être"),
    ("sante", "Santé"),
    ("liberal", "Profession libérale"),
    ("immobilier", "Immobilier"),
    ("coach", "Coach / Consultant"),
];

const GOAL_LABELS: &[(&str, &str)] = &[
    ("leads", "Générer des demandes de devis"),
    ("reservations", "Prendre des réservations"),
    ("ventes", "Vendre en ligne"),
    ("credibilite", "Renforcer ma crédibilité"),
    ("visibilite", "Être trouvé sur Google"),
];

const STYLE_LABELS: &[(&str, &str)] = &[
    ("moderne", "Moderne"),
    ("minimaliste", "Minimaliste"),
    ("chaleureux", "Chaleureux"),
    ("premium", "Premium"),
    ("colore", "Coloré"),
];

const LEVEL_LABELS: &[(&str, &str)] = &[
    ("debutant", "Je n'ai pas encore de site"),
    ("intermediaire", "J'ai un site à moderniser"),
    ("avance", "Je veux un site sur mesure"),
];

fn builtin(axis: Axis) -> &'static [(&'static str, &'static str)] {
    match axis {
        Axis::Industry => INDUSTRY_LABELS,
        Axis::Goal => GOAL_LABELS,
        Axis::Style => STYLE_LABELS,
        Axis::Level => LEVEL_LABELS,
    }
}

fn lookup(axis: Axis, key: &str) -> Option<&'static str> {
    builtin(axis)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

pub fn format_key(axis: Axis, key: &str) -> String {
    lookup(axis, key).unwrap_or(key).to_string()
}

pub fn format_industry_key(key: &str) -> String {
    format_key(Axis::Industry, key)
}

pub fn format_goal_key(key: &str) -> String {
    format_key(Axis::Goal, key)
}

pub fn format_style_key(key: &str) -> String {
    format_key(Axis::Style, key)
}

pub fn format_level_key(key: &str) -> String {
    format_key(Axis::Level, key)
}

/// Per-axis label overrides, as read from the `[labels.*]` config tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub industry: HashMap<String, String>,
    pub goal: HashMap<String, String>,
    pub style: HashMap<String, String>,
    pub level: HashMap<String, String>,
}

impl LabelOverrides {
    pub fn for_axis(&self, axis: Axis) -> &HashMap<String, String> {
        match axis {
            Axis::Industry => &self.industry,
            Axis::Goal => &self.goal,
            Axis::Style => &self.style,
            Axis::Level => &self.level,
        }
    }
}

/// Built-in labels with config overrides layered on top. Unknown keys are
/// returned as-is.
#[derive(Debug, Clone, Default)]
pub struct LabelBook {
    overrides: LabelOverrides,
}

impl LabelBook {
    pub fn new(overrides: LabelOverrides) -> Self {
        Self { overrides }
    }

    pub fn format(&self, axis: Axis, key: &str) -> String {
        match self.overrides.for_axis(axis).get(key) {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ => format_key(axis, key),
        }
    }
}
