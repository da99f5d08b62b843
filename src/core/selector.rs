use crate::core::scorer::{Scorer, ScoringWeights};
use crate::domain::model::{ScoredTemplate, SelectionPath, Shortlist, Template, UserPreferences};
use serde::{Deserialize, Serialize};

pub const SHORTLIST_SIZE: usize = 3;

/// Templates blended in when nothing matches well. Curated for the
/// French small-business market the bundled catalog targets.
pub const DEFAULT_FALLBACK_IDS: [&str; 3] =
    ["vitrine-essentiel", "artisan-atelier", "resto-bistrot"];

/// What to do when the best curated default already sits in the top two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Pick the best curated default not already shortlisted, or rank 3.
    #[default]
    Dedupe,
    /// Append the best curated default even if it is already shortlisted.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    pub strong_match_threshold: u32,
    pub fallback_ids: Vec<String>,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            strong_match_threshold: 4,
            fallback_ids: DEFAULT_FALLBACK_IDS.iter().map(|id| id.to_string()).collect(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Recommender {
    scorer: Scorer,
    settings: SelectionSettings,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, settings: SelectionSettings) -> Self {
        Self {
            scorer: Scorer::new(weights),
            settings,
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    pub fn is_fallback(&self, id: &str) -> bool {
        self.settings.fallback_ids.iter().any(|f| f == id)
    }

    /// Every template scored, highest first. Ties keep catalog order.
    pub fn rank(&self, catalog: &[Template], preferences: &UserPreferences) -> Vec<ScoredTemplate> {
        let mut scored: Vec<ScoredTemplate> = catalog
            .iter()
            .map(|template| self.scorer.score(template, preferences))
            .collect();
        sort_by_score(&mut scored);
        scored
    }

    pub fn select(&self, catalog: &[Template], preferences: &UserPreferences) -> Shortlist {
        let ranked = self.rank(catalog, preferences);

        let top_score = match ranked.first() {
            Some(top) => top.score,
            None => {
                return Shortlist {
                    path: SelectionPath::FallbackUnavailable,
                    templates: Vec::new(),
                }
            }
        };

        if top_score >= self.settings.strong_match_threshold {
            tracing::debug!(top_score, "strong match, returning top {}", SHORTLIST_SIZE);
            return Shortlist {
                path: SelectionPath::StrongMatch,
                templates: take_top(ranked, SHORTLIST_SIZE),
            };
        }

        // ranked is already stable-sorted, so filtering keeps score order with catalog tie-breaks
        let candidates: Vec<&ScoredTemplate> =
            ranked.iter().filter(|s| self.is_fallback(s.id())).collect();

        if candidates.is_empty() {
            tracing::warn!(
                top_score,
                "no curated default found in catalog, returning plain top {}",
                SHORTLIST_SIZE
            );
            return Shortlist {
                path: SelectionPath::FallbackUnavailable,
                templates: take_top(ranked, SHORTLIST_SIZE),
            };
        }

        let head = ranked.len().min(SHORTLIST_SIZE - 1);
        let top_two = &ranked[..head];

        let third = match self.settings.duplicate_policy {
            DuplicatePolicy::Preserve => Some(candidates[0]),
            DuplicatePolicy::Dedupe => candidates
                .iter()
                .copied()
                .find(|c| !top_two.iter().any(|t| t.id() == c.id()))
                .or_else(|| ranked.get(head)),
        };

        let mut blended: Vec<ScoredTemplate> = top_two.to_vec();
        if let Some(third) = third {
            tracing::debug!(top_score, fallback = third.id(), "blending curated default");
            blended.push(third.clone());
        }
        sort_by_score(&mut blended);

        Shortlist {
            path: SelectionPath::FallbackBlend,
            templates: blended,
        }
    }

    pub fn recommend(
        &self,
        catalog: &[Template],
        preferences: &UserPreferences,
    ) -> Vec<ScoredTemplate> {
        self.select(catalog, preferences).templates
    }
}

/// Shortlist with default weights, threshold and curated defaults.
pub fn recommend(catalog: &[Template], preferences: &UserPreferences) -> Vec<ScoredTemplate> {
    Recommender::default().recommend(catalog, preferences)
}

fn sort_by_score(scored: &mut [ScoredTemplate]) {
    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}

fn take_top(ranked: Vec<ScoredTemplate>, n: usize) -> Vec<ScoredTemplate> {
    ranked.into_iter().take(n).collect()
}
