use crate::domain::model::{Axis, MatchDetails, ScoredTemplate, Template, UserPreferences};
use serde::{Deserialize, Serialize};

/// Points awarded per matching axis plus the coherence bonus.
///
/// Goal carries the most weight because it is the conversion-intent signal.
/// Config validation keeps goal above industry and style, and both of those
/// above level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub industry: u32,
    pub goal: u32,
    pub style: u32,
    pub level: u32,
    pub coherence_bonus: u32,
    pub coherence_min_axes: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry: 2,
            goal: 3,
            style: 2,
            level: 1,
            coherence_bonus: 1,
            coherence_min_axes: 3,
        }
    }
}

impl ScoringWeights {
    pub fn weight(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Industry => self.industry,
            Axis::Goal => self.goal,
            Axis::Style => self.style,
            Axis::Level => self.level,
        }
    }

    /// Score of a template that matches every axis.
    pub fn max_score(&self) -> u32 {
        [self.industry, self.goal, self.style, self.level, self.coherence_bonus]
            .into_iter()
            .fold(0u32, u32::saturating_add)
    }

    pub fn points_for(&self, details: &MatchDetails) -> u32 {
        let base: u32 = Axis::ALL
            .iter()
            .filter(|axis| details.get(**axis))
            .map(|axis| self.weight(*axis))
            .fold(0u32, u32::saturating_add);

        if details.matched_count() >= self.coherence_min_axes {
            base.saturating_add(self.coherence_bonus)
        } else {
            base
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn match_details(template: &Template, preferences: &UserPreferences) -> MatchDetails {
        MatchDetails {
            industry_match: template.supports(Axis::Industry, &preferences.industry),
            goal_match: template.supports(Axis::Goal, &preferences.goal),
            style_match: template.supports(Axis::Style, &preferences.style),
            level_match: template.supports(Axis::Level, &preferences.level),
        }
    }

    pub fn score(&self, template: &Template, preferences: &UserPreferences) -> ScoredTemplate {
        let match_details = Self::match_details(template, preferences);
        ScoredTemplate {
            template: template.clone(),
            score: self.weights.points_for(&match_details),
            match_details,
        }
    }
}

/// Scores with the default weights.
pub fn score(template: &Template, preferences: &UserPreferences) -> ScoredTemplate {
    Scorer::default().score(template, preferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(industries: &[&str], goals: &[&str], styles: &[&str], levels: &[&str]) -> Template {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        Template {
            id: "t".to_string(),
            title: "T".to_string(),
            tagline: String::new(),
            industries: owned(industries),
            goals: owned(goals),
            styles: owned(styles),
            levels: owned(levels),
            tags: vec![],
            benefits: vec![],
            demo_url: None,
            preview_image_url: None,
        }
    }

    fn prefs() -> UserPreferences {
        UserPreferences::new("resto", "reservations", "chaleureux", "debutant")
    }

    #[test]
    fn test_full_match_scores_nine() {
        let t = template(&["resto"], &["reservations"], &["chaleureux"], &["debutant"]);
        let scored = score(&t, &prefs());
        assert_eq!(scored.score, 9);
        assert_eq!(scored.match_details.matched_count(), 4);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let t = template(&["boutique"], &["ventes"], &["premium"], &["avance"]);
        let scored = score(&t, &prefs());
        assert_eq!(scored.score, 0);
        assert_eq!(scored.match_details, MatchDetails::default());
    }

    #[test]
    fn test_coherence_bonus_needs_three_axes() {
        // industry + goal only: 2 + 3, no bonus
        let two = template(&["resto"], &["reservations"], &["premium"], &["avance"]);
        assert_eq!(score(&two, &prefs()).score, 5);

        // industry + goal + level: 2 + 3 + 1 + bonus
        let three = template(&["resto"], &["reservations"], &["premium"], &["debutant"]);
        assert_eq!(score(&three, &prefs()).score, 7);
    }

    #[test]
    fn test_goal_outweighs_other_axes() {
        let goal_only = template(&[], &["reservations"], &[], &[]);
        let industry_only = template(&["resto"], &[], &[], &[]);
        let style_only = template(&[], &[], &["chaleureux"], &[]);
        let level_only = template(&[], &[], &[], &["debutant"]);

        let p = prefs();
        assert!(score(&goal_only, &p).score > score(&industry_only, &p).score);
        assert_eq!(score(&industry_only, &p).score, score(&style_only, &p).score);
        assert!(score(&style_only, &p).score > score(&level_only, &p).score);
    }

    #[test]
    fn test_multi_valued_axis_membership() {
        let t = template(&["boutique", "resto"], &[], &[], &[]);
        let scored = score(&t, &prefs());
        assert!(scored.match_details.industry_match);
        assert!(!scored.match_details.goal_match);
    }

    #[test]
    fn test_score_matches_weighted_flag_sum_for_all_combinations() {
        let p = prefs();
        let weights = ScoringWeights::default();
        for mask in 0u8..16 {
            let pick = |bit: u8, value: &'static str| -> Vec<&'static str> {
                if mask & bit != 0 {
                    vec![value]
                } else {
                    vec!["other"]
                }
            };
            let t = template(
                &pick(1, "resto"),
                &pick(2, "reservations"),
                &pick(4, "chaleureux"),
                &pick(8, "debutant"),
            );
            let scored = score(&t, &p);
            let flags = scored.match_details;
            let mut expected = 0;
            if flags.industry_match {
                expected += 2;
            }
            if flags.goal_match {
                expected += 3;
            }
            if flags.style_match {
                expected += 2;
            }
            if flags.level_match {
                expected += 1;
            }
            if flags.matched_count() >= 3 {
                expected += 1;
            }
            assert_eq!(scored.score, expected, "mask {mask:#06b}");
            assert!(scored.score <= weights.max_score());
            assert_eq!(flags.industry_match, t.industries.contains(&p.industry));
            assert_eq!(flags.level_match, t.levels.contains(&p.level));
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let t = template(&["resto"], &["leads"], &["chaleureux"], &["debutant"]);
        let p = prefs();
        assert_eq!(score(&t, &p), score(&t, &p));
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::new(ScoringWeights {
            industry: 3,
            goal: 5,
            style: 3,
            level: 1,
            coherence_bonus: 2,
            coherence_min_axes: 4,
        });
        let t = template(&["resto"], &["reservations"], &["chaleureux"], &["other"]);
        assert_eq!(scorer.score(&t, &prefs()).score, 11);
        assert_eq!(scorer.weights().max_score(), 14);
    }

    #[test]
    fn test_huge_weights_saturate_instead_of_overflowing() {
        let weights = ScoringWeights {
            industry: u32::MAX - 5,
            goal: u32::MAX,
            style: u32::MAX - 5,
            level: 1,
            coherence_bonus: 1,
            coherence_min_axes: 3,
        };
        assert_eq!(weights.max_score(), u32::MAX);

        let scorer = Scorer::new(weights);
        let t = template(&["resto"], &["reservations"], &["chaleureux"], &["debutant"]);
        assert_eq!(scorer.score(&t, &prefs()).score, u32::MAX);
    }
}
