use crate::core::labels::LabelBook;
use crate::domain::model::{Axis, AvailableOptions, Recommendation};
use crate::utils::error::{MatchError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub const CSV_HEADER: [&str; 8] = [
    "rank",
    "id",
    "title",
    "score",
    "industry_match",
    "goal_match",
    "style_match",
    "level_match",
];

pub fn render(recommendation: &Recommendation, format: OutputFormat, labels: &LabelBook) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(recommendation, labels)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(recommendation)?),
        OutputFormat::Csv => render_csv(recommendation),
    }
}

fn render_text(recommendation: &Recommendation, labels: &LabelBook) -> String {
    let prefs = &recommendation.preferences;
    let summary: Vec<String> = Axis::ALL
        .iter()
        .map(|axis| labels.format(*axis, prefs.get(*axis)))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Recommended designs for: {}", summary.join(" · "));
    let _ = writeln!(out, "Selection: {}", recommendation.path);

    if recommendation.templates.is_empty() {
        let _ = writeln!(out, "\nNo template available.");
        return out;
    }

    for (rank, scored) in recommendation.templates.iter().enumerate() {
        let template = &scored.template;
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} [{}]  score {}", rank + 1, template.title, template.id, scored.score);
        if !template.tagline.is_empty() {
            let _ = writeln!(out, "   {}", template.tagline);
        }

        let matched: Vec<String> = scored
            .match_details
            .matched_axes()
            .into_iter()
            .map(|axis| labels.format(axis, prefs.get(axis)))
            .collect();
        if matched.is_empty() {
            let _ = writeln!(out, "   Matches: none");
        } else {
            let _ = writeln!(out, "   Matches: {}", matched.join(", "));
        }

        if !template.benefits.is_empty() {
            let _ = writeln!(out, "   Benefits: {}", template.benefits.join(" / "));
        }
        if let Some(demo) = &template.demo_url {
            let _ = writeln!(out, "   Demo: {}", demo);
        }
    }

    out
}

fn render_csv(recommendation: &Recommendation) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (rank, scored) in recommendation.templates.iter().enumerate() {
        let details = scored.match_details;
        writer.write_record([
            (rank + 1).to_string(),
            scored.template.id.clone(),
            scored.template.title.clone(),
            scored.score.to_string(),
            details.industry_match.to_string(),
            details.goal_match.to_string(),
            details.style_match.to_string(),
            details.level_match.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MatchError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[derive(Serialize)]
struct OptionEntry {
    key: String,
    label: String,
}

/// Lists selectable values per axis with their display label.
pub fn render_options(options: &AvailableOptions, format: OutputFormat, labels: &LabelBook) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for axis in Axis::ALL {
                let entries: Vec<OptionEntry> = options
                    .for_axis(axis)
                    .iter()
                    .map(|key| OptionEntry {
                        key: key.clone(),
                        label: labels.format(axis, key),
                    })
                    .collect();
                map.insert(axis.key().to_string(), serde_json::to_value(entries)?);
            }
            Ok(serde_json::to_string_pretty(&map)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["axis", "key", "label"])?;
            for axis in Axis::ALL {
                for key in options.for_axis(axis) {
                    writer.write_record([axis.key(), key.as_str(), labels.format(axis, key).as_str()])?;
                }
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| MatchError::IoError(e.into_error()))?;
            String::from_utf8(bytes).map_err(|e| {
                MatchError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for axis in Axis::ALL {
                let _ = writeln!(out, "{}:", axis);
                for key in options.for_axis(axis) {
                    let _ = writeln!(out, "  {:<16} {}", key, labels.format(axis, key));
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        MatchDetails, ScoredTemplate, SelectionPath, Template, UserPreferences,
    };
    use chrono::Utc;

    fn recommendation() -> Recommendation {
        let template = Template {
            id: "resto-bistrot".to_string(),
            title: "Bistrot".to_string(),
            tagline: "Votre carte et vos réservations".to_string(),
            industries: vec!["resto".to_string()],
            goals: vec!["reservations".to_string()],
            styles: vec![],
            levels: vec![],
            tags: vec![],
            benefits: vec!["Réservations directes".to_string()],
            demo_url: Some("https://demo.example.com/bistrot".to_string()),
            preview_image_url: None,
        };
        Recommendation {
            preferences: UserPreferences::new("resto", "reservations", "premium", "avance"),
            path: SelectionPath::StrongMatch,
            templates: vec![ScoredTemplate {
                template,
                score: 5,
                match_details: MatchDetails {
                    industry_match: true,
                    goal_match: true,
                    ..Default::default()
                },
            }],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_text_uses_labels() {
        let text = render(&recommendation(), OutputFormat::Text, &LabelBook::default()).unwrap();
        assert!(text.contains("1. Bistrot [resto-bistrot]  score 5"));
        assert!(text.contains("Matches: Restaurant, Prendre des réservations"));
        assert!(text.contains("Demo: https://demo.example.com/bistrot"));
    }

    #[test]
    fn test_csv_header_and_row() {
        let csv = render(&recommendation(), OutputFormat::Csv, &LabelBook::default()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("rank,id,title,score,industry_match,goal_match,style_match,level_match")
        );
        assert_eq!(lines.next(), Some("1,resto-bistrot,Bistrot,5,true,true,false,false"));
    }

    #[test]
    fn test_json_is_camel_case() {
        let json = render(&recommendation(), OutputFormat::Json, &LabelBook::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "strong_match");
        assert_eq!(value["templates"][0]["demoUrl"], "https://demo.example.com/bistrot");
        assert_eq!(value["templates"][0]["matchDetails"]["industryMatch"], true);
    }

    #[test]
    fn test_render_options_text_and_json() {
        let options = AvailableOptions {
            industries: vec!["artisan".to_string(), "nouveau".to_string()],
            ..Default::default()
        };
        let labels = LabelBook::default();

        let text = render_options(&options, OutputFormat::Text, &labels).unwrap();
        assert!(text.contains("industry:"));
        assert!(text.contains("Artisan"));

        let json = render_options(&options, OutputFormat::Json, &labels).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["industry"][1]["label"], "nouveau");
        assert!(value["goal"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_options_csv() {
        let options = AvailableOptions {
            industries: vec!["artisan".to_string()],
            styles: vec!["premium".to_string(), "retro".to_string()],
            ..Default::default()
        };

        let csv = render_options(&options, OutputFormat::Csv, &LabelBook::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "axis,key,label",
                "industry,artisan,Artisan",
                "style,premium,Premium",
                "style,retro,retro",
            ]
        );
    }
}
