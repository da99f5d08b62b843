use anyhow::Result;
use design_matcher::adapters::BundledCatalog;
use design_matcher::{
    available_options, format_industry_key, recommend, score, Catalog, MatchEngine, Recommender,
    SelectionPath, UserPreferences, Wizard,
};

/// 完整流程：精靈收集四個答案，再從內建目錄產生推薦
#[tokio::test]
async fn test_wizard_to_shortlist_with_bundled_catalog() -> Result<()> {
    let engine = MatchEngine::load(&BundledCatalog, Recommender::default()).await?;

    let preferences = Wizard::new()
        .select("resto")
        .select("reservations")
        .select("chaleureux")
        .select("debutant")
        .finish()?;

    let recommendation = engine.run(&preferences)?;

    assert_eq!(recommendation.path, SelectionPath::StrongMatch);
    assert_eq!(recommendation.templates.len(), 3);
    assert_eq!(recommendation.templates[0].id(), "resto-bistrot");
    assert_eq!(recommendation.templates[0].score, 9);
    assert!(recommendation
        .templates
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));

    Ok(())
}

#[tokio::test]
async fn test_unknown_answers_fall_back_to_curated_defaults() -> Result<()> {
    let catalog = Catalog::load(&BundledCatalog).await?;
    let preferences = UserPreferences::new("astronautes", "lune", "fluo", "alien");

    let shortlist = Recommender::default().select(catalog.templates(), &preferences);

    assert_eq!(shortlist.path, SelectionPath::FallbackBlend);
    assert_eq!(shortlist.templates.len(), 3);
    assert!(shortlist.templates.iter().all(|t| t.score == 0));
    // two catalog-order leaders plus the first curated default not already shortlisted
    let ids: Vec<&str> = shortlist.templates.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["vitrine-essentiel", "artisan-atelier", "resto-bistrot"]);

    Ok(())
}

#[tokio::test]
async fn test_scores_stay_in_range_for_every_catalog_option() -> Result<()> {
    let catalog = Catalog::load(&BundledCatalog).await?;
    let options = available_options(catalog.templates());

    for industry in &options.industries {
        for goal in &options.goals {
            let preferences = UserPreferences::new(
                industry.as_str(),
                goal.as_str(),
                options.styles[0].as_str(),
                options.levels[0].as_str(),
            );
            for template in catalog.templates() {
                let scored = score(template, &preferences);
                assert!(scored.score <= 9);
                assert_eq!(
                    scored.match_details.industry_match,
                    template.industries.contains(industry)
                );
                assert_eq!(scored.match_details.goal_match, template.goals.contains(goal));
            }

            let shortlist = recommend(catalog.templates(), &preferences);
            assert_eq!(shortlist.len(), 3);
            let mut ids: Vec<&str> = shortlist.iter().map(|t| t.id()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 3, "duplicate in shortlist for {industry}/{goal}");
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_bundled_options_are_labelled() -> Result<()> {
    let catalog = Catalog::load(&BundledCatalog).await?;
    let options = available_options(catalog.templates());

    assert_eq!(options.industries[0], "artisan");
    assert_eq!(format_industry_key(&options.industries[0]), "Artisan");
    // every bundled industry key has a label
    for industry in &options.industries {
        assert_ne!(&format_industry_key(industry), industry);
    }

    Ok(())
}
