use anyhow::Result;
use design_matcher::adapters::HttpCatalogSource;
use design_matcher::{Catalog, MatchEngine, MatchError, Recommender, UserPreferences};
use httpmock::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn test_loads_catalog_over_http() -> Result<()> {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/catalog.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": "artisan-atelier",
                    "title": "Atelier",
                    "industries": ["artisan"],
                    "goals": ["leads"],
                    "styles": ["chaleureux"],
                    "levels": ["debutant"]
                },
                {
                    "id": "boutique-chic",
                    "title": "Chic",
                    "industries": ["boutique"],
                    "goals": ["ventes"],
                    "styles": ["premium"],
                    "levels": ["avance"]
                }
            ]));
    });

    let source = HttpCatalogSource::new(server.url("/catalog.json"), Duration::from_secs(5))?;
    let engine = MatchEngine::load(&source, Recommender::default()).await?;
    catalog_mock.assert();

    let recommendation =
        engine.run(&UserPreferences::new("artisan", "leads", "moderne", "debutant"))?;
    let ids: Vec<&str> = recommendation.templates.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["artisan-atelier", "boutique-chic"]);

    Ok(())
}

#[tokio::test]
async fn test_http_error_status_is_reported() -> Result<()> {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/catalog.json");
        then.status(503);
    });

    let source = HttpCatalogSource::new(server.url("/catalog.json"), Duration::from_secs(5))?;
    let err = Catalog::load(&source).await.unwrap_err();
    catalog_mock.assert();

    match err {
        MatchError::HttpStatusError { status, .. } => assert_eq!(status, 503),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_remote_catalog_is_rejected_on_load() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/catalog.json");
        then.status(200).json_body(serde_json::json!([
            {"id": "a", "title": "A", "demoUrl": "nope"}
        ]));
    });

    let source = HttpCatalogSource::new(server.url("/catalog.json"), Duration::from_secs(5))?;
    let err = Catalog::load(&source).await.unwrap_err();
    assert!(matches!(err, MatchError::CatalogValidationError { .. }));

    Ok(())
}
