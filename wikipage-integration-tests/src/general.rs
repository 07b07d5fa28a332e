//! Tests for behavior that isn't specific to one endpoint.
#![cfg(test)]

use crate::{wikipage_test, TestingTools};
use anyhow::Result;
use reqwest::{header::HeaderValue, StatusCode};

#[actix_rt::test]
async fn root_of_services_provides_public_docs() -> Result<()> {
    wikipage_test(
        |settings| settings.public_documentation = Some("https://example.com/".parse().unwrap()),
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/").send().await?;

            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(
                response.headers().get("location"),
                Some(&HeaderValue::from_static("https://example.com/"))
            );

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn root_of_services_has_a_fallback_message() -> Result<()> {
    wikipage_test(
        |settings| settings.public_documentation = None,
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/").send().await?;

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.text().await?,
                "Wikipage looks up a Wikipedia page by title and responds with a short summary of it."
            );

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn cross_origin_requests_are_allowed() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools { test_client, .. }| async move {
            let response = test_client
                .get("/__lbheartbeat__")
                .header("origin", "https://example.com")
                .send()
                .await?;

            assert_eq!(response.status(), StatusCode::OK);
            assert!(response
                .headers()
                .contains_key("access-control-allow-origin"));

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn unknown_paths_are_not_found() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/api/v1/suggest?q=apple").send().await?;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            Ok(())
        },
    )
    .await
}
