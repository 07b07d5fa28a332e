//! Tests Wikipage's debug pages.
#![cfg(test)]

use crate::{wikipage_test, TestingTools};
use anyhow::Result;
use reqwest::StatusCode;

#[actix_rt::test]
async fn cant_use_debug_settings_route_when_debug_is_false() -> Result<()> {
    wikipage_test(
        |settings| settings.debug = false,
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/debug/settings").send().await?;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(response.content_length(), Some(0));
            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn can_use_debug_settings_route_when_debug_is_true() -> Result<()> {
    wikipage_test(
        |settings| settings.debug = true,
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let response = test_client.get("/debug/settings").send().await?;

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers().get("content-type").unwrap(),
                &"application/json"
            );
            let body: serde_json::Value = response.json().await?;
            assert_eq!(body["debug"], true);
            assert_eq!(
                body["wikipedia"]["api_url"],
                wikipedia_mock.url("/w/api.php")
            );
            Ok(())
        },
    )
    .await
}
