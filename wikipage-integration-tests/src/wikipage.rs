//! Tests Wikipage's ability to look up and summarize pages.
#![cfg(test)]

use crate::{
    missing_response, mock_lookup, page_response, redirect_response, wikipage_test,
    TestingTools, WIKIPEDIA_API_PATH,
};
use anyhow::Result;
use httpmock::Method::GET;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;

#[actix_rt::test]
async fn lookup_without_redirect_works() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let lookup = mock_lookup(
                &wikipedia_mock,
                "Apple",
                page_response(18_978_754, "Apple", "An apple is a round, edible fruit."),
            )
            .await;

            let response = test_client.get("/wikipage?q=Apple").send().await?;

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers().get("content-type").unwrap(),
                &"application/json"
            );
            let body: serde_json::Value = response.json().await?;
            assert_eq!(
                body,
                json!({
                    "pageId": 18_978_754,
                    "title": "Apple",
                    "summary": "An apple is a round, edible fruit.",
                    "url": "https://en.wikipedia.org/wiki/Apple",
                })
            );
            lookup.assert_hits_async(1).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn lookup_follows_a_single_redirect() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let redirect = mock_lookup(
                &wikipedia_mock,
                "USA",
                redirect_response("USA", "United States", 3_434_750),
            )
            .await;
            let target = mock_lookup(
                &wikipedia_mock,
                "United States",
                page_response(
                    3_434_750,
                    "United States",
                    "The United States of America (USA) is a country primarily located in North America.",
                ),
            )
            .await;

            let response = test_client
                .get("/wikipage")
                .query(&[("q", "USA")])
                .send()
                .await?;

            assert_eq!(response.status(), StatusCode::OK);
            let body: serde_json::Value = response.json().await?;
            assert_eq!(body["title"], "United States");
            assert_eq!(body["pageId"], 3_434_750);
            assert_eq!(
                body["url"],
                "https://en.wikipedia.org/wiki/United_States"
            );
            redirect.assert_hits_async(1).await;
            target.assert_hits_async(1).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn lookup_sends_the_full_set_of_parameters() -> Result<()> {
    wikipage_test(
        |settings| {
            settings.wikipedia.origin = "https://example.com".to_string();
            settings.wikipedia.user_agent = "wikipage-tests/1.0".to_string();
        },
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let lookup = wikipedia_mock
                .mock_async(|when, then| {
                    when.method(GET)
                        .path(WIKIPEDIA_API_PATH)
                        .header("user-agent", "wikipage-tests/1.0")
                        .query_param("format", "json")
                        .query_param("action", "query")
                        .query_param("redirects", "1")
                        .query_param("origin", "https://example.com")
                        .query_param("prop", "info|pageprops|extracts")
                        .query_param("inprop", "url")
                        .query_param("ppprop", "disambiguation")
                        .query_param("titles", "Rust (programming language)")
                        .query_param("explaintext", "1")
                        .query_param("exintro", "1");
                    then.status(200).json_body(page_response(
                        29_414_838,
                        "Rust (programming language)",
                        "Rust is a general-purpose programming language.",
                    ));
                })
                .await;

            let response = test_client
                .get("/wikipage")
                .query(&[("q", "Rust (programming language)")])
                .send()
                .await?;

            assert_eq!(response.status(), StatusCode::OK);
            lookup.assert_hits_async(1).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn missing_query_is_a_client_error() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let any_lookup = wikipedia_mock
                .mock_async(|when, then| {
                    when.any_request();
                    then.status(500);
                })
                .await;

            for path in ["/wikipage", "/wikipage?q=", "/wikipage?query=USA"] {
                let response = test_client.get(path).send().await?;

                assert_eq!(response.status(), StatusCode::BAD_REQUEST);
                assert_eq!(response.text().await?, "q param is missing");
            }
            any_lookup.assert_hits_async(0).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn repeated_query_uses_the_first_term() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let first = mock_lookup(
                &wikipedia_mock,
                "Apple",
                page_response(18_978_754, "Apple", "An apple is a round, edible fruit."),
            )
            .await;
            let second = mock_lookup(
                &wikipedia_mock,
                "Banana",
                page_response(38_940, "Banana", "A banana is an elongated, edible fruit."),
            )
            .await;

            let response = test_client
                .get("/wikipage?q=Apple&q=Banana")
                .send()
                .await?;

            assert_eq!(response.status(), StatusCode::OK);
            let body: serde_json::Value = response.json().await?;
            assert_eq!(body["title"], "Apple");
            first.assert_hits_async(1).await;
            second.assert_hits_async(0).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn unknown_title_is_a_server_error() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let lookup = mock_lookup(
                &wikipedia_mock,
                "Xyzzyxyzzy",
                missing_response("Xyzzyxyzzy"),
            )
            .await;

            let response = test_client.get("/wikipage?q=Xyzzyxyzzy").send().await?;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(response.text().await?.contains("no page found"));
            lookup.assert_hits_async(1).await;

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn malformed_json_is_reported_as_no_page() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            wikipedia_mock
                .mock_async(|when, then| {
                    when.method(GET).path(WIKIPEDIA_API_PATH);
                    then.status(200).body("<html>Wikimedia Error</html>");
                })
                .await;

            let response = test_client.get("/wikipage?q=Apple").send().await?;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.text().await?, "no page found");

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn unexpected_page_shape_is_a_server_error() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            mock_lookup(
                &wikipedia_mock,
                "Apple",
                json!({
                    "query": {
                        "pages": {
                            "18978754": { "pageid": "18978754", "title": "Apple" }
                        }
                    }
                }),
            )
            .await;

            let response = test_client.get("/wikipage?q=Apple").send().await?;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(response.text().await?.contains("pageid"));

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn unreachable_wikipedia_is_a_server_error() -> Result<()> {
    // Bind a port, then release it so nothing is listening there.
    let address = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?;

    wikipage_test(
        |settings| settings.wikipedia.api_url = format!("http://{}/w/api.php", address),
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/wikipage?q=Apple").send().await?;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(response
                .text()
                .await?
                .starts_with("request to Wikipedia failed"));

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn malformed_api_url_is_a_server_error() -> Result<()> {
    wikipage_test(
        |settings| settings.wikipedia.api_url = "not a url".to_string(),
        |TestingTools { test_client, .. }| async move {
            let response = test_client.get("/wikipage?q=Apple").send().await?;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(response
                .text()
                .await?
                .starts_with("invalid Wikipedia API URL"));

            Ok(())
        },
    )
    .await
}

#[actix_rt::test]
async fn repeated_lookups_are_identical_and_not_cached() -> Result<()> {
    wikipage_test(
        |_| (),
        |TestingTools {
             test_client,
             wikipedia_mock,
             ..
         }| async move {
            let lookup = mock_lookup(
                &wikipedia_mock,
                "Apple",
                page_response(18_978_754, "Apple", "An apple is a round, edible fruit."),
            )
            .await;

            let first: serde_json::Value = test_client
                .get("/wikipage?q=Apple")
                .send()
                .await?
                .json()
                .await?;
            let second: serde_json::Value = test_client
                .get("/wikipage?q=Apple")
                .send()
                .await?
                .json()
                .await?;

            assert_eq!(first, second);
            lookup.assert_hits_async(2).await;

            Ok(())
        },
    )
    .await
}
