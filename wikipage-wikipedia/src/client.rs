//! An HTTP client for the Wikipedia API that performs page lookups.

use serde_json::Value;
use url::Url;
use wikipage_settings::WikipediaSettings;

use crate::{
    build_url, extract_page, page_lookup_params, redirect_target, PageInfo, Params, RawResult,
    WikipediaError,
};

/// Looks up pages on Wikipedia.
///
/// Cheap to share between requests: it holds a pooled [`reqwest::Client`] and
/// read only settings.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    /// The HTTP client used for every request to Wikipedia.
    client: reqwest::Client,
    /// Where and how to reach the Wikipedia API.
    settings: WikipediaSettings,
}

impl WikipediaClient {
    /// Create a client from settings.
    ///
    /// # Errors
    /// If the underlying HTTP client can't be built, for example because the
    /// configured user agent is not a valid header value.
    pub fn new(settings: WikipediaSettings) -> Result<Self, WikipediaError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(WikipediaError::Client)?;
        Ok(Self { client, settings })
    }

    /// Look up the page titled `title`, following a single redirect if
    /// Wikipedia reports one.
    ///
    /// # Errors
    /// If any request fails, or the final response doesn't describe a page.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_page(&self, title: &str) -> Result<PageInfo, WikipediaError> {
        let result = self.query(&page_lookup_params(title)).await?;
        let result = self.resolve_redirect(result).await?;
        extract_page(&result)
    }

    /// Send a query with `params` to the Wikipedia API.
    ///
    /// # Errors
    /// If the configured API URL is invalid, or the request fails.
    pub async fn query(&self, params: &Params) -> Result<RawResult, WikipediaError> {
        let url = build_url(&self.settings, params)?;
        self.fetch(url).await
    }

    /// If `result` reports a single redirect, look up the target instead.
    /// Otherwise `result` is returned unchanged.
    ///
    /// # Errors
    /// If the redirect is malformed, or the second lookup fails.
    pub async fn resolve_redirect(&self, result: RawResult) -> Result<RawResult, WikipediaError> {
        let target = redirect_target(&result)?.map(ToString::to_string);
        match target {
            Some(target) => {
                tracing::debug!(
                    r#type = "wikipedia.redirect",
                    %target,
                    "Following redirect"
                );
                self.query(&page_lookup_params(&target)).await
            }
            None => Ok(result),
        }
    }

    /// Perform a GET request to `url` and decode the body.
    ///
    /// Bodies that aren't a JSON object decode to an empty object instead of
    /// failing, and so are later reported as having no page.
    ///
    /// # Errors
    /// If the server can't be reached, or the body can't be read.
    pub async fn fetch(&self, url: Url) -> Result<RawResult, WikipediaError> {
        tracing::debug!(r#type = "wikipedia.fetch", %url, "Requesting from Wikipedia");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(WikipediaError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                r#type = "wikipedia.fetch.status",
                status = status.as_u16(),
                "Wikipedia responded with an error status"
            );
        }

        let body = response.bytes().await.map_err(WikipediaError::Transport)?;
        Ok(decode_lenient(&body))
    }
}

/// Decode `body` as a JSON object, using an empty object if it is anything
/// else.
fn decode_lenient(body: &[u8]) -> RawResult {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(
                r#type = "wikipedia.fetch.decode",
                "Wikipedia response was JSON, but not an object: {}",
                other
            );
            RawResult::new()
        }
        Err(error) => {
            tracing::warn!(
                r#type = "wikipedia.fetch.decode",
                %error,
                "Wikipedia response was not valid JSON"
            );
            RawResult::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_lenient, WikipediaClient};
    use crate::{PageInfo, WikipediaError};
    use httpmock::{Method::GET, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wikipage_settings::WikipediaSettings;

    fn client_for(server: &MockServer) -> WikipediaClient {
        WikipediaClient::new(WikipediaSettings {
            api_url: server.url("/w/api.php"),
            ..WikipediaSettings::default()
        })
        .expect("client should build")
    }

    fn united_states() -> serde_json::Value {
        json!({
            "batchcomplete": "",
            "query": {
                "pages": {
                    "3434750": {
                        "pageid": 3_434_750,
                        "ns": 0,
                        "title": "United States",
                        "canonicalurl": "https://en.wikipedia.org/wiki/United_States",
                        "extract": "The United States of America (USA) is a country primarily located in North America.",
                    }
                }
            }
        })
    }

    #[test]
    fn decode_is_lenient() {
        assert!(decode_lenient(b"<html>").is_empty());
        assert!(decode_lenient(b"[1, 2]").is_empty());
        assert!(decode_lenient(b"").is_empty());
        assert_eq!(decode_lenient(br#"{"a": 1}"#).len(), 1);
    }

    #[tokio::test]
    async fn page_without_redirect_takes_one_request() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/w/api.php")
                    .query_param("format", "json")
                    .query_param("action", "query")
                    .query_param("redirects", "1")
                    .query_param("origin", "*")
                    .query_param("prop", "info|pageprops|extracts")
                    .query_param("inprop", "url")
                    .query_param("ppprop", "disambiguation")
                    .query_param("titles", "United States")
                    .query_param("explaintext", "1")
                    .query_param("exintro", "1")
                    .header("user-agent", wikipage_settings::DEFAULT_USER_AGENT);
                then.status(200).json_body(united_states());
            })
            .await;

        let page = client_for(&server)
            .get_page("United States")
            .await
            .expect("lookup should succeed");

        assert_eq!(
            page,
            PageInfo {
                page_id: 3_434_750,
                title: "United States".to_string(),
                summary: "The United States of America (USA) is a country primarily located in North America.".to_string(),
                url: "https://en.wikipedia.org/wiki/United_States".to_string(),
            }
        );
        lookup.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn single_redirect_takes_two_requests() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(GET).path("/w/api.php").query_param("titles", "USA");
                then.status(200).json_body(json!({
                    "batchcomplete": "",
                    "query": {
                        "redirects": [{ "from": "USA", "to": "United States" }],
                        "pages": {
                            "3434750": { "pageid": 3_434_750, "ns": 0, "title": "United States" }
                        }
                    }
                }));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/w/api.php")
                    .query_param("titles", "United States");
                then.status(200).json_body(united_states());
            })
            .await;

        let page = client_for(&server)
            .get_page("USA")
            .await
            .expect("lookup should succeed");

        assert_eq!(page.title, "United States");
        first.assert_hits_async(1).await;
        second.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn failed_redirect_lookup_is_reported() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(GET).path("/w/api.php").query_param("titles", "USA");
                then.status(200).json_body(json!({
                    "query": {
                        "redirects": [{ "from": "USA", "to": "United States" }],
                        "pages": {
                            "3434750": { "pageid": 3_434_750, "ns": 0, "title": "United States" }
                        }
                    }
                }));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/w/api.php")
                    .query_param("titles", "United States");
                then.status(200).json_body(json!({
                    "query": {
                        "pages": {
                            "-1": { "ns": 0, "title": "United States", "missing": "" }
                        }
                    }
                }));
            })
            .await;

        let error = client_for(&server).get_page("USA").await.unwrap_err();

        assert!(matches!(error, WikipediaError::NoPageFound), "{:?}", error);
        first.assert_hits_async(1).await;
        second.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn multiple_redirects_are_used_as_is() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET).path("/w/api.php");
                then.status(200).json_body(json!({
                    "query": {
                        "redirects": [
                            { "from": "USA", "to": "United States" },
                            { "from": "U.S.A.", "to": "United States" }
                        ],
                        "pages": {
                            "3434750": {
                                "pageid": 3_434_750,
                                "title": "United States",
                                "canonicalurl": "https://en.wikipedia.org/wiki/United_States",
                                "extract": "",
                            }
                        }
                    }
                }));
            })
            .await;

        let page = client_for(&server)
            .get_page("USA")
            .await
            .expect("lookup should succeed");

        assert_eq!(page.page_id, 3_434_750);
        lookup.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn malformed_json_has_no_page() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET).path("/w/api.php");
                then.status(200).body("{not json");
            })
            .await;

        let error = client_for(&server).get_page("Apple").await.unwrap_err();

        assert!(matches!(error, WikipediaError::NoPageFound));
        lookup.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn error_status_is_decoded_leniently() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/w/api.php");
                then.status(503).body("Service Unavailable");
            })
            .await;

        let error = client_for(&server).get_page("Apple").await.unwrap_err();

        assert_eq!(error.to_string(), "no page found");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Bind a port, then release it so nothing is listening there.
        let address = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("could not reserve a port");
        let client = WikipediaClient::new(WikipediaSettings {
            api_url: format!("http://{}/w/api.php", address),
            ..WikipediaSettings::default()
        })
        .unwrap();

        let error = client.get_page("Apple").await.unwrap_err();

        assert!(matches!(error, WikipediaError::Transport(_)));
    }

    #[tokio::test]
    async fn invalid_api_url_fails_before_any_request() {
        let client = WikipediaClient::new(WikipediaSettings {
            api_url: "::not a url::".to_string(),
            ..WikipediaSettings::default()
        })
        .unwrap();

        let error = client.get_page("Apple").await.unwrap_err();

        assert!(matches!(error, WikipediaError::Configuration { .. }));
    }

    #[test]
    fn invalid_user_agent_fails_setup() {
        let result = WikipediaClient::new(WikipediaSettings {
            user_agent: "line\nbreak".to_string(),
            ..WikipediaSettings::default()
        });

        assert!(matches!(result, Err(WikipediaError::Client(_))));
    }
}
