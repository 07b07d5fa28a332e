//! Canned Wikipedia API responses for the mock server.

use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{json, Value};

use crate::utils::test_tools::WIKIPEDIA_API_PATH;

/// The response Wikipedia gives for a lookup that found a page.
pub fn page_response(page_id: u64, title: &str, summary: &str) -> Value {
    let url = format!(
        "https://en.wikipedia.org/wiki/{}",
        title.replace(' ', "_")
    );
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                page_id.to_string(): {
                    "pageid": page_id,
                    "ns": 0,
                    "title": title,
                    "contentmodel": "wikitext",
                    "pagelanguage": "en",
                    "fullurl": url,
                    "canonicalurl": url,
                    "extract": summary,
                }
            }
        }
    })
}

/// The response Wikipedia gives for a title that has no page.
pub fn missing_response(title: &str) -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "-1": { "ns": 0, "title": title, "missing": "" }
            }
        }
    })
}

/// The response Wikipedia gives for a title that redirects to `to`. The
/// page it includes is a stub, without the fields a summary needs.
pub fn redirect_response(from: &str, to: &str, page_id: u64) -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "redirects": [{ "from": from, "to": to }],
            "pages": {
                page_id.to_string(): { "pageid": page_id, "ns": 0, "title": to }
            }
        }
    })
}

/// Respond to lookups of `title` with `body`.
pub async fn mock_lookup<'a>(server: &'a MockServer, title: &str, body: Value) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(WIKIPEDIA_API_PATH)
                .query_param("titles", title);
            then.status(200)
                .header("content-type", "application/json; charset=utf-8")
                .json_body(body);
        })
        .await
}
