//! Typed access into the untyped responses of the Wikipedia API.

use serde_json::{Map, Value};

use crate::{PageInfo, RawResult, WikipediaError};

/// Find the title a lookup was redirected to, if it should be followed.
///
/// Only a single redirect is followed. If the response lists several, none
/// of them are, and the response is used as is.
///
/// # Errors
/// If `query.redirects` is not a list, or its only entry has no string `to`.
pub fn redirect_target(result: &RawResult) -> Result<Option<&str>, WikipediaError> {
    let redirects = match result.get("query").and_then(|query| query.get("redirects")) {
        None | Some(Value::Null) => return Ok(None),
        Some(redirects) => redirects.as_array().ok_or(WikipediaError::FieldType {
            field: "redirects",
            expected: "a list",
        })?,
    };

    match redirects.as_slice() {
        [redirect] => get_str(redirect, "to").map(Some),
        [] => Ok(None),
        _ => {
            tracing::debug!(
                r#type = "wikipedia.redirect.ambiguous",
                redirect_count = redirects.len(),
                "Not following multiple redirects"
            );
            Ok(None)
        }
    }
}

/// Condense the first page in a response into a [`PageInfo`].
///
/// # Errors
/// [`WikipediaError::NoPageFound`] if the response has no pages, or if
/// Wikipedia marked the page as missing or invalid. A field error if the page
/// doesn't have the expected fields.
pub fn extract_page(result: &RawResult) -> Result<PageInfo, WikipediaError> {
    let pages = match result.get("query").and_then(|query| query.get("pages")) {
        None | Some(Value::Null) => return Err(WikipediaError::NoPageFound),
        Some(pages) => get_object(pages, "pages")?,
    };

    // Single title lookups have at most one page.
    let page = pages.values().next().ok_or(WikipediaError::NoPageFound)?;
    let page_fields = get_object(page, "page")?;
    if page_fields.contains_key("missing") || page_fields.contains_key("invalid") {
        return Err(WikipediaError::NoPageFound);
    }

    Ok(PageInfo {
        page_id: get_u64(page, "pageid")?,
        title: get_str(page, "title")?.to_string(),
        summary: get_str(page, "extract")?.to_string(),
        url: get_str(page, "canonicalurl")?.to_string(),
    })
}

/// Get `value` as a JSON object.
fn get_object<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Map<String, Value>, WikipediaError> {
    value.as_object().ok_or(WikipediaError::FieldType {
        field,
        expected: "an object",
    })
}

/// Get the string at `field` of the object `value`.
fn get_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, WikipediaError> {
    value
        .get(field)
        .ok_or(WikipediaError::MissingField { field })?
        .as_str()
        .ok_or(WikipediaError::FieldType {
            field,
            expected: "a string",
        })
}

/// Get the unsigned integer at `field` of the object `value`.
fn get_u64(value: &Value, field: &'static str) -> Result<u64, WikipediaError> {
    value
        .get(field)
        .ok_or(WikipediaError::MissingField { field })?
        .as_u64()
        .ok_or(WikipediaError::FieldType {
            field,
            expected: "an unsigned integer",
        })
}

#[cfg(test)]
mod tests {
    use super::{extract_page, redirect_target};
    use crate::{PageInfo, RawResult, WikipediaError};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn raw(value: Value) -> RawResult {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture must be an object, got {}", other),
        }
    }

    fn apple() -> Value {
        json!({
            "pageid": 18_978_754,
            "ns": 0,
            "title": "Apple",
            "canonicalurl": "https://en.wikipedia.org/wiki/Apple",
            "extract": "An apple is a round, edible fruit produced by an apple tree.",
        })
    }

    #[test]
    fn no_redirects_means_no_target() {
        let result = raw(json!({ "query": { "pages": { "18978754": apple() } } }));
        assert_eq!(redirect_target(&result).unwrap(), None);
    }

    #[test]
    fn empty_or_null_redirects_mean_no_target() {
        let empty = raw(json!({ "query": { "redirects": [] } }));
        let null = raw(json!({ "query": { "redirects": null } }));
        assert_eq!(redirect_target(&empty).unwrap(), None);
        assert_eq!(redirect_target(&null).unwrap(), None);
    }

    #[test]
    fn single_redirect_is_followed() {
        let result = raw(json!({
            "query": { "redirects": [{ "from": "USA", "to": "United States" }] }
        }));
        assert_eq!(redirect_target(&result).unwrap(), Some("United States"));
    }

    #[test]
    fn multiple_redirects_are_not_followed() {
        let result = raw(json!({
            "query": {
                "redirects": [
                    { "from": "USA", "to": "United States" },
                    { "from": "US", "to": "United States" },
                ]
            }
        }));
        assert_eq!(redirect_target(&result).unwrap(), None);
    }

    #[test]
    fn malformed_redirects_are_errors() {
        let not_a_list = raw(json!({ "query": { "redirects": "USA" } }));
        assert!(matches!(
            redirect_target(&not_a_list),
            Err(WikipediaError::FieldType {
                field: "redirects",
                ..
            })
        ));

        let no_target = raw(json!({ "query": { "redirects": [{ "from": "USA" }] } }));
        assert!(matches!(
            redirect_target(&no_target),
            Err(WikipediaError::MissingField { field: "to" })
        ));
    }

    #[test]
    fn page_fields_map_directly() {
        let result = raw(json!({ "query": { "pages": { "18978754": apple() } } }));
        assert_eq!(
            extract_page(&result).unwrap(),
            PageInfo {
                page_id: 18_978_754,
                title: "Apple".to_string(),
                summary: "An apple is a round, edible fruit produced by an apple tree."
                    .to_string(),
                url: "https://en.wikipedia.org/wiki/Apple".to_string(),
            }
        );
    }

    #[test]
    fn empty_results_have_no_page() {
        for value in [
            json!({}),
            json!({ "query": {} }),
            json!({ "query": { "pages": {} } }),
            json!({ "batchcomplete": "" }),
        ] {
            let result = raw(value);
            assert!(matches!(
                extract_page(&result),
                Err(WikipediaError::NoPageFound)
            ));
        }
    }

    #[test]
    fn missing_page_has_no_page() {
        let result = raw(json!({
            "query": {
                "pages": {
                    "-1": { "ns": 0, "title": "Xyzzyxyzzy", "missing": "" }
                }
            }
        }));
        let error = extract_page(&result).unwrap_err();
        assert_eq!(error.to_string(), "no page found");
    }

    #[test]
    fn invalid_title_has_no_page() {
        let result = raw(json!({
            "query": {
                "pages": {
                    "-1": { "title": "<>", "invalidreason": "bad title", "invalid": "" }
                }
            }
        }));
        assert!(matches!(
            extract_page(&result),
            Err(WikipediaError::NoPageFound)
        ));
    }

    #[test]
    fn absent_fields_are_errors() {
        let mut page = apple();
        page.as_object_mut().unwrap().remove("canonicalurl");
        let result = raw(json!({ "query": { "pages": { "18978754": page } } }));
        assert!(matches!(
            extract_page(&result),
            Err(WikipediaError::MissingField {
                field: "canonicalurl"
            })
        ));
    }

    #[test]
    fn mistyped_fields_are_errors() {
        let mut page = apple();
        page["pageid"] = json!("18978754");
        let result = raw(json!({ "query": { "pages": { "18978754": page } } }));
        assert!(matches!(
            extract_page(&result),
            Err(WikipediaError::FieldType {
                field: "pageid",
                ..
            })
        ));

        let result = raw(json!({ "query": { "pages": ["Apple"] } }));
        assert!(matches!(
            extract_page(&result),
            Err(WikipediaError::FieldType { field: "pages", .. })
        ));
    }
}
