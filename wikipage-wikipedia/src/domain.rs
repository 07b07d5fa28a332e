//! Data types used to define the data this crate works with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Per-call query parameters. Sorted by key, which is also the order they
/// are encoded in.
pub type Params = BTreeMap<String, String>;

/// A decoded response from the Wikipedia API. The shape is whatever the API
/// sent; nothing about it is checked until a page is extracted from it.
pub type RawResult = Map<String, Value>;

/// A condensed summary of a Wikipedia page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// Wikipedia's numeric ID for the page.
    #[serde(rename = "pageId")]
    pub page_id: u64,

    /// The human readable title of the page. For a redirected lookup this is
    /// the title of the target page, not the title that was asked for.
    pub title: String,

    /// The plain text introduction of the page.
    pub summary: String,

    /// The canonical link to the page.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::PageInfo;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn page_info_uses_public_field_names() {
        let page = PageInfo {
            page_id: 18_630_637,
            title: "Apple".to_string(),
            summary: "An apple is a round, edible fruit.".to_string(),
            url: "https://en.wikipedia.org/wiki/Apple".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "pageId": 18_630_637,
                "title": "Apple",
                "summary": "An apple is a round, edible fruit.",
                "url": "https://en.wikipedia.org/wiki/Apple",
            })
        );
    }
}
