//! Building request URLs for the MediaWiki action API.

use std::collections::BTreeMap;

use url::Url;
use wikipage_settings::WikipediaSettings;

use crate::{Params, WikipediaError};

/// Build the URL for a request to the Wikipedia API.
///
/// The fixed parameters (`format`, `action`, `redirects`, and `origin`) are
/// always present. `params` are applied afterwards, so a caller parameter
/// with the same key as a fixed one replaces it. Any query string already on
/// the configured API URL is discarded. Parameters are encoded sorted by key.
///
/// # Errors
/// If the configured API URL can't be parsed.
pub fn build_url(settings: &WikipediaSettings, params: &Params) -> Result<Url, WikipediaError> {
    let mut url =
        Url::parse(&settings.api_url).map_err(|source| WikipediaError::Configuration {
            url: settings.api_url.clone(),
            source,
        })?;

    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    merged.insert("format", "json");
    merged.insert("action", "query");
    merged.insert("redirects", "1");
    merged.insert("origin", &settings.origin);
    for (key, value) in params {
        merged.insert(key, value);
    }

    url.query_pairs_mut().clear().extend_pairs(merged);
    Ok(url)
}

/// The parameters to look up the introduction, canonical URL, and
/// disambiguation status of the page titled `title`.
pub fn page_lookup_params(title: &str) -> Params {
    [
        ("prop", "info|pageprops|extracts"),
        ("inprop", "url"),
        ("ppprop", "disambiguation"),
        ("titles", title),
        ("explaintext", "1"),
        ("exintro", "1"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}
