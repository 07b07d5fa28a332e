//! Errors that can happen while looking up a page.

use thiserror::Error;

/// An error from a Wikipedia lookup.
///
/// Every variant is terminal for the lookup that produced it. Nothing is
/// retried.
#[derive(Debug, Error)]
pub enum WikipediaError {
    /// The HTTP client could not be constructed.
    #[error("unable to create the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured API URL is not a valid URL.
    #[error("invalid Wikipedia API URL {url:?}: {source}")]
    Configuration {
        /// The configured value.
        url: String,
        /// Why it could not be parsed.
        source: url::ParseError,
    },

    /// Wikipedia could not be reached, or its response could not be read.
    #[error("request to Wikipedia failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response did not contain a page for the requested title.
    #[error("no page found")]
    NoPageFound,

    /// A field the lookup depends on was absent from the response.
    #[error("field `{field}` is missing from the Wikipedia response")]
    MissingField {
        /// The JSON key that was expected.
        field: &'static str,
    },

    /// A field the lookup depends on had an unexpected JSON type.
    #[error("field `{field}` in the Wikipedia response is not {expected}")]
    FieldType {
        /// The JSON key that was inspected.
        field: &'static str,
        /// A description of the type that was expected, like "a string".
        expected: &'static str,
    },
}
