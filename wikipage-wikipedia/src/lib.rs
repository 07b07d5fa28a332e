//! Looks up a single Wikipedia page through the MediaWiki action API and
//! condenses it into a [`PageInfo`].
//!
//! A lookup is at most two sequential requests: the initial query, and a
//! second one if Wikipedia reports that the title is a redirect.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

mod client;
mod domain;
mod error;
mod extract;
mod query;

pub use client::WikipediaClient;
pub use domain::{PageInfo, Params, RawResult};
pub use error::WikipediaError;
pub use extract::{extract_page, redirect_target};
pub use query::{build_url, page_lookup_params};
