//! Web handlers for looking up Wikipedia pages.

use actix_web::{
    get,
    web::{self, Data, ServiceConfig},
    HttpResponse,
};
use wikipage_wikipedia::WikipediaClient;

use crate::errors::HandlerError;

/// Configure a route to use the page lookup service.
pub fn configure(config: &mut ServiceConfig) {
    config.service(wikipage);
}

/// Query parameters, in the order they appear in the request. Repeated
/// parameters are allowed, and only the first `q` is used.
type QueryPairs = Vec<(String, String)>;

/// The term to look up: the value of the first `q` parameter, unless it is
/// empty.
fn lookup_term(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Look up the Wikipedia page for the queried term and respond with a summary
/// of it.
#[get("/wikipage")]
#[tracing::instrument(skip(client, query))]
async fn wikipage(
    query: web::Query<QueryPairs>,
    client: Data<WikipediaClient>,
) -> Result<HttpResponse, HandlerError> {
    let term = lookup_term(query.into_inner()).ok_or(HandlerError::MissingQuery)?;

    tracing::info!(r#type = "web.wikipage.request", %term, "handling page lookup");

    let page = client.get_page(&term).await.map_err(|error| {
        tracing::error!(%error, r#type = "web.wikipage.error", "Error looking up page");
        HandlerError::from(error)
    })?;

    tracing::debug!(
        r#type = "web.wikipage.found",
        page_id = page.page_id,
        title = %page.title,
        "Found page"
    );

    Ok(HttpResponse::Ok().json(page))
}
