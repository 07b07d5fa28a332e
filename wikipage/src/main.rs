// Only overview documentation that is not relevant to one of the more specific
// crates should go here.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! A web API that looks up Wikipedia pages and summarizes them.
//!
//! Wikipage is split into several subcrates that work in collaboration.
//!
//! - [wikipage-integration-tests](../wikipage_integration_tests/index.html)
//! - [wikipage-settings](../wikipage_settings/index.html)
//! - [wikipage-web](../wikipage_web/index.html)
//! - [wikipage-wikipedia](../wikipage_wikipedia/index.html)

mod docs;

use anyhow::{Context, Result};
use std::net::TcpListener;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};
use wikipage_settings::{LogFormat, Settings};

/// Primary entry point
#[actix_rt::main]
async fn main() -> Result<()> {
    let settings = Settings::load().context("Loading settings")?;
    init_logging(&settings)?;
    let listener = TcpListener::bind(settings.http.listen).context("Binding port")?;
    tracing::info!(
        r#type = "wikipage.start",
        address = %settings.http.listen,
        env = %settings.env,
        "Starting Wikipage"
    );

    wikipage_web::run(listener, settings)
        .context("Starting wikipage-web server")?
        .await
        .context("Running wikipage-web server")?;

    Ok(())
}

/// Set up logging for Wikipage, based on settings and the `RUST_LOG` environment variable.
fn init_logging(settings: &Settings) -> Result<()> {
    LogTracer::init()?;
    let env_filter: EnvFilter = (&settings.logging.levels).into();
    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.logging.format {
        LogFormat::Pretty => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().pretty()))?
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))?
        }
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().compact()))?
        }
    };

    Ok(())
}
