#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! # Wikipage Settings
//!
//! Configuration is specified in several ways, with later methods overriding earlier ones.
//!
//! 1. A base configuration checked into the repository, in `config/base.yaml`.
//!    This provides the default values for most settings.
//! 2. Per-environment configuration files in the `config` directory. The
//!    environment is selected using the environment variable `WIKIPAGE_ENV`.
//!    The settings for that environment are then loaded from
//!    `config/${env}.yaml`, if it exists. The default environment is
//!    "development". A "production" environment is also provided.
//! 3. A local configuration file not checked into the repository, at
//!    `config/local.yaml`. This file is in `.gitignore` and is safe to use for
//!    local configuration and secrets if desired.
//! 4. Environment variables that begin with `WIKIPAGE_` and have a separator
//!    for `__`. For example, `Settings::http::listen` can be controlled from the
//!    environment variable `WIKIPAGE_HTTP__LISTEN`.
//!
//! Tests should use `Settings::load_for_tests` which only reads from
//! `config/base.yaml`, `config/test.yaml`, and `config/local_test.yaml` (if it
//! exists). It does not read from environment variables.
//!
//! Configuration files are canonically YAML files. However, any format supported
//! by the [config] crate can be used, including JSON and TOML. To choose another
//! format, simply use a different extension for your file, like
//! `config/local.toml`.

mod logging;

pub use logging::{DirectiveWrapper, LogFormat, LoggingSettings};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use std::{net::SocketAddr, time::Duration};
use url::Url;

/// The MediaWiki API endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://en.wikipedia.org/w/api.php";

/// The `origin` query parameter used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "*";

/// The `User-Agent` sent to Wikipedia when nothing else is configured.
pub const DEFAULT_USER_AGENT: &str = "Old'aVista Search v1.0 (www.oldavista.com)";

/// Top level settings object for Wikipage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[doc(inline)]
pub struct Settings {
    /// The environment Wikipage is running in. Should only be set with the
    /// `WIKIPAGE_ENV` environment variable.
    pub env: String,

    /// Enable additional features to debug the application. This should not be
    /// set to true in production environments.
    pub debug: bool,

    /// URL to redirect to from the root of the service. If unset, the root
    /// responds with a short plain text description instead.
    pub public_documentation: Option<Url>,

    /// Settings for the HTTP server.
    pub http: HttpSettings,

    /// Settings for talking to the Wikipedia API.
    pub wikipedia: WikipediaSettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Settings for the HTTP server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpSettings {
    /// The host and port to listen on, such as "127.0.0.1:8080" or "0.0.0.0:80".
    pub listen: SocketAddr,

    /// The number of workers to use. Optional. If no value is provided, the
    /// number of logical cores will be used.
    pub workers: Option<usize>,
}

/// Connection level options for the Wikipedia API.
///
/// These are read once at startup and shared, unchanged, by every lookup.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WikipediaSettings {
    /// The MediaWiki action API endpoint, such as
    /// `https://en.wikipedia.org/w/api.php`.
    ///
    /// Kept as a string so that a malformed value is reported when a lookup
    /// is built, not when settings are loaded.
    pub api_url: String,

    /// Value of the `origin` query parameter added to every request.
    pub origin: String,

    /// The `User-Agent` header sent with every request.
    pub user_agent: String,

    /// How long to wait for Wikipedia before giving up on a request. If
    /// unset, requests wait for the network stack to resolve or fail.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(rename = "request_timeout_sec")]
    pub request_timeout: Option<Duration>,
}

impl Default for WikipediaSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
        }
    }
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// # Errors
    /// If any of the configured values are invalid, or if any of the required
    /// configuration files are missing.
    pub fn load() -> Result<Self, ConfigError> {
        let wikipage_env =
            std::env::var("WIKIPAGE_ENV").unwrap_or_else(|_| "development".to_string());

        let s = Config::builder()
            // Start off with the base config.
            .add_source(File::with_name("./config/base"))
            .set_override("env", wikipage_env.as_str())?
            // Merge in an environment specific config.
            .add_source(File::with_name(&format!("config/{}", wikipage_env)).required(false))
            // Add a local configuration file that is `.gitignore`ed.
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables that start with "WIKIPAGE_" and have
            // "__" to separate levels. For example, `WIKIPAGE_HTTP__LISTEN`
            // maps to `Settings::http::listen`.
            .add_source(
                Environment::with_prefix("WIKIPAGE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Load settings from configuration files for tests.
    ///
    /// Paths are relative to a crate directory inside the workspace, which is
    /// where `cargo test` runs tests from.
    ///
    /// # Panics
    /// If the test configuration files are missing or invalid.
    pub fn load_for_tests() -> Self {
        Config::builder()
            // Start off with the base config.
            .add_source(File::with_name("../config/base"))
            // Merge in test specific config.
            .set_override("env", "test")
            .expect("Could not set env for tests")
            .add_source(File::with_name("../config/test"))
            // Add a local configuration file that is `.gitignore`ed.
            .add_source(File::with_name("../config/local_test").required(false))
            .build()
            .expect("Could not load settings for tests")
            .try_deserialize()
            .expect("Could not convert settings")
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, WikipediaSettings, DEFAULT_API_URL, DEFAULT_ORIGIN};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_settings_load() {
        let settings = Settings::load_for_tests();
        assert_eq!(settings.env, "test");
        assert_eq!(settings.http.listen.port(), 0);
        assert_eq!(settings.wikipedia.origin, DEFAULT_ORIGIN);
        assert_eq!(
            settings.wikipedia.request_timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn wikipedia_defaults_match_base_config() {
        // The test config points the API somewhere harmless, but leaves the
        // rest of the base values in place.
        let settings = Settings::load_for_tests();
        let defaults = WikipediaSettings::default();
        assert_eq!(settings.wikipedia.origin, defaults.origin);
        assert_eq!(settings.wikipedia.user_agent, defaults.user_agent);
        assert_eq!(defaults.api_url, DEFAULT_API_URL);
        assert_eq!(defaults.request_timeout, None);
    }

    #[test]
    fn settings_serialize_with_renamed_keys() {
        let settings = Settings::load_for_tests();
        let value = serde_json::to_value(&settings).expect("settings should serialize");
        assert_eq!(value["wikipedia"]["request_timeout_sec"], 5);
        assert_eq!(value["http"]["listen"], "127.0.0.1:0");
    }
}
