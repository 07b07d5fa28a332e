//! # Developer documentation for working on Wikipage
//!
//! ## tl;dr
//!
//! Here are some useful commands when working on Wikipage.
//!
//! Run the main app
//! ```shell
//! $ cargo run -p wikipage
//! ```
//!
//! Run specific tests for one crate
//! ```shell
//! $ cargo test -p wikipage-integration-tests -- wikipage
//! ```
//!
//! Try a lookup against the running app
//! ```shell
//! $ curl 'http://127.0.0.1:8007/wikipage?q=USA'
//! ```
//!
//! ## Dependencies
//!
//! The only service Wikipage depends on is the Wikipedia API, at the URL in the
//! `wikipedia.api_url` setting. Tests never reach it; they point that setting
//! at a mock server.
//!
//! ## Local configuration
//!
//! The default configuration of Wikipage is development, which has
//! human-oriented logging and debugging enabled. For settings that you wish to
//! change in the development configuration, you have three options.
//!
//! > For full details, make sure to check out the documentation for
//! > `wikipage_settings`.
//!
//! ### Update the defaults
//!
//! If the change you want to make makes the system better for most development
//! tasks, consider adding it to `config/development.yaml`, so that other
//! developers can take advantage of it. You can look at `config/base.yaml`,
//! which defines all required configuration, to see an example of the structure.
//!
//! ### Create a local override
//!
//! For local changes to adapt to your machine or tastes, you can put the
//! configuration in `config/local.yaml`. This file doesn't exist by default.
//! These changes won't be a part of the git history.
//!
//! ### Environment variables
//!
//! Any setting can be overridden with an environment variable that starts
//! with `WIKIPAGE_`, using `__` between levels. For example, to look pages up
//! on the German Wikipedia:
//!
//! ```shell
//! $ WIKIPAGE_WIKIPEDIA__API_URL=https://de.wikipedia.org/w/api.php cargo run -p wikipage
//! ```
//!
//! The environment itself is chosen with `WIKIPAGE_ENV`, which selects
//! `config/${WIKIPAGE_ENV}.yaml`.
//!
//! > Note that none of the above overrides are used in tests. If you need to
//! > configure the test environment, you can edit `config/test.yaml` or create
//! > `config/local_test.yaml`.
