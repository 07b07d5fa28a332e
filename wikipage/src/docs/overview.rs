//! # High level overview of Wikipage
//!
//! This project is structured as a [Cargo Workspace][] that contains one crate
//! for each broad area of behavior for Wikipage. The crates can be handled
//! either individually or as a group, and each test suite can be run
//! separately or together.
//!
//! [Cargo Workspace]: https://doc.rust-lang.org/book/ch14-03-cargo-workspaces.html
//!
//! This is a brief overview of the crates found in the repository. For more
//! details, see the specific crate docs.
//!
//! ## [`wikipage`](../)
//!
//! The main application, and the only *binary* crate in the repository. It
//! loads settings, sets up logging, and starts the web server.
//!
//! ## [`wikipage-settings`](../../wikipage_settings/index.html)
//!
//! This defines and documents the settings of the application. These settings
//! should be initialized by the binary crate, and passed into the other crates
//! to configure them.
//!
//! ## [`wikipage-web`](../../wikipage_web/index.html)
//!
//! This crate provides the HTTP API, including the operational endpoints used
//! to observe the running service.
//!
//! ## [`wikipage-wikipedia`](../../wikipage_wikipedia/index.html)
//!
//! This is a *domain* crate. It builds requests for the MediaWiki action API,
//! follows a single redirect, and condenses the result into a `PageInfo`.
//!
//! ## [`wikipage-integration-tests`](../../wikipage_integration_tests/index.html)
//!
//! This crate is a separate test system. It brings together the other crates to
//! produce a complete Wikipage server with a mock Wikipedia behind it, and
//! exercises the service through its public HTTP API.
