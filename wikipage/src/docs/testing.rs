//! # Testing strategies
//!
//! There are two major testing strategies used in this repository: unit tests,
//! and integration tests.
//!
//! Unit tests should appear close to the code they are testing, using standard
//! Rust unit tests. This is suitable for testing complex behavior at a small
//! scale, with fine grained control over the inputs. The request building,
//! redirect handling, and page extraction in `wikipage-wikipedia` are tested
//! this way, with [`httpmock`](https://docs.rs/httpmock) standing in for
//! Wikipedia where a request is made.
//!
//! However, many behaviors are difficult to test as unit tests, especially
//! details like the URLs we expose via the web service. To test these parts of
//! Wikipage, we have [`wikipage-integration-tests`][test-crate], which starts an
//! instance of Wikipage with a mock Wikipedia API. HTTP requests can then be made
//! to that server in order to test its behavior.
//!
//! [test-crate]: ../../../wikipage_integration_tests/
//!
//! ```ignore
//! #[actix_rt::test]
//! async fn lbheartbeat_works() -> Result<()> {
//!     wikipage_test(
//!         |_| (),
//!         |TestingTools { test_client, .. }| async move {
//!             let response = test_client.get("/__lbheartbeat__").send().await?;
//!
//!             assert_eq!(response.status(), StatusCode::OK);
//!             assert_eq!(response.content_length(), Some(0));
//!             Ok(())
//!         },
//!     )
//!     .await
//! }
//! ```
//!
//! For more details, see the documentation of the `wikipage-integration-tests`
//! crate.
