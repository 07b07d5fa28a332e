//! Shared helpers for tests.

pub mod test_tools;
pub mod wikipedia;
