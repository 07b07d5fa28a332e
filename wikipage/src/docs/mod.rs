//! Documentation for Wikipage that doesn't belong to one of the library crates.

pub mod api;
pub mod dev;
pub mod overview;
pub mod testing;
