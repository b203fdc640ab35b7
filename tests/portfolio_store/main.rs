//! Storage contract tests.
//!
//! Exercise `MemStorage` through the `Storage` trait only, the way the HTTP
//! layer (or any other caller) sees it.

mod contract;
