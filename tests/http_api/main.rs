//! HTTP API integration tests.
//!
//! Starts an axum server per test and exercises it with reqwest.

mod support;
mod projects;
mod site;
