//! service-core: Shared infrastructure for the quiz service stack.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
