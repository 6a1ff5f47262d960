//! service-core: Shared infrastructure for the hello HTTP service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod shutdown;
