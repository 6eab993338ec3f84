//! hello-api — library crate for the greeting and health check service.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `hello-e2e-tests`) can access `build_router`, `ApiConfig` and
//! the server bootstrap.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
