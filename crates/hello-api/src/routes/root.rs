//! Greeting endpoint.

/// Body returned by `GET /`.
pub const GREETING: &str = "Hello World!";

/// GET / — plain-text greeting.
pub async fn root() -> &'static str {
    GREETING
}
