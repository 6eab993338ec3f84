//! End-to-end tests for hello-api.
//!
//! Everything lives under `tests/`; each test starts a real server on a
//! TCP port and talks to it with `reqwest`.
