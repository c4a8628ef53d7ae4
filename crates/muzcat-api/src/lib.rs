//! API client library for muzcat.
//!
//! Provides a rate-limited, response-caching client for the Deezer
//! catalog API.

/// Deezer catalog API client.
pub mod deezer;
