//! Deezer catalog API client module.
//!
//! Handles HTTP requests against the public catalog endpoints and
//! exposes typed search, get, and listing operations behind a shared
//! rate limiter and an in-memory response cache.

mod api;
mod cache;
mod client;
mod error;
mod params;
mod rate_limiter;
mod types;
mod util;

#[allow(clippy::module_name_repetitions)]
pub use api::{DeezerApi, LocalDeezerApi};
pub use cache::ResponseCache;
#[allow(clippy::module_name_repetitions)]
pub use client::{DEEZER_BASE_URL, DeezerClient, DeezerClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{DeezerError, Result};
pub use params::SearchParams;
pub use types::{Album, Artist, Episode, Listing, Playlist, Show, Track, TracksData, User};
pub use util::{
    filter_albums_by_artist, filter_tracks_by_album, filter_tracks_by_artist, search_episodes,
};
