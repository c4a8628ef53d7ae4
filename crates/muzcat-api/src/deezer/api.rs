//! `DeezerApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::Result;
use super::params::SearchParams;
use super::types::{Album, Artist, Episode, Listing, Playlist, Show, Track};

/// Deezer catalog API trait.
///
/// Abstracts catalog operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(DeezerApi: Send)]
pub trait LocalDeezerApi {
    /// Searches for tracks.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn search_tracks(&self, params: &SearchParams) -> Result<Listing<Track>>;

    /// Searches for albums.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn search_albums(&self, params: &SearchParams) -> Result<Listing<Album>>;

    /// Searches for artists.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn search_artists(&self, params: &SearchParams) -> Result<Listing<Artist>>;

    /// Searches for playlists.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn search_playlists(&self, params: &SearchParams) -> Result<Listing<Playlist>>;

    /// Searches for podcast shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn search_shows(&self, params: &SearchParams) -> Result<Listing<Show>>;

    /// Fetches a track by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn track(&self, id: i64) -> Result<Track>;

    /// Fetches an album by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn album(&self, id: i64) -> Result<Album>;

    /// Fetches an artist by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn artist(&self, id: i64) -> Result<Artist>;

    /// Fetches a playlist by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn playlist(&self, id: i64) -> Result<Playlist>;

    /// Fetches a podcast show by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn show(&self, id: i64) -> Result<Show>;

    /// Fetches a podcast episode by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn episode(&self, id: i64) -> Result<Episode>;

    /// Lists the tracks of an album. A non-positive `limit` defers to
    /// the server default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn album_tracks(&self, id: i64, limit: i64) -> Result<Listing<Track>>;

    /// Lists the albums of an artist. A non-positive `limit` defers to
    /// the server default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn artist_albums(&self, id: i64, limit: i64) -> Result<Listing<Album>>;

    /// Lists an artist's top tracks. A non-positive `limit` defers to
    /// the server default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn artist_top_tracks(&self, id: i64, limit: i64) -> Result<Listing<Track>>;

    /// Lists the episodes of a show, most recent first. A non-positive
    /// `limit` defers to the server default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request, the API, or JSON decoding
    /// fails.
    async fn show_episodes(&self, id: i64, limit: i64) -> Result<Listing<Episode>>;
}
