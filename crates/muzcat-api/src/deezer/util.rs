//! Deezer catalog utility functions.
//!
//! The catalog has no direct episode search, so `search_episodes`
//! composes one show search with per-show episode listings. The filter
//! helpers narrow decoded search results client-side.

use tracing::instrument;

use super::api::LocalDeezerApi;
use super::error::Result;
use super::params::SearchParams;
use super::types::{Album, Episode, Listing, Track};

/// Number of shows scanned per episode search.
const EPISODE_SEARCH_SHOW_LIMIT: i64 = 10;

/// Searches for episodes by composing a show search with per-show
/// episode listings.
///
/// Scans at most [`EPISODE_SEARCH_SHOW_LIMIT`] matching shows in the
/// order the search returned them, listing each show's episodes with
/// `limit` as the per-show cap, and accumulates until `limit` episodes
/// are collected (a non-positive `limit` drains every scanned show). A
/// show whose episode listing fails is skipped and aggregation
/// continues; when every show fails the result is an empty listing,
/// indistinguishable from zero matches.
///
/// # Errors
///
/// Returns an error only if the initial show search fails.
#[instrument(skip_all)]
pub async fn search_episodes(
    api: &(impl LocalDeezerApi + Sync),
    query: &str,
    limit: i64,
) -> Result<Listing<Episode>> {
    let show_params = SearchParams::new(query).limit(EPISODE_SEARCH_SHOW_LIMIT);
    let shows = api.search_shows(&show_params).await?;

    let wanted = usize::try_from(limit).unwrap_or(0);
    let mut episodes: Vec<Episode> = Vec::new();

    'shows: for show in &shows.data {
        let listing = match api.show_episodes(show.id, limit).await {
            Ok(listing) => listing,
            Err(error) => {
                tracing::warn!(
                    show_id = show.id,
                    error = %error,
                    "skipping show: episode listing failed"
                );
                continue;
            }
        };

        for episode in listing.data {
            episodes.push(episode);
            if wanted > 0 && episodes.len() >= wanted {
                break 'shows;
            }
        }
    }

    let total = u64::try_from(episodes.len()).unwrap_or(u64::MAX);
    Ok(Listing {
        data: episodes,
        total,
        next: None,
    })
}

/// Keeps only tracks whose artist name matches `artist_name`
/// (case-insensitive, exact). An empty name keeps everything.
#[must_use]
pub fn filter_tracks_by_artist(tracks: Vec<Track>, artist_name: &str) -> Vec<Track> {
    if artist_name.is_empty() {
        return tracks;
    }

    let wanted = artist_name.to_lowercase();
    tracks
        .into_iter()
        .filter(|track| track.artist.name.to_lowercase() == wanted)
        .collect()
}

/// Keeps only albums whose artist name matches `artist_name`
/// (case-insensitive, exact). An empty name keeps everything.
#[must_use]
pub fn filter_albums_by_artist(albums: Vec<Album>, artist_name: &str) -> Vec<Album> {
    if artist_name.is_empty() {
        return albums;
    }

    let wanted = artist_name.to_lowercase();
    albums
        .into_iter()
        .filter(|album| album.artist.name.to_lowercase() == wanted)
        .collect()
}

/// Keeps only tracks whose album title matches `album_name`
/// (case-insensitive; substring unless `exact`). An empty name keeps
/// everything.
#[must_use]
pub fn filter_tracks_by_album(tracks: Vec<Track>, album_name: &str, exact: bool) -> Vec<Track> {
    if album_name.is_empty() {
        return tracks;
    }

    let wanted = album_name.to_lowercase();
    tracks
        .into_iter()
        .filter(|track| {
            let title = track.album.title.to_lowercase();
            if exact { title == wanted } else { title.contains(&wanted) }
        })
        .collect()
}
