//! Deezer catalog resource types.
//!
//! Records mirror the upstream JSON objects field for field. Search
//! results omit fields that the detail endpoints carry, so every struct
//! tolerates absent fields via `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// A single track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Track identifier.
    pub id: i64,
    /// Full title.
    pub title: String,
    /// Title without version suffix.
    pub title_short: String,
    /// Version suffix (e.g. "(Remastered)").
    pub title_version: String,
    /// Web link.
    pub link: String,
    /// Duration in seconds.
    pub duration: u64,
    /// Popularity rank.
    pub rank: u64,
    /// Explicit lyrics flag.
    pub explicit_lyrics: bool,
    /// 30-second preview URL.
    pub preview: String,
    /// Beats per minute.
    pub bpm: f64,
    /// Track gain.
    pub gain: f64,
    /// Performing artist, embedded by value.
    pub artist: Artist,
    /// Containing album, embedded by value.
    pub album: Album,
    /// Object type discriminator (`"track"`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Track {
    /// Duration formatted as `m:ss`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// An album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Album identifier.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Web link.
    pub link: String,
    /// Cover image URL.
    pub cover: String,
    /// Small cover image URL.
    pub cover_small: String,
    /// Medium cover image URL.
    pub cover_medium: String,
    /// Big cover image URL.
    pub cover_big: String,
    /// Extra-large cover image URL.
    pub cover_xl: String,
    /// Genre identifier.
    pub genre_id: i64,
    /// Number of tracks.
    pub nb_tracks: u64,
    /// Release date (`YYYY-MM-DD`).
    pub release_date: String,
    /// Record type (`album`, `ep`, `single`).
    pub record_type: String,
    /// Tracklist API URL.
    pub tracklist: String,
    /// Explicit lyrics flag.
    pub explicit_lyrics: bool,
    /// Album artist, embedded by value.
    pub artist: Artist,
    /// Object type discriminator (`"album"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// An artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    /// Artist identifier.
    pub id: i64,
    /// Artist name.
    pub name: String,
    /// Web link.
    pub link: String,
    /// Picture URL.
    pub picture: String,
    /// Small picture URL.
    pub picture_small: String,
    /// Medium picture URL.
    pub picture_medium: String,
    /// Big picture URL.
    pub picture_big: String,
    /// Extra-large picture URL.
    pub picture_xl: String,
    /// Number of albums.
    pub nb_album: u64,
    /// Number of fans.
    pub nb_fan: u64,
    /// Whether a radio stream exists.
    pub radio: bool,
    /// Tracklist API URL.
    pub tracklist: String,
    /// Object type discriminator (`"artist"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// A playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    /// Playlist identifier.
    pub id: i64,
    /// Playlist title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Total duration in seconds.
    pub duration: u64,
    /// Public visibility flag.
    pub public: bool,
    /// Whether this is the creator's loved-tracks playlist.
    pub is_loved_track: bool,
    /// Collaborative flag.
    pub collaborative: bool,
    /// Number of tracks.
    pub nb_tracks: u64,
    /// Number of fans.
    pub fans: u64,
    /// Web link.
    pub link: String,
    /// Picture URL.
    pub picture: String,
    /// Small picture URL.
    pub picture_small: String,
    /// Medium picture URL.
    pub picture_medium: String,
    /// Big picture URL.
    pub picture_big: String,
    /// Extra-large picture URL.
    pub picture_xl: String,
    /// Content checksum.
    pub checksum: String,
    /// Creating user, when exposed.
    pub creator: Option<User>,
    /// Embedded track list, when exposed.
    pub tracks: Option<TracksData>,
    /// Object type discriminator (`"playlist"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation date (`YYYY-MM-DD HH:MM:SS`).
    pub creation_date: String,
}

impl Playlist {
    /// Creator name, or an empty string when the creator is absent.
    #[must_use]
    pub fn creator_name(&self) -> &str {
        self.creator.as_ref().map_or("", |user| user.name.as_str())
    }
}

/// A user (playlist creator).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Tracklist API URL.
    pub tracklist: String,
    /// Object type discriminator (`"user"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Track list embedded in a playlist detail response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksData {
    /// Embedded tracks.
    pub data: Vec<Track>,
}

/// A podcast show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Show {
    /// Show identifier.
    pub id: i64,
    /// Show title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether the show is currently available.
    pub available: bool,
    /// Number of fans.
    pub fans: u64,
    /// Web link.
    pub link: String,
    /// Share link.
    pub share: String,
    /// Picture URL.
    pub picture: String,
    /// Small picture URL.
    pub picture_small: String,
    /// Medium picture URL.
    pub picture_medium: String,
    /// Big picture URL.
    pub picture_big: String,
    /// Extra-large picture URL.
    pub picture_xl: String,
    /// Object type discriminator (`"podcast"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// A podcast episode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// Episode identifier.
    pub id: i64,
    /// Episode title.
    pub title: String,
    /// Whether the episode is currently available.
    pub available: bool,
    /// Release date (`YYYY-MM-DD HH:MM:SS`).
    pub release_date: String,
    /// Duration in seconds.
    pub duration: u64,
    /// Web link.
    pub link: String,
    /// Picture URL.
    pub picture: String,
    /// Parent show, embedded by value.
    pub show: Show,
    /// Object type discriminator (`"episode"`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Episode {
    /// Duration formatted as `m:ss`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// Result envelope for list and search operations.
///
/// `data` preserves upstream order exactly; the client never reorders
/// or deduplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    /// Items in upstream order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total number of matches reported by the server.
    #[serde(default)]
    pub total: u64,
    /// Next-page URL, absent or empty on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

/// Error payload that can replace normal content at HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Upstream error category.
    #[serde(rename = "type", default)]
    pub(crate) kind: String,
    /// Human-readable message.
    #[serde(default)]
    pub(crate) message: String,
    /// Upstream error code.
    #[serde(default)]
    pub(crate) code: i64,
}

/// Loose wrapper used to probe a body for the error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    /// Present when the body is an error payload.
    #[serde(default)]
    pub(crate) error: Option<ApiErrorBody>,
}

/// Formats a duration in seconds as `m:ss`.
fn format_duration(seconds: u64) -> String {
    let minutes = seconds.checked_div(60).unwrap_or(0);
    let rest = seconds.checked_rem(60).unwrap_or(0);
    format!("{minutes}:{rest:02}")
}
