//! `DeezerClient` - Deezer catalog API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::LocalDeezerApi;
use super::cache::{DEFAULT_TTL, ResponseCache, request_key};
use super::error::{DeezerError, Result};
use super::params::SearchParams;
use super::rate_limiter::DeezerRateLimiter;
use super::types::{
    Album, Artist, Episode, ErrorEnvelope, Listing, Playlist, Show, Track,
};

/// Base URL of the public catalog API.
pub const DEEZER_BASE_URL: &str = "https://api.deezer.com";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deezer catalog API client.
///
/// Owns its rate limiter and response cache; every operation funnels
/// through one fetch pipeline (cache probe, rate-limit admission, GET,
/// error detection, cache populate, typed decode). Requests are never
/// retried.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DeezerClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Rate limiter shared by all in-flight operations.
    rate_limiter: Arc<Mutex<DeezerRateLimiter>>,
    /// Response cache, `None` when caching is disabled.
    cache: Option<ResponseCache>,
}

/// Builder for `DeezerClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DeezerClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
    timeout: Option<Duration>,
    cache_enabled: bool,
    cache_ttl: Option<Duration>,
}

impl DeezerClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            min_interval: None,
            timeout: None,
            cache_enabled: true,
            cache_ttl: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 50ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Sets the per-request timeout (default: 10s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables the response cache (default: enabled).
    #[must_use]
    pub const fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Sets the cache time-to-live (default: 5 minutes).
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - The base URL is invalid.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<DeezerClient> {
        let user_agent = self
            .user_agent
            .ok_or_else(|| DeezerError::Config(String::from("user_agent is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEEZER_BASE_URL)?,
        };

        let rate_limiter = self
            .min_interval
            .map_or_else(DeezerRateLimiter::default_interval, DeezerRateLimiter::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .gzip(true)
            .build()
            .map_err(|e| DeezerError::Config(format!("failed to build HTTP client: {e}")))?;

        let cache = self
            .cache_enabled
            .then(|| ResponseCache::new(self.cache_ttl.unwrap_or(DEFAULT_TTL)));

        Ok(DeezerClient {
            http_client,
            base_url,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
            cache,
        })
    }
}

impl DeezerClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> DeezerClientBuilder {
        DeezerClientBuilder::new()
    }

    /// Fetches the raw body for `path` + `params`.
    ///
    /// Pipeline: canonical key → cache probe → rate-limit admission →
    /// GET → status check → error-envelope probe → cache populate.
    /// Query parameters are sent in canonical (name-sorted) order, and
    /// the query string is appended only when non-empty. A cache hit
    /// returns immediately without waiting for admission.
    #[instrument(skip_all)]
    async fn get_bytes(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<u8>> {
        let mut params: Vec<(&str, String)> = params.to_vec();
        params.sort_by(|a, b| a.0.cmp(b.0));

        let key = request_key(path, &params);
        if let Some(cache) = &self.cache
            && let Some(body) = cache.get(&key)
        {
            tracing::debug!(%key, "cache hit");
            return Ok(body);
        }

        self.rate_limiter.lock().await.wait().await;

        let url = self.base_url.join(path)?;
        let mut request = self.http_client.get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        let request = request.build()?;
        tracing::debug!(url = %request.url(), "catalog request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeezerError::Status(status.as_u16()));
        }

        let body = response.bytes().await?.to_vec();

        // An error envelope at HTTP 200 always wins over normal content.
        if let Some(error) = probe_error_envelope(&body) {
            return Err(error);
        }

        if let Some(cache) = &self.cache {
            cache.set(&key, body.clone());
        }

        Ok(body)
    }

    /// Runs a search operation against `path` and decodes the listing.
    async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &SearchParams,
    ) -> Result<Listing<T>> {
        let mut query: Vec<(&str, String)> = vec![("q", params.query.clone())];
        if params.limit > 0 {
            query.push(("limit", params.limit.to_string()));
        }
        if params.index > 0 {
            query.push(("index", params.index.to_string()));
        }

        let body = self.get_bytes(path, &query).await?;
        decode(&body)
    }

    /// Fetches and decodes a single resource.
    async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_bytes(path, &[]).await?;
        decode(&body)
    }

    /// Fetches and decodes a sub-collection listing.
    async fn fetch_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        limit: i64,
    ) -> Result<Listing<T>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if limit > 0 {
            query.push(("limit", limit.to_string()));
        }

        let body = self.get_bytes(path, &query).await?;
        decode(&body)
    }
}

impl LocalDeezerApi for DeezerClient {
    #[instrument(skip_all)]
    async fn search_tracks(&self, params: &SearchParams) -> Result<Listing<Track>> {
        self.search("/search/track", params).await
    }

    #[instrument(skip_all)]
    async fn search_albums(&self, params: &SearchParams) -> Result<Listing<Album>> {
        self.search("/search/album", params).await
    }

    #[instrument(skip_all)]
    async fn search_artists(&self, params: &SearchParams) -> Result<Listing<Artist>> {
        self.search("/search/artist", params).await
    }

    #[instrument(skip_all)]
    async fn search_playlists(&self, params: &SearchParams) -> Result<Listing<Playlist>> {
        self.search("/search/playlist", params).await
    }

    #[instrument(skip_all)]
    async fn search_shows(&self, params: &SearchParams) -> Result<Listing<Show>> {
        self.search("/search/podcast", params).await
    }

    #[instrument(skip_all)]
    async fn track(&self, id: i64) -> Result<Track> {
        self.fetch_one(&format!("/track/{id}")).await
    }

    #[instrument(skip_all)]
    async fn album(&self, id: i64) -> Result<Album> {
        self.fetch_one(&format!("/album/{id}")).await
    }

    #[instrument(skip_all)]
    async fn artist(&self, id: i64) -> Result<Artist> {
        self.fetch_one(&format!("/artist/{id}")).await
    }

    #[instrument(skip_all)]
    async fn playlist(&self, id: i64) -> Result<Playlist> {
        self.fetch_one(&format!("/playlist/{id}")).await
    }

    #[instrument(skip_all)]
    async fn show(&self, id: i64) -> Result<Show> {
        self.fetch_one(&format!("/podcast/{id}")).await
    }

    #[instrument(skip_all)]
    async fn episode(&self, id: i64) -> Result<Episode> {
        self.fetch_one(&format!("/episode/{id}")).await
    }

    #[instrument(skip_all)]
    async fn album_tracks(&self, id: i64, limit: i64) -> Result<Listing<Track>> {
        self.fetch_listing(&format!("/album/{id}/tracks"), limit).await
    }

    #[instrument(skip_all)]
    async fn artist_albums(&self, id: i64, limit: i64) -> Result<Listing<Album>> {
        self.fetch_listing(&format!("/artist/{id}/albums"), limit).await
    }

    #[instrument(skip_all)]
    async fn artist_top_tracks(&self, id: i64, limit: i64) -> Result<Listing<Track>> {
        self.fetch_listing(&format!("/artist/{id}/top"), limit).await
    }

    #[instrument(skip_all)]
    async fn show_episodes(&self, id: i64, limit: i64) -> Result<Listing<Episode>> {
        self.fetch_listing(&format!("/podcast/{id}/episodes"), limit).await
    }
}

/// Checks a 2xx body for the in-band error envelope.
///
/// The probe is loose: a body that is not a JSON object, or an object
/// without an `error` member, is not an error. Target-shape decoding
/// only happens after this probe comes back clean.
fn probe_error_envelope(body: &[u8]) -> Option<DeezerError> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
    let error = envelope.error?;
    Some(DeezerError::Api {
        kind: error.kind,
        message: error.message,
        code: error.code,
    })
}

/// Decodes a response body into the operation's expected shape.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(DeezerError::from)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn test_client(base_url: &str) -> DeezerClient {
        DeezerClient::builder()
            .base_url(base_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = DeezerClient::builder().build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_with_user_agent_succeeds() {
        // Arrange & Act
        let result = DeezerClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/").unwrap();

        // Act
        let client = DeezerClient::builder()
            .base_url(custom_url.clone())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_builder_default_base_url() {
        // Arrange & Act
        let client = DeezerClient::builder().user_agent("test/0.0.0").build().unwrap();

        // Assert
        assert_eq!(client.base_url.as_str(), "https://api.deezer.com/");
    }

    #[test]
    fn test_parse_track_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/deezer/track_3135556.json");

        // Act
        let track: Track = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(track.id, 3_135_556);
        assert_eq!(track.title, "Harder, Better, Faster, Stronger");
        assert_eq!(track.artist.name, "Daft Punk");
        assert_eq!(track.album.id, 302_127);
        assert_eq!(track.duration_display(), "3:44");
    }

    #[test]
    fn test_parse_album_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/deezer/album_302127.json");

        // Act
        let album: Album = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(album.id, 302_127);
        assert_eq!(album.title, "Discovery");
        assert_eq!(album.nb_tracks, 14);
        assert_eq!(album.artist.name, "Daft Punk");
    }

    #[test]
    fn test_parse_playlist_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/deezer/playlist_908622995.json");

        // Act
        let playlist: Playlist = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(playlist.id, 908_622_995);
        assert_eq!(playlist.creator_name(), "playlist-curator");
        assert!(playlist.public);
        assert_eq!(playlist.tracks.unwrap().data.len(), 2);
    }

    #[test]
    fn test_parse_search_track_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/deezer/search_track_daft_punk.json");

        // Act
        let listing: Listing<Track> = serde_json::from_str(json).unwrap();

        // Assert: upstream order preserved
        assert_eq!(listing.total, 287);
        assert_eq!(listing.data.len(), 3);
        assert_eq!(listing.data[0].title, "Get Lucky");
        assert_eq!(listing.data[1].title, "One More Time");
        assert!(listing.next.as_deref().unwrap_or("").contains("index=25"));
    }

    #[test]
    fn test_parse_show_episodes_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/deezer/show_episodes_406562.json");

        // Act
        let listing: Listing<Episode> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(listing.data.len(), 3);
        assert_eq!(listing.data[0].id, 526_673_645);
        assert!(listing.data[0].available);
    }

    #[tokio::test]
    async fn test_search_tracks_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/search_track_daft_punk.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/search/track"))
            .and(wiremock::matchers::query_param("q", "daft punk"))
            .and(wiremock::matchers::query_param("limit", "3"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let params = SearchParams::new("daft punk").limit(3);

        // Act
        let listing = client.search_tracks(&params).await.unwrap();

        // Assert
        assert_eq!(listing.data.len(), 3);
        assert_eq!(listing.data[0].artist.name, "Daft Punk");
    }

    #[tokio::test]
    async fn test_search_omits_non_positive_paging_params() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/search/album"))
            .and(wiremock::matchers::query_param("q", "discovery"))
            .and(wiremock::matchers::query_param_is_missing("limit"))
            .and(wiremock::matchers::query_param_is_missing("index"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_string(r#"{"data":[],"total":0,"next":""}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let params = SearchParams::new("discovery").limit(0).index(-5);

        // Act & Assert (mock expect(1) + query_param_is_missing verify omission)
        client.search_albums(&params).await.unwrap();
    }

    #[tokio::test]
    async fn test_album_tracks_request_shape() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/album_tracks_302127.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/album/302127/tracks"))
            .and(wiremock::matchers::query_param("limit", "5"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let listing = client.album_tracks(302_127, 5).await.unwrap();

        // Assert: at most `limit` items, upstream order preserved
        assert!(listing.data.len() <= 5);
        assert_eq!(listing.data[0].title, "One More Time");
        assert_eq!(listing.data[1].title, "Aerodynamic");
    }

    #[tokio::test]
    async fn test_get_track_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/track/3135556"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let track = client.track(3_135_556).await.unwrap();

        // Assert
        assert_eq!(track.id, 3_135_556);
        assert_eq!(track.album.title, "Discovery");
    }

    #[tokio::test]
    async fn test_repeated_request_is_served_from_cache() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/track/3135556"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act: second call must not reach the network (mock expect(1))
        let first = client.track(3_135_556).await.unwrap();
        let second = client.track(3_135_556).await.unwrap();

        // Assert
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_rate_limiter() {
        // Arrange: an interval long enough that a second admission
        // would be visible in elapsed time
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DeezerClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(300))
            .build()
            .unwrap();

        client.track(3_135_556).await.unwrap();

        // Act
        let start = std::time::Instant::now();
        client.track(3_135_556).await.unwrap();
        let elapsed = start.elapsed();

        // Assert: no admission wait on a cache hit
        assert!(elapsed < Duration::from_millis(150));
    }

    #[tokio::test]
    async fn test_cache_disabled_always_fetches() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = DeezerClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .cache_enabled(false)
            .build()
            .unwrap();

        // Act & Assert (mock expect(2))
        client.track(3_135_556).await.unwrap();
        client.track(3_135_556).await.unwrap();
    }

    #[tokio::test]
    async fn test_cache_entry_expires_after_ttl() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = DeezerClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .cache_ttl(Duration::from_millis(50))
            .build()
            .unwrap();

        // Act: second call lands after expiry and re-fetches (expect(2))
        client.track(3_135_556).await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        client.track(3_135_556).await.unwrap();
    }

    #[tokio::test]
    async fn test_rate_limiter_enforces_interval() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = DeezerClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(100))
            .build()
            .unwrap();

        // Act: distinct ids so both calls miss the cache
        let start = std::time::Instant::now();
        client.track(1).await.unwrap();
        client.track(2).await.unwrap();
        let elapsed = start.elapsed();

        // Assert: at least 100ms between the two network calls
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_non_success_status_wins_over_error_body() {
        // Arrange: the error envelope in a 404 body must not be parsed
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{"error":{"type":"DataException","message":"no data","code":800}}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let result = client.track(1).await;

        // Assert
        assert!(matches!(result, Err(DeezerError::Status(404))));
    }

    #[tokio::test]
    async fn test_error_envelope_at_200_is_surfaced_and_not_cached() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body =
            r#"{"error":{"type":"DataException","message":"no data found","code":800}}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(error_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act: both calls reach the network because errors never
        // populate the cache (mock expect(2))
        let first = client.track(99).await;
        let second = client.track(99).await;

        // Assert
        for result in [first, second] {
            match result {
                Err(DeezerError::Api { message, code, .. }) => {
                    assert_eq!(message, "no data found");
                    assert_eq!(code, 800);
                }
                other => panic!("expected API error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_a_decode_error() {
        // Arrange: valid JSON, wrong shape for a track
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[1,2,3]"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let result = client.track(1).await;

        // Assert
        assert!(matches!(result, Err(DeezerError::Decode(_))));
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced() {
        // Arrange: nothing listens on this port
        let client = test_client("http://127.0.0.1:9");

        // Act
        let result = client.track(1).await;

        // Assert
        assert!(matches!(result, Err(DeezerError::Transport(_))));
    }

    #[tokio::test]
    async fn test_user_agent_is_sent() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/deezer/track_3135556.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header("User-Agent", "muzcat/0.0.0"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DeezerClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("muzcat/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) verifies User-Agent header)
        client.track(3_135_556).await.unwrap();
    }
}
