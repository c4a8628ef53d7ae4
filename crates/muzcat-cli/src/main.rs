//! muzcat - Deezer catalog browsing CLI.

/// Application configuration (TOML).
mod config;
/// Output rendering.
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;

use crate::config::{AppConfig, resolve_config_path};
use crate::output::{Formatter, OutputFormat};
use muzcat_api::deezer::{
    DeezerClient, LocalDeezerApi, SearchParams, filter_albums_by_artist, filter_tracks_by_album,
    filter_tracks_by_artist, search_episodes,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Output format. Falls back to the config default, then `table`.
    #[arg(long, short = 'o', global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Limit number of results. Falls back to the config default (25).
    #[arg(long, short = 'l', global = true)]
    limit: Option<i64>,

    /// Display only IDs (forces `ids` output).
    #[arg(long, global = true)]
    ids_only: bool,

    /// Select specific columns to display (comma-separated header names).
    #[arg(long, short = 'f', global = true, value_delimiter = ',')]
    fields: Vec<String>,

    /// Bypass the response cache for this invocation.
    #[arg(long, global = true)]
    no_cache: bool,

    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search the catalog for tracks, albums, artists, playlists,
    /// shows, or episodes.
    Search(SearchArgs),
    /// Get details for a specific item by ID.
    Get(GetArgs),
    /// Get tracks for an album or top tracks for an artist.
    Tracks(TracksArgs),
    /// Get albums for an artist.
    Albums(AlbumsArgs),
    /// Get episodes for a podcast show.
    Episodes(EpisodesArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "daft punk").
    query: String,

    /// Type to search.
    #[arg(long = "type", short = 't', value_enum, default_value = "all")]
    kind: SearchKind,

    /// Filter results by artist name (case-insensitive).
    #[arg(long)]
    artist: Option<String>,

    /// Filter results by album name (case-insensitive).
    #[arg(long)]
    album: Option<String>,

    /// Use exact matching for filters.
    #[arg(long)]
    exact: bool,
}

/// Resource kinds accepted by `search --type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchKind {
    /// Search tracks.
    #[value(alias = "tracks")]
    Track,
    /// Search albums.
    #[value(alias = "albums")]
    Album,
    /// Search artists.
    #[value(alias = "artists")]
    Artist,
    /// Search playlists.
    #[value(alias = "playlists")]
    Playlist,
    /// Search podcast shows.
    #[value(alias = "shows")]
    Show,
    /// Search podcast episodes (via show search).
    #[value(alias = "episodes")]
    Episode,
    /// Search tracks, albums, artists, and playlists in sequence.
    All,
}

/// Arguments for the `get` subcommand.
#[derive(clap::Args)]
struct GetArgs {
    /// Item type.
    #[arg(value_enum)]
    kind: GetKind,

    /// Numeric item ID.
    id: i64,
}

/// Resource kinds accepted by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GetKind {
    /// A track.
    Track,
    /// An album.
    Album,
    /// An artist.
    Artist,
    /// A playlist.
    Playlist,
    /// A podcast show.
    #[value(alias = "podcast")]
    Show,
    /// A podcast episode.
    Episode,
}

/// Arguments for the `tracks` subcommand.
#[derive(clap::Args)]
struct TracksArgs {
    /// Parent type.
    #[arg(value_enum)]
    kind: TracksKind,

    /// Numeric parent ID.
    id: i64,
}

/// Parent kinds accepted by `tracks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TracksKind {
    /// Tracks of an album.
    Album,
    /// Top tracks of an artist.
    Artist,
}

/// Arguments for the `albums` subcommand.
#[derive(clap::Args)]
struct AlbumsArgs {
    /// Parent type (only `artist`).
    #[arg(value_enum)]
    kind: AlbumsKind,

    /// Numeric artist ID.
    id: i64,
}

/// Parent kinds accepted by `albums`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlbumsKind {
    /// Albums of an artist.
    Artist,
}

/// Arguments for the `episodes` subcommand.
#[derive(clap::Args)]
struct EpisodesArgs {
    /// Parent type (only `show`).
    #[arg(value_enum)]
    kind: EpisodesKind,

    /// Numeric show ID.
    id: i64,
}

/// Parent kinds accepted by `episodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EpisodesKind {
    /// Episodes of a show.
    Show,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

/// Builds the API client from config and CLI cache overrides.
fn build_client(config: &AppConfig, no_cache: bool) -> Result<DeezerClient> {
    let mut builder = DeezerClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if no_cache || !config.cache.enabled {
        builder = builder.cache_enabled(false);
    } else {
        builder = builder.cache_ttl(Duration::from_secs(config.cache.ttl_secs));
    }

    builder.build().context("failed to build API client")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if any searched kind fails; filters never fail.
#[instrument(skip_all)]
async fn run_search(
    client: &DeezerClient,
    args: &SearchArgs,
    limit: i64,
    formatter: &Formatter,
) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match args.kind {
        SearchKind::Track => search_tracks_cmd(client, args, limit, formatter, &mut out).await,
        SearchKind::Album => search_albums_cmd(client, args, limit, formatter, &mut out).await,
        SearchKind::Artist => {
            let params = SearchParams::new(args.query.clone()).limit(limit);
            let result = client
                .search_artists(&params)
                .await
                .context("failed to search artists")?;
            formatter.listing(&mut out, &result.data)
        }
        SearchKind::Playlist => {
            let params = SearchParams::new(args.query.clone()).limit(limit);
            let result = client
                .search_playlists(&params)
                .await
                .context("failed to search playlists")?;
            formatter.listing(&mut out, &result.data)
        }
        SearchKind::Show => {
            let params = SearchParams::new(args.query.clone()).limit(limit);
            let result = client
                .search_shows(&params)
                .await
                .context("failed to search shows")?;
            formatter.listing(&mut out, &result.data)
        }
        SearchKind::Episode => {
            let result = search_episodes(client, &args.query, limit)
                .await
                .context("failed to search episodes")?;
            formatter.listing(&mut out, &result.data)
        }
        SearchKind::All => {
            writeln!(out, "=== TRACKS ===")?;
            search_tracks_cmd(client, args, limit, formatter, &mut out).await?;

            writeln!(out, "\n=== ALBUMS ===")?;
            search_albums_cmd(client, args, limit, formatter, &mut out).await?;

            writeln!(out, "\n=== ARTISTS ===")?;
            let params = SearchParams::new(args.query.clone()).limit(limit);
            let artists = client
                .search_artists(&params)
                .await
                .context("failed to search artists")?;
            formatter.listing(&mut out, &artists.data)?;

            writeln!(out, "\n=== PLAYLISTS ===")?;
            let playlists = client
                .search_playlists(&params)
                .await
                .context("failed to search playlists")?;
            formatter.listing(&mut out, &playlists.data)
        }
    }
}

/// Searches tracks and applies the artist/album filters.
async fn search_tracks_cmd<W: Write>(
    client: &DeezerClient,
    args: &SearchArgs,
    limit: i64,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let params = SearchParams::new(args.query.clone()).limit(limit);
    let result = client
        .search_tracks(&params)
        .await
        .context("failed to search tracks")?;

    let mut tracks = result.data;
    if let Some(ref artist) = args.artist {
        tracks = filter_tracks_by_artist(tracks, artist);
    }
    if let Some(ref album) = args.album {
        tracks = filter_tracks_by_album(tracks, album, args.exact);
    }

    formatter.listing(out, &tracks)
}

/// Searches albums and applies the artist filter.
async fn search_albums_cmd<W: Write>(
    client: &DeezerClient,
    args: &SearchArgs,
    limit: i64,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let params = SearchParams::new(args.query.clone()).limit(limit);
    let result = client
        .search_albums(&params)
        .await
        .context("failed to search albums")?;

    let mut albums = result.data;
    if let Some(ref artist) = args.artist {
        albums = filter_albums_by_artist(albums, artist);
    }

    formatter.listing(out, &albums)
}

/// Runs the `get` subcommand.
///
/// # Errors
///
/// Returns an error if the fetch fails.
#[instrument(skip_all)]
async fn run_get(client: &DeezerClient, args: &GetArgs, formatter: &Formatter) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match args.kind {
        GetKind::Track => {
            let track = client.track(args.id).await.context("failed to get track")?;
            formatter.detail(&mut out, &track)
        }
        GetKind::Album => {
            let album = client.album(args.id).await.context("failed to get album")?;
            formatter.detail(&mut out, &album)
        }
        GetKind::Artist => {
            let artist = client.artist(args.id).await.context("failed to get artist")?;
            formatter.detail(&mut out, &artist)
        }
        GetKind::Playlist => {
            let playlist = client
                .playlist(args.id)
                .await
                .context("failed to get playlist")?;
            formatter.detail(&mut out, &playlist)
        }
        GetKind::Show => {
            let show = client.show(args.id).await.context("failed to get show")?;
            formatter.detail(&mut out, &show)
        }
        GetKind::Episode => {
            let episode = client
                .episode(args.id)
                .await
                .context("failed to get episode")?;
            formatter.detail(&mut out, &episode)
        }
    }
}

/// Runs the `tracks` subcommand.
///
/// # Errors
///
/// Returns an error if the listing fetch fails.
#[instrument(skip_all)]
async fn run_tracks(
    client: &DeezerClient,
    args: &TracksArgs,
    limit: i64,
    formatter: &Formatter,
) -> Result<()> {
    let mut out = std::io::stdout().lock();

    let result = match args.kind {
        TracksKind::Album => client
            .album_tracks(args.id, limit)
            .await
            .context("failed to get album tracks")?,
        TracksKind::Artist => client
            .artist_top_tracks(args.id, limit)
            .await
            .context("failed to get artist top tracks")?,
    };

    formatter.listing(&mut out, &result.data)
}

/// Runs the `albums` subcommand.
///
/// # Errors
///
/// Returns an error if the listing fetch fails.
#[instrument(skip_all)]
async fn run_albums(
    client: &DeezerClient,
    args: &AlbumsArgs,
    limit: i64,
    formatter: &Formatter,
) -> Result<()> {
    let mut out = std::io::stdout().lock();

    let result = match args.kind {
        AlbumsKind::Artist => client
            .artist_albums(args.id, limit)
            .await
            .context("failed to get artist albums")?,
    };

    formatter.listing(&mut out, &result.data)
}

/// Runs the `episodes` subcommand.
///
/// # Errors
///
/// Returns an error if the listing fetch fails.
#[instrument(skip_all)]
async fn run_episodes(
    client: &DeezerClient,
    args: &EpisodesArgs,
    limit: i64,
    formatter: &Formatter,
) -> Result<()> {
    let mut out = std::io::stdout().lock();

    let result = match args.kind {
        EpisodesKind::Show => client
            .show_episodes(args.id, limit)
            .await
            .context("failed to get show episodes")?,
    };

    formatter.listing(&mut out, &result.data)
}

/// Runs the `completions` subcommand.
fn run_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "muzcat", &mut std::io::stdout());
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path =
        resolve_config_path(cli.dir.as_ref()).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let format = cli.output.unwrap_or(config.output.format);
    let limit = cli.limit.unwrap_or(config.output.limit);
    let formatter = Formatter::new(format, cli.ids_only, cli.fields.clone());

    match &cli.command {
        Commands::Search(args) => {
            let client = build_client(&config, cli.no_cache)?;
            run_search(&client, args, limit, &formatter).await
        }
        Commands::Get(args) => {
            let client = build_client(&config, cli.no_cache)?;
            run_get(&client, args, &formatter).await
        }
        Commands::Tracks(args) => {
            let client = build_client(&config, cli.no_cache)?;
            run_tracks(&client, args, limit, &formatter).await
        }
        Commands::Albums(args) => {
            let client = build_client(&config, cli.no_cache)?;
            run_albums(&client, args, limit, &formatter).await
        }
        Commands::Episodes(args) => {
            let client = build_client(&config, cli.no_cache)?;
            run_episodes(&client, args, limit, &formatter).await
        }
        Commands::Completions(args) => {
            run_completions(args);
            Ok(())
        }
    }
}
