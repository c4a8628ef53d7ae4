//! Row and detail projections for each catalog resource.

use muzcat_api::deezer::{Album, Artist, Episode, Playlist, Show, Track};

/// Column and detail projection for one resource kind.
///
/// Supplies everything the `Formatter` needs: column headers, one row
/// per item, the bare identifier, and the key/value pairs of the
/// single-item detail view.
pub trait Tabular {
    /// Singular label used in detail headings ("Track").
    fn label() -> &'static str;

    /// Plural noun used in empty-result messages ("tracks").
    fn plural() -> &'static str;

    /// Column headers, aligned with [`Tabular::row`].
    fn headers() -> &'static [&'static str];

    /// Cell values for the list views.
    fn row(&self) -> Vec<String>;

    /// Bare identifier for `ids` output.
    fn id(&self) -> i64;

    /// Key/value pairs for the detail view.
    fn detail(&self) -> Vec<(&'static str, String)>;
}

/// Renders a boolean as `Yes`/`No` for table cells.
fn yes_no(value: bool) -> String {
    String::from(if value { "Yes" } else { "No" })
}

/// Humanises a count (`812`, `1.2K`, `3.4M`).
#[allow(clippy::as_conversions, clippy::cast_precision_loss)]
pub(crate) fn format_count(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    }
}

impl Tabular for Track {
    fn label() -> &'static str {
        "Track"
    }

    fn plural() -> &'static str {
        "tracks"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Artist", "Album", "Duration", "Link", "Rank"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.artist.name.clone(),
            self.album.title.clone(),
            self.duration_display(),
            self.link.clone(),
            self.rank.to_string(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Artist", format!("{} (ID: {})", self.artist.name, self.artist.id)),
            ("Album", format!("{} (ID: {})", self.album.title, self.album.id)),
            ("Duration", self.duration_display()),
            ("Rank", self.rank.to_string()),
            ("Explicit", self.explicit_lyrics.to_string()),
            ("Preview", self.preview.clone()),
            ("Link", self.link.clone()),
        ]
    }
}

impl Tabular for Album {
    fn label() -> &'static str {
        "Album"
    }

    fn plural() -> &'static str {
        "albums"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Artist", "Tracks", "Release", "Link"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.artist.name.clone(),
            self.nb_tracks.to_string(),
            self.release_date.clone(),
            self.link.clone(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Artist", format!("{} (ID: {})", self.artist.name, self.artist.id)),
            ("Tracks", self.nb_tracks.to_string()),
            ("Release", self.release_date.clone()),
            ("Record Type", self.record_type.clone()),
            ("Explicit", self.explicit_lyrics.to_string()),
            ("Link", self.link.clone()),
        ]
    }
}

impl Tabular for Artist {
    fn label() -> &'static str {
        "Artist"
    }

    fn plural() -> &'static str {
        "artists"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Albums", "Fans", "Link"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.nb_album.to_string(),
            format_count(self.nb_fan),
            self.link.clone(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Albums", self.nb_album.to_string()),
            ("Fans", format_count(self.nb_fan)),
            ("Radio", self.radio.to_string()),
            ("Link", self.link.clone()),
        ]
    }
}

impl Tabular for Playlist {
    fn label() -> &'static str {
        "Playlist"
    }

    fn plural() -> &'static str {
        "playlists"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Creator", "Tracks", "Public", "Link"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            String::from(self.creator_name()),
            self.nb_tracks.to_string(),
            yes_no(self.public),
            self.link.clone(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Description", self.description.clone()),
            ("Creator", String::from(self.creator_name())),
            ("Tracks", self.nb_tracks.to_string()),
            ("Fans", format_count(self.fans)),
            ("Public", self.public.to_string()),
            ("Collaborative", self.collaborative.to_string()),
            ("Created", self.creation_date.clone()),
            ("Link", self.link.clone()),
        ]
    }
}

impl Tabular for Show {
    fn label() -> &'static str {
        "Show"
    }

    fn plural() -> &'static str {
        "shows"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Description", "Available", "Fans", "Link"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            yes_no(self.available),
            format_count(self.fans),
            self.link.clone(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Description", self.description.clone()),
            ("Available", self.available.to_string()),
            ("Fans", format_count(self.fans)),
            ("Link", self.link.clone()),
        ]
    }
}

impl Tabular for Episode {
    fn label() -> &'static str {
        "Episode"
    }

    fn plural() -> &'static str {
        "episodes"
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Show", "Duration", "Release Date", "Available", "Link"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.show.title.clone(),
            self.duration_display(),
            self.release_date.clone(),
            yes_no(self.available),
            self.link.clone(),
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Show", format!("{} (ID: {})", self.show.title, self.show.id)),
            ("Duration", self.duration_display()),
            ("Release Date", self.release_date.clone()),
            ("Available", self.available.to_string()),
            ("Link", self.link.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_small() {
        // Arrange & Act & Assert
        assert_eq!(format_count(812), "812");
    }

    #[test]
    fn test_format_count_thousands() {
        // Arrange & Act & Assert
        assert_eq!(format_count(18_233), "18.2K");
    }

    #[test]
    fn test_format_count_millions() {
        // Arrange & Act & Assert
        assert_eq!(format_count(3_400_000), "3.4M");
    }

    #[test]
    fn test_track_row_aligns_with_headers() {
        // Arrange
        let track = Track::default();

        // Act & Assert
        assert_eq!(track.row().len(), <Track as Tabular>::headers().len());
    }

    #[test]
    fn test_episode_row_aligns_with_headers() {
        // Arrange
        let episode = Episode::default();

        // Act & Assert
        assert_eq!(episode.row().len(), <Episode as Tabular>::headers().len());
    }
}
