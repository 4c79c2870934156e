use super::error::Result;
use super::models::ArtistSummary;
use super::search::search_by_name;
use super::source::CatalogSource;

/// Immutable snapshot of the upstream artist list, taken once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    artists: Vec<ArtistSummary>,
}

impl Roster {
    /// Fetch the full artist list from `source`.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let artists = source.fetch_roster().await?;
        Ok(Self { artists })
    }

    pub fn from_artists(artists: Vec<ArtistSummary>) -> Self {
        Self { artists }
    }

    pub fn artists(&self) -> &[ArtistSummary] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn search(&self, query: &str) -> Vec<&ArtistSummary> {
        search_by_name(&self.artists, query)
    }
}
