use async_trait::async_trait;

use super::error::{ResourceKind, Result};
use super::fetcher::HttpFetcher;
use super::models::{
    ArtistSummary, DatesEnvelope, LocationsEnvelope, RelationsEnvelope, RelationsMap,
};

/// Upstream URL templates, rooted at the API base URL.
///
/// The artist identifier is inserted verbatim as the last path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn roster(&self) -> String {
        format!("{}/artists", self.base_url)
    }

    pub fn profile(&self, artist_id: &str) -> String {
        format!("{}/artists/{}", self.base_url, artist_id)
    }

    pub fn locations(&self, artist_id: &str) -> String {
        format!("{}/locations/{}", self.base_url, artist_id)
    }

    pub fn dates(&self, artist_id: &str) -> String {
        format!("{}/dates/{}", self.base_url, artist_id)
    }

    pub fn relations(&self, artist_id: &str) -> String {
        format!("{}/relation/{}", self.base_url, artist_id)
    }
}

/// The five upstream reads the catalog depends on.
///
/// [`HttpCatalog`] is the production implementation; tests substitute
/// in-memory sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_roster(&self) -> Result<Vec<ArtistSummary>>;

    async fn fetch_profile(&self, artist_id: &str) -> Result<ArtistSummary>;

    async fn fetch_locations(&self, artist_id: &str) -> Result<Vec<String>>;

    async fn fetch_dates(&self, artist_id: &str) -> Result<Vec<String>>;

    async fn fetch_relations(&self, artist_id: &str) -> Result<RelationsMap>;
}

/// Catalog backed by the upstream HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    fetcher: HttpFetcher,
    endpoints: Endpoints,
}

impl HttpCatalog {
    pub fn new(fetcher: HttpFetcher, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_roster(&self) -> Result<Vec<ArtistSummary>> {
        self.fetcher
            .fetch_json(ResourceKind::Roster, &self.endpoints.roster())
            .await
    }

    async fn fetch_profile(&self, artist_id: &str) -> Result<ArtistSummary> {
        self.fetcher
            .fetch_json(ResourceKind::Profile, &self.endpoints.profile(artist_id))
            .await
    }

    async fn fetch_locations(&self, artist_id: &str) -> Result<Vec<String>> {
        let envelope: LocationsEnvelope = self
            .fetcher
            .fetch_json(ResourceKind::Locations, &self.endpoints.locations(artist_id))
            .await?;
        Ok(envelope.locations)
    }

    async fn fetch_dates(&self, artist_id: &str) -> Result<Vec<String>> {
        let envelope: DatesEnvelope = self
            .fetcher
            .fetch_json(ResourceKind::Dates, &self.endpoints.dates(artist_id))
            .await?;
        Ok(envelope.dates)
    }

    async fn fetch_relations(&self, artist_id: &str) -> Result<RelationsMap> {
        let envelope: RelationsEnvelope = self
            .fetcher
            .fetch_json(ResourceKind::Relations, &self.endpoints.relations(artist_id))
            .await?;
        Ok(envelope.dates_locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_templates() {
        let endpoints = Endpoints::new("https://api.example.com/api");

        assert_eq!(endpoints.roster(), "https://api.example.com/api/artists");
        assert_eq!(endpoints.profile("4"), "https://api.example.com/api/artists/4");
        assert_eq!(endpoints.locations("4"), "https://api.example.com/api/locations/4");
        assert_eq!(endpoints.dates("4"), "https://api.example.com/api/dates/4");
        assert_eq!(endpoints.relations("4"), "https://api.example.com/api/relation/4");
    }

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:9000/api/");
        assert_eq!(endpoints.profile("12"), "http://localhost:9000/api/artists/12");
    }

    #[test]
    fn test_identifier_is_not_validated() {
        let endpoints = Endpoints::new("http://localhost/api");
        assert_eq!(endpoints.dates("abc"), "http://localhost/api/dates/abc");
    }
}
