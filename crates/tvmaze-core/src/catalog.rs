//! Main TVmaze catalog API
//!
//! This module provides the two catalog queries the show browser needs:
//! searching shows by keyword and listing a show's episodes.
//! Each query issues exactly one request and maps the response 1:1,
//! preserving the order the catalog returned.

use crate::client::{ClientConfig, TvmazeClient};
use crate::error::{Result, TvmazeError};
use crate::types::{EpisodeRecord, SearchHit, ShowRecord};
use crate::url::{build_episodes_path, build_search_path};

/// Catalog API for TVmaze
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvmazeCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = TvmazeCatalog::new()?;
///
///     let shows = catalog.search_shows("batman").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvmazeCatalog {
    client: TvmazeClient,
}

impl TvmazeCatalog {
    /// Create a new catalog with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new catalog with a custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(TvmazeClient::with_config(config)?))
    }

    /// Create a new catalog around a pre-configured client.
    pub fn with_client(client: TvmazeClient) -> Self {
        Self { client }
    }

    /// Search shows matching a keyword.
    ///
    /// # Returns
    /// * `Ok(Vec<ShowRecord>)` in catalog order, one per search hit
    /// * `Err(TvmazeError::EmptyQuery)` if the query is empty; no request is made
    ///
    /// The query is sent as typed; surrounding whitespace is kept.
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvmazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvmazeError> {
    /// let catalog = TvmazeCatalog::new()?;
    /// for show in catalog.search_shows("the wire").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, query: &str) -> Result<Vec<ShowRecord>> {
        if query.is_empty() {
            return Err(TvmazeError::EmptyQuery);
        }

        let hits: Vec<SearchHit> = self.client.fetch_json(&build_search_path(query)).await?;
        let shows: Vec<ShowRecord> = hits.into_iter().map(|hit| hit.show).collect();

        tracing::debug!(query, count = shows.len(), "show search completed");
        Ok(shows)
    }

    /// Get the episode list of a show.
    ///
    /// # Returns
    /// * `Ok(Vec<EpisodeRecord>)` in catalog order
    /// * `Err(TvmazeError::NotFound)` if the show does not exist
    pub async fn get_episodes(&self, show_id: u32) -> Result<Vec<EpisodeRecord>> {
        let episodes: Vec<EpisodeRecord> =
            self.client.fetch_json(&build_episodes_path(show_id)).await?;

        tracing::debug!(show_id, count = episodes.len(), "episode list fetched");
        Ok(episodes)
    }
}
