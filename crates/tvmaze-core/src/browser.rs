//! Event handling for the show browser
//!
//! [`ShowBrowser`] connects the two UI events to the catalog and the page:
//! a search submission fills the show list, and a click on a card's episode
//! button fills the episode area. Responses that arrive after a newer request
//! of the same kind was issued are discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::TvmazeCatalog;
use crate::client::ClientConfig;
use crate::error::{Result, TvmazeError};
use crate::page::{Page, PageView};
use crate::render::{render_document, render_error};

/// What an event did to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// The region was replaced with `count` items
    Rendered { count: usize },
    /// Empty search; nothing was requested or changed
    Ignored,
    /// A newer request of the same kind was issued; this response was dropped
    Superseded,
    /// The request failed and the region now shows the error
    Failed { message: String },
}

/// Monotonic request counter; only the most recently issued token may render.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: AtomicU64,
}

impl RequestTokens {
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

/// Parse a card's `data-show-id` attribute value.
///
/// # Example
/// ```
/// use tvmaze_core::browser::parse_show_id;
/// assert_eq!(parse_show_id(" 123 ").unwrap(), 123);
/// assert!(parse_show_id("abc").is_err());
/// ```
pub fn parse_show_id(attr: &str) -> Result<u32> {
    match attr.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TvmazeError::InvalidShowId(attr.to_string())),
    }
}

/// Show browser: catalog plus the page it renders into
///
/// The page lock is never held across a catalog request, so overlapping
/// events proceed independently.
///
/// # Example
/// ```no_run
/// use tvmaze_core::{RenderOutcome, ShowBrowser};
///
/// # async fn example() -> Result<(), tvmaze_core::TvmazeError> {
/// let browser = ShowBrowser::new()?;
/// if let RenderOutcome::Rendered { count } = browser.submit_search("batman").await {
///     println!("{} shows", count);
/// }
/// browser.episode_button_clicked("975").await;
/// println!("{}", browser.document().await);
/// # Ok(())
/// # }
/// ```
pub struct ShowBrowser {
    catalog: TvmazeCatalog,
    page: Mutex<Page>,
    search_tokens: RequestTokens,
    episode_tokens: RequestTokens,
}

impl ShowBrowser {
    /// Create a browser against the public catalog.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(TvmazeCatalog::new()?))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_catalog(TvmazeCatalog::with_config(config)?))
    }

    pub fn with_catalog(catalog: TvmazeCatalog) -> Self {
        Self {
            catalog,
            page: Mutex::new(Page::new()),
            search_tokens: RequestTokens::default(),
            episode_tokens: RequestTokens::default(),
        }
    }

    pub fn catalog(&self) -> &TvmazeCatalog {
        &self.catalog
    }

    /// Handle a search form submission.
    ///
    /// An empty query is ignored. Any other query is searched as typed,
    /// whitespace included: the episode area is hidden, any episode load
    /// still in flight is invalidated, and the show list is replaced once
    /// the search resolves.
    pub async fn submit_search(&self, query: &str) -> RenderOutcome {
        if query.is_empty() {
            tracing::debug!("empty search ignored");
            return RenderOutcome::Ignored;
        }

        let token = self.search_tokens.issue();
        self.episode_tokens.issue();
        self.page.lock().await.episodes_area.hide();

        let result = self.catalog.search_shows(query).await;

        let mut page = self.page.lock().await;
        if !self.search_tokens.is_latest(token) {
            tracing::info!(query, token, "discarding superseded search response");
            return RenderOutcome::Superseded;
        }

        match result {
            Ok(shows) => {
                page.populate_shows(&shows);
                tracing::info!(query, count = shows.len(), "show list rendered");
                RenderOutcome::Rendered { count: shows.len() }
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "show search failed");
                let message = err.to_string();
                page.shows_list.replace(render_error(&message));
                RenderOutcome::Failed { message }
            }
        }
    }

    /// Handle a click on a card's episode button.
    ///
    /// This is the single delegated handler for every card: `show_id_attr`
    /// is the `data-show-id` value of the nearest enclosing card.
    pub async fn episode_button_clicked(&self, show_id_attr: &str) -> RenderOutcome {
        match parse_show_id(show_id_attr) {
            Ok(show_id) => self.show_episodes(show_id).await,
            Err(err) => {
                tracing::warn!(attr = show_id_attr, "episode button without a valid show id");
                let message = err.to_string();
                let mut page = self.page.lock().await;
                page.episodes_area.replace(render_error(&message));
                page.episodes_area.show();
                RenderOutcome::Failed { message }
            }
        }
    }

    /// Load and display the episode list of a show.
    pub async fn show_episodes(&self, show_id: u32) -> RenderOutcome {
        let token = self.episode_tokens.issue();

        let result = self.catalog.get_episodes(show_id).await;

        let mut page = self.page.lock().await;
        if !self.episode_tokens.is_latest(token) {
            tracing::info!(show_id, token, "discarding superseded episode response");
            return RenderOutcome::Superseded;
        }

        match result {
            Ok(episodes) => {
                page.populate_episodes(&episodes);
                tracing::info!(show_id, count = episodes.len(), "episode list rendered");
                RenderOutcome::Rendered {
                    count: episodes.len(),
                }
            }
            Err(err) => {
                tracing::warn!(show_id, error = %err, "episode fetch failed");
                let message = err.to_string();
                page.episodes_area.replace(render_error(&message));
                page.episodes_area.show();
                RenderOutcome::Failed { message }
            }
        }
    }

    /// Snapshot of both regions.
    pub async fn view(&self) -> PageView {
        self.page.lock().await.view()
    }

    /// The whole page rendered as an HTML document.
    pub async fn document(&self) -> String {
        render_document(&self.view().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RegionState;

    #[test]
    fn test_parse_show_id() {
        assert_eq!(parse_show_id("123").unwrap(), 123);
        assert_eq!(parse_show_id("\n42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_show_id_rejects_invalid() {
        for attr in ["", "0", "-1", "12a", "undefined", "4294967296"] {
            match parse_show_id(attr) {
                Err(TvmazeError::InvalidShowId(value)) => assert_eq!(value, attr),
                other => panic!("Expected InvalidShowId for {:?}, got {:?}", attr, other),
            }
        }
    }

    #[test]
    fn test_request_tokens() {
        let tokens = RequestTokens::default();
        let first = tokens.issue();
        assert!(tokens.is_latest(first));

        let second = tokens.issue();
        assert!(second > first);
        assert!(!tokens.is_latest(first));
        assert!(tokens.is_latest(second));
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&RenderOutcome::Rendered { count: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"rendered","count":2}"#);

        let json = serde_json::to_string(&RenderOutcome::Ignored).unwrap();
        assert_eq!(json, r#"{"kind":"ignored"}"#);
    }

    #[tokio::test]
    async fn test_empty_search_is_ignored() {
        let browser = ShowBrowser::new().unwrap();
        let before = browser.view().await;

        assert_eq!(browser.submit_search("").await, RenderOutcome::Ignored);
        assert_eq!(browser.view().await, before);
    }

    #[tokio::test]
    async fn test_invalid_show_id_renders_error_without_request() {
        let browser = ShowBrowser::new().unwrap();

        let outcome = browser.episode_button_clicked("abc").await;
        assert_eq!(
            outcome,
            RenderOutcome::Failed {
                message: "Invalid show ID: abc".to_string()
            }
        );

        let view = browser.view().await;
        assert_eq!(view.episodes_area.state, RegionState::Populated);
        assert!(view.episodes_area.content.contains("alert-danger"));
    }
}
