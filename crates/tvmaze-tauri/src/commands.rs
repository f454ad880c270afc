//! Tauri commands for the TVmaze show browser
//!
//! This module contains all Tauri commands that can be invoked from the frontend.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::BrowserState;
use tvmaze_core::{EpisodeRecord, PageView, RenderOutcome, ShowRecord};

/// Result of a UI event: what happened, and the page afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageUpdate {
    pub outcome: RenderOutcome,
    pub page: PageView,
}

/// Search shows by keyword without touching the page.
///
/// # Returns
/// * `Ok(Vec<ShowRecord>)` in catalog order
/// * `Err(String)` with error message if the search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, BrowserState>,
    query: String,
) -> Result<Vec<ShowRecord>, String> {
    state
        .browser()
        .catalog()
        .search_shows(&query)
        .await
        .map_err(|e| e.to_string())
}

/// Fetch a show's episodes without touching the page.
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, BrowserState>,
    show_id: u32,
) -> Result<Vec<EpisodeRecord>, String> {
    state
        .browser()
        .catalog()
        .get_episodes(show_id)
        .await
        .map_err(|e| e.to_string())
}

/// Search form submission.
///
/// Blank queries come back as `ignored` with the page unchanged.
#[tauri::command]
pub async fn submit_search(state: State<'_, BrowserState>, query: String) -> Result<PageUpdate, String> {
    let browser = state.browser();
    let outcome = browser.submit_search(&query).await;
    Ok(PageUpdate {
        outcome,
        page: browser.view().await,
    })
}

/// Episode button click.
///
/// # Arguments
/// * `show_id` - `data-show-id` of the card enclosing the clicked button
#[tauri::command]
pub async fn show_episodes(
    state: State<'_, BrowserState>,
    show_id: String,
) -> Result<PageUpdate, String> {
    let browser = state.browser();
    let outcome = browser.episode_button_clicked(&show_id).await;
    tracing::debug!(show_id = %show_id, ?outcome, "episode button handled");
    Ok(PageUpdate {
        outcome,
        page: browser.view().await,
    })
}

/// Current state of both regions.
#[tauri::command]
pub async fn page_view(state: State<'_, BrowserState>) -> Result<PageView, String> {
    Ok(state.browser().view().await)
}

/// The whole page as an HTML document, for the initial webview load.
#[tauri::command]
pub async fn page_document(state: State<'_, BrowserState>) -> Result<String, String> {
    Ok(state.browser().document().await)
}
