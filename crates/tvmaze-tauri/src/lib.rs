//! TVmaze Show Browser Tauri Integration
//!
//! This crate exposes the show browser to a Tauri 2.0 webview. The webview
//! forwards the search form submission and the delegated episode-button
//! click as commands and swaps in the returned region markup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::BrowserState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(BrowserState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::search_shows,
//!             tvmaze_tauri::commands::get_episodes,
//!             tvmaze_tauri::commands::submit_search,
//!             tvmaze_tauri::commands::show_episodes,
//!             tvmaze_tauri::commands::page_view,
//!             tvmaze_tauri::commands::page_document,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `search_shows` - Raw show records for a query
//! - `get_episodes` - Raw episode records for a show
//! - `submit_search` - Search and re-render the show list
//! - `show_episodes` - Episode button click; re-render the episode area
//! - `page_view` - Current state of both regions
//! - `page_document` - The whole page as HTML

pub mod commands;

use std::sync::Arc;

use tvmaze_core::{ClientConfig, ShowBrowser};

/// Shared show browser managed by Tauri.
///
/// Commands run concurrently; the browser orders their renders itself.
pub struct BrowserState {
    browser: Arc<ShowBrowser>,
}

impl BrowserState {
    /// Create a BrowserState against the public TVmaze API.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a BrowserState with a custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let browser = ShowBrowser::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            browser: Arc::new(browser),
        })
    }

    /// Get a reference to the inner browser.
    pub fn browser(&self) -> &Arc<ShowBrowser> {
        &self.browser
    }
}
