//! Data types for the TVmaze show browser
//!
//! Records mirror the subset of the TVmaze JSON the browser consumes.
//! Unknown upstream fields are ignored during deserialization.
//! All types implement Serialize and Deserialize for Tauri compatibility.

use serde::{Deserialize, Serialize};

/// Image links attached to a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowImage {
    /// Full-size poster URL
    pub original: String,
}

/// A show from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Unique TVmaze identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// HTML-bearing synopsis, None if the catalog has none
    pub summary: Option<String>,
    /// Poster image, None if the catalog has none
    pub image: Option<ShowImage>,
    /// Premiere date as `YYYY-MM-DD`, None if unknown
    pub premiered: Option<String>,
}

/// A single entry of the search endpoint's response
///
/// TVmaze wraps every match as `{ "score": .., "show": { .. } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub show: ShowRecord,
}

/// An episode of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Unique TVmaze identifier
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number (1-based)
    pub season: u32,
    /// Episode number within the season (1-based)
    pub number: u32,
}
