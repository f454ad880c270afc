//! TVmaze Show Browser Core Library
//!
//! This crate provides the core of a keyword show browser backed by the
//! public TVmaze catalog (<https://www.tvmaze.com/api>).
//!
//! # Features
//! - Search shows by keyword
//! - List a show's episodes
//! - Render show cards and episode lists as escaped HTML
//! - Two-region page model driven by search and episode-button events
//! - Rate-limited HTTP client

pub mod browser;
pub mod catalog;
pub mod client;
pub mod error;
pub mod page;
pub mod render;
pub mod types;
pub mod url;

// Re-export main types for convenience
pub use browser::{RenderOutcome, ShowBrowser};
pub use catalog::TvmazeCatalog;
pub use client::{ClientConfig, RateLimiter, TvmazeClient};
pub use error::{Result, TvmazeError};
pub use page::{Page, PageView, RegionState, RegionView};
pub use types::{EpisodeRecord, SearchHit, ShowImage, ShowRecord};
