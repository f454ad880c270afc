//! Two-region page model
//!
//! The browser UI has a show list and an episode area. Each region holds
//! its current markup and a visibility flag; rendering always replaces the
//! whole content, so rendering the same input twice leaves one copy.

use serde::{Deserialize, Serialize};

use crate::render::{render_episode_list, render_show_list};
use crate::types::{EpisodeRecord, ShowRecord};

/// Observable state of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionState {
    Hidden,
    Empty,
    Populated,
}

/// A DOM container whose children are replaced wholesale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    content: String,
    visible: bool,
}

impl Region {
    /// An empty region with the given visibility
    pub fn new(visible: bool) -> Self {
        Self {
            content: String::new(),
            visible,
        }
    }

    /// Replace all content of the region.
    pub fn replace(&mut self, content: String) {
        self.content = content;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> RegionState {
        if !self.visible {
            RegionState::Hidden
        } else if self.content.is_empty() {
            RegionState::Empty
        } else {
            RegionState::Populated
        }
    }

    pub fn view(&self) -> RegionView {
        RegionView::from_parts(&self.content, self.visible)
    }
}

/// Serializable snapshot of a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionView {
    pub content: String,
    pub visible: bool,
    pub state: RegionState,
}

impl RegionView {
    pub fn from_parts(content: &str, visible: bool) -> Self {
        let region = Region {
            content: content.to_string(),
            visible,
        };
        Self {
            state: region.state(),
            content: region.content,
            visible,
        }
    }
}

/// Serializable snapshot of the whole page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub shows_list: RegionView,
    pub episodes_area: RegionView,
}

/// The show list and the episode area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub shows_list: Region,
    pub episodes_area: Region,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Initial page: visible empty show list, hidden episode area.
    pub fn new() -> Self {
        Self {
            shows_list: Region::new(true),
            episodes_area: Region::new(false),
        }
    }

    /// Replace the show list with one card per show.
    pub fn populate_shows(&mut self, shows: &[ShowRecord]) {
        self.shows_list.replace(render_show_list(shows));
    }

    /// Replace the episode area with the episode list and make it visible.
    pub fn populate_episodes(&mut self, episodes: &[EpisodeRecord]) {
        self.episodes_area.replace(render_episode_list(episodes));
        self.episodes_area.show();
    }

    pub fn view(&self) -> PageView {
        PageView {
            shows_list: self.shows_list.view(),
            episodes_area: self.episodes_area.view(),
        }
    }
}
