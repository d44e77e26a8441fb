//! Episode records and the interchange files that carry them
//!
//! Records travel between the harvest and assembly stages either in memory
//! or through CSV/JSON interchange files with the fixed column set
//! `title, date, audio_url, page_url`.

mod csv_store;
mod json_store;

pub use csv_store::{read_csv, write_csv};
pub use json_store::{read_json, write_json};

use serde::{Deserialize, Serialize};

/// One harvested episode
///
/// `page_url` is always absolute. `audio_url`, when present, was resolved
/// against `page_url` at extraction time and is also absolute. `title` and
/// `date` fall back to the "Unknown" sentinel when the page offered nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub title: String,
    pub date: String,
    pub audio_url: Option<String>,
    pub page_url: String,
}

/// Sentinel used when a page yields no usable title or date
pub const UNKNOWN: &str = "Unknown";
