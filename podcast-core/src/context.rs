//! Release context shared by every simulated generator
//!
//! Generated artifacts are stamped with a fixed release date rather than the
//! wall clock, so repeated calls always return the same payload.

use crate::error::{PodcastError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Default public base URL for synthesized download links
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:5000";

/// Default release date stamped on every artifact
pub const DEFAULT_RELEASE_DATE: &str = "2025-07-01";

/// Hour of the day reported by the liveness timestamp
const HEALTH_CHECK_HOUR: u32 = 9;

/// Kind of downloadable artifact, used as the download path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Audio,
    Video,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

/// Where and when simulated artifacts are "published"
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineContext {
    public_url: String,
    release_date: NaiveDate,
}

impl PipelineContext {
    /// Create a context, validating the public base URL
    pub fn new(public_url: impl Into<String>, release_date: NaiveDate) -> Result<Self> {
        let public_url = public_url.into();
        let trimmed = public_url.trim_end_matches('/');

        let has_host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(PodcastError::InvalidPublicUrl(public_url));
        }

        Ok(Self {
            public_url: trimmed.to_string(),
            release_date,
        })
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Liveness timestamp, e.g. `2025-07-01T09:00:00Z`
    pub fn health_timestamp(&self) -> String {
        let time = NaiveTime::from_hms_opt(HEALTH_CHECK_HOUR, 0, 0).unwrap_or_default();
        NaiveDateTime::new(self.release_date, time)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }

    /// Episode date as shown to listeners, e.g. `01/07/2025`
    pub fn episode_date(&self) -> String {
        self.release_date.format("%d/%m/%Y").to_string()
    }

    /// Compact date stamp used in filenames, e.g. `20250701`
    pub fn file_stamp(&self) -> String {
        self.release_date.format("%Y%m%d").to_string()
    }

    /// Build the download URL for an artifact
    pub fn download_url(&self, kind: ArtifactKind, filename: &str) -> String {
        format!("{}/download/{}/{}", self.public_url, kind.as_str(), filename)
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self {
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            release_date: DEFAULT_RELEASE_DATE
                .parse()
                .expect("default release date is a valid ISO date"),
        }
    }
}
