//! Descriptors of simulated media artifacts

use serde::Serialize;

/// File metadata of a generated artifact
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileInfo {
    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<&'static str>,

    pub size_mb: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CoverInfo {
    pub theme: String,
    pub style: &'static str,

    /// Hex color palette
    pub colors: Vec<&'static str>,
    pub elements: Vec<&'static str>,
}

/// Cover generation response payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CoverPayload {
    pub cover_info: CoverInfo,
    pub file_info: FileInfo,
    pub download_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AudioInfo {
    pub duration_seconds: u32,
    pub format: &'static str,
    pub quality: &'static str,
    pub sample_rate: &'static str,
    pub segments_processed: usize,
}

/// Audio generation response payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AudioPayload {
    pub audio_info: AudioInfo,
    pub file_info: FileInfo,
    pub download_url: String,
}

/// Video layout derived from the requested type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    /// Vertical short-form clip
    Reel,

    /// Horizontal full-length video
    Standard,
}

impl VideoKind {
    pub fn from_type(video_type: &str) -> Self {
        if video_type == "reel" {
            Self::Reel
        } else {
            Self::Standard
        }
    }

    pub fn duration_seconds(&self) -> u32 {
        match self {
            Self::Reel => 30,
            Self::Standard => 60,
        }
    }

    pub fn resolution(&self) -> &'static str {
        match self {
            Self::Reel => "1080x1920",
            Self::Standard => "1920x1080",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoInfo {
    /// Requested type, echoed verbatim
    #[serde(rename = "type")]
    pub video_type: String,
    pub duration_seconds: u32,
    pub format: &'static str,
    pub resolution: &'static str,
    pub fps: u32,
}

/// Video generation response payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoPayload {
    pub video_info: VideoInfo,
    pub file_info: FileInfo,
    pub download_url: String,
}
