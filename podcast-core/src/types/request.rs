//! Request bodies accepted by the generators
//!
//! Every field is optional. Absent and `null` fields both fall back to the
//! documented default. camelCase spellings are accepted as aliases.

use serde::Deserialize;
use serde_json::{Number, Value};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;
pub const DEFAULT_MIN_SCORE: f64 = 6.0;
pub const DEFAULT_TARGET_DURATION: u64 = 6;
pub const DEFAULT_VIDEO_TYPE: &str = "reel";

/// Gossip search parameters
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchParams {
    /// Maximum number of items returned
    pub limit: Option<usize>,

    /// Inclusive lower bound on score, kept as sent so it can be echoed back
    #[serde(alias = "minScore")]
    pub min_score: Option<Number>,
}

impl SearchParams {
    /// Build parameters from plain values; a non-finite score counts as absent
    pub fn new(limit: Option<usize>, min_score: Option<f64>) -> Self {
        Self {
            limit,
            min_score: min_score.and_then(Number::from_f64),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(DEFAULT_MIN_SCORE)
    }

    /// Minimum score exactly as the caller wrote it, or the default
    pub fn min_score_echo(&self) -> Number {
        self.min_score.clone().unwrap_or_else(|| {
            Number::from_f64(DEFAULT_MIN_SCORE).unwrap_or_else(|| Number::from(0))
        })
    }
}

/// Script generation request
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ScriptRequest {
    /// Gossip items selected by the caller, usually a previous search result
    pub gossips: Option<Vec<Value>>,

    /// Target episode length in minutes, echoed back unchanged
    #[serde(alias = "targetDuration")]
    pub target_duration: Option<Number>,
}

impl ScriptRequest {
    pub fn gossips(&self) -> &[Value] {
        self.gossips.as_deref().unwrap_or_default()
    }

    pub fn target_duration(&self) -> Number {
        self.target_duration
            .clone()
            .unwrap_or_else(|| Number::from(DEFAULT_TARGET_DURATION))
    }

    /// Celebrity named by the first gossip item, if any
    ///
    /// Numbers and booleans are rendered as text. Missing, `null`, list and
    /// object values yield `None`.
    pub fn lead_celebrity(&self) -> Option<String> {
        match self.gossips().first()?.get("celebrity")? {
            Value::String(name) => Some(name.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Episode metadata forwarded between pipeline steps
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EpisodeData {
    #[serde(alias = "episodeTheme")]
    pub episode_theme: Option<String>,
}

/// Cover generation request
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CoverRequest {
    #[serde(alias = "episodeData")]
    pub episode_data: Option<EpisodeData>,
}

impl CoverRequest {
    pub fn episode_theme(&self) -> Option<&str> {
        self.episode_data
            .as_ref()
            .and_then(|data| data.episode_theme.as_deref())
    }
}

/// Audio generation request
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AudioRequest {
    #[serde(alias = "audioSegments")]
    pub audio_segments: Option<Vec<Value>>,
}

impl AudioRequest {
    pub fn segment_count(&self) -> usize {
        self.audio_segments.as_ref().map_or(0, Vec::len)
    }
}

/// Video generation request
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VideoRequest {
    /// `"reel"` for vertical short-form video, anything else for standard
    #[serde(rename = "type")]
    pub video_type: Option<String>,

    /// Accepted for pipeline compatibility; does not affect the output
    #[serde(alias = "episodeData")]
    pub episode_data: Option<Value>,
}

impl VideoRequest {
    pub fn video_type(&self) -> &str {
        self.video_type.as_deref().unwrap_or(DEFAULT_VIDEO_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_defaults() {
        let params: SearchParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit(), 5);
        assert_eq!(params.min_score(), 6.0);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let params: SearchParams =
            serde_json::from_value(json!({ "limit": null, "min_score": null })).unwrap();
        assert_eq!(params.limit(), 5);
        assert_eq!(params.min_score(), 6.0);
    }

    #[test]
    fn test_camel_case_aliases() {
        let params: SearchParams =
            serde_json::from_value(json!({ "limit": 1, "minScore": 8 })).unwrap();
        assert_eq!(params.min_score(), 8.0);

        let script: ScriptRequest =
            serde_json::from_value(json!({ "targetDuration": 10 })).unwrap();
        assert_eq!(script.target_duration(), Number::from(10));

        let cover: CoverRequest =
            serde_json::from_value(json!({ "episodeData": { "episodeTheme": "Especial" } }))
                .unwrap();
        assert_eq!(cover.episode_theme(), Some("Especial"));

        let audio: AudioRequest =
            serde_json::from_value(json!({ "audioSegments": [{}, {}] })).unwrap();
        assert_eq!(audio.segment_count(), 2);
    }

    #[test]
    fn test_negative_limit_rejected() {
        assert!(serde_json::from_value::<SearchParams>(json!({ "limit": -1 })).is_err());
        assert!(serde_json::from_value::<SearchParams>(json!({ "limit": "two" })).is_err());
    }

    #[test]
    fn test_lead_celebrity() {
        let script: ScriptRequest = serde_json::from_value(json!({
            "gossips": [{ "celebrity": "Xuxa" }, { "celebrity": "Anitta" }]
        }))
        .unwrap();
        assert_eq!(script.lead_celebrity().as_deref(), Some("Xuxa"));

        let script = ScriptRequest::default();
        assert_eq!(script.lead_celebrity(), None);
        assert!(script.gossips().is_empty());
    }

    #[test]
    fn test_lead_celebrity_renders_scalars() {
        let script: ScriptRequest =
            serde_json::from_value(json!({ "gossips": [{ "celebrity": 5 }] })).unwrap();
        assert_eq!(script.lead_celebrity().as_deref(), Some("5"));

        let script: ScriptRequest =
            serde_json::from_value(json!({ "gossips": [{ "celebrity": ["a", "b"] }] })).unwrap();
        assert_eq!(script.lead_celebrity(), None);
    }

    #[test]
    fn test_target_duration_kept_as_sent() {
        let script: ScriptRequest =
            serde_json::from_value(json!({ "target_duration": 6.5 })).unwrap();
        assert_eq!(script.target_duration().as_f64(), Some(6.5));

        let script: ScriptRequest =
            serde_json::from_value(json!({ "target_duration": -3 })).unwrap();
        assert_eq!(script.target_duration(), Number::from(-3));

        assert_eq!(ScriptRequest::default().target_duration(), Number::from(6));
        assert!(serde_json::from_value::<ScriptRequest>(json!({ "target_duration": "6" })).is_err());
    }

    #[test]
    fn test_min_score_echo_keeps_integer() {
        let params: SearchParams = serde_json::from_value(json!({ "min_score": 7 })).unwrap();
        assert_eq!(params.min_score(), 7.0);
        assert_eq!(serde_json::to_value(params.min_score_echo()).unwrap(), json!(7));

        let params = SearchParams::default();
        assert_eq!(serde_json::to_value(params.min_score_echo()).unwrap(), json!(6.0));
    }

    #[test]
    fn test_video_type_default() {
        assert_eq!(VideoRequest::default().video_type(), "reel");
    }
}
