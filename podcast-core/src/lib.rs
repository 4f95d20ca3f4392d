//! Podcast Core Library
//!
//! Data model, fixture data and simulated generators for the podcast
//! automation mock API. Every generator is a pure function of its request and
//! a [`PipelineContext`]; there is no I/O and no shared mutable state.

pub mod body;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod types;

pub use body::parse_body;
pub use context::{ArtifactKind, PipelineContext};
pub use error::{PodcastError, Result};
pub use generator::{
    generate_audio, generate_cover, generate_script, generate_video, health, search_gossips,
    system_status,
};
pub use types::{
    AudioRequest, CoverRequest, Envelope, ErrorEnvelope, GossipItem, ScriptRequest, SearchParams,
    VideoRequest,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wraps_search() {
        let envelope = Envelope::ok(search_gossips(&SearchParams::default()));
        assert!(envelope.success);
        assert_eq!(envelope.data.total_found, 3);
    }
}
