//! Core types for the podcast automation mock pipeline

mod envelope;
mod gossip;
mod media;
mod request;
mod script;
mod system;

pub use envelope::{Envelope, ErrorEnvelope};
pub use gossip::{Category, GossipItem, SearchParamsEcho, SearchResult};
pub use media::{
    AudioInfo, AudioPayload, CoverInfo, CoverPayload, FileInfo, VideoInfo, VideoKind, VideoPayload,
};
pub use request::{
    AudioRequest, CoverRequest, EpisodeData, ScriptRequest, SearchParams, VideoRequest,
};
pub use script::{AudioSegment, DialogueLine, EpisodeInfo, Host, Script, ScriptPayload, VoiceType};
pub use system::{ApiInfo, ComponentState, Components, HealthPayload, StatusPayload};
