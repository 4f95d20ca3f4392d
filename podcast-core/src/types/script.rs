//! Episode script types

use serde::Serialize;
use serde_json::Number;

/// Podcast host
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Host {
    Jennifer,
    David,
}

impl Host {
    /// Synthetic voice used when reading this host's lines
    pub fn voice(&self) -> VoiceType {
        match self {
            Self::Jennifer => VoiceType::FemaleVoice,
            Self::David => VoiceType::MaleVoice,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VoiceType {
    FemaleVoice,
    MaleVoice,
}

/// Episode metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EpisodeInfo {
    pub theme: String,
    /// Requested duration, echoed as sent
    pub duration_minutes: Number,

    /// Story segments plus intro and outro
    pub segments: usize,
    pub date: String,
}

/// One spoken line of the dialogue
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DialogueLine {
    pub speaker: Host,
    pub content: String,

    /// Seconds
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Script {
    pub intro: &'static str,
    pub segments: Vec<DialogueLine>,
    pub outro: &'static str,
}

/// Text handed to the speech synthesizer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AudioSegment {
    pub speaker: Host,
    pub text: &'static str,
    pub voice_type: VoiceType,
}

impl AudioSegment {
    pub fn new(speaker: Host, text: &'static str) -> Self {
        Self {
            speaker,
            text,
            voice_type: speaker.voice(),
        }
    }
}

/// Script generation response payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScriptPayload {
    pub episode_info: EpisodeInfo,
    pub script: Script,
    pub audio_segments: Vec<AudioSegment>,
}
