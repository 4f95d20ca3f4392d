//! Episode script assembly

use crate::context::PipelineContext;
use crate::fixtures::script::*;
use crate::types::{
    AudioSegment, DialogueLine, EpisodeInfo, Host, Script, ScriptPayload, ScriptRequest,
};

/// Intro and outro are counted as segments alongside the stories
const FRAMING_SEGMENTS: usize = 2;

/// Build a two-host script around the supplied gossip list
pub fn generate_script(request: &ScriptRequest, ctx: &PipelineContext) -> ScriptPayload {
    let story_count = request.gossips().len();
    let subject = request
        .lead_celebrity()
        .unwrap_or_else(|| FALLBACK_SUBJECT.to_string());

    let episode_info = EpisodeInfo {
        theme: format!("Fofocas do Dia - {} Histórias Quentes", story_count),
        duration_minutes: request.target_duration(),
        segments: story_count + FRAMING_SEGMENTS,
        date: ctx.episode_date(),
    };

    let script = Script {
        intro: INTRO,
        segments: vec![
            DialogueLine {
                speaker: Host::Jennifer,
                content: format!("Vamos começar falando sobre {}...", subject),
                duration: OPENING_DURATION,
            },
            DialogueLine {
                speaker: Host::David,
                content: REACTION.to_string(),
                duration: REACTION_DURATION,
            },
        ],
        outro: OUTRO,
    };

    let audio_segments = vec![
        AudioSegment::new(Host::Jennifer, JENNIFER_GREETING),
        AudioSegment::new(Host::David, DAVID_GREETING),
    ];

    ScriptPayload {
        episode_info,
        script,
        audio_segments,
    }
}
