//! Cover, audio and video artifact descriptors

use crate::context::{ArtifactKind, PipelineContext};
use crate::fixtures::{audio, cover, video};
use crate::types::{
    AudioInfo, AudioPayload, AudioRequest, CoverInfo, CoverPayload, CoverRequest, FileInfo,
    VideoInfo, VideoKind, VideoPayload, VideoRequest,
};

pub fn generate_cover(request: &CoverRequest, ctx: &PipelineContext) -> CoverPayload {
    let filename = format!("podcast_cover_{}.png", ctx.file_stamp());

    CoverPayload {
        cover_info: CoverInfo {
            theme: request
                .episode_theme()
                .unwrap_or(cover::DEFAULT_THEME)
                .to_string(),
            style: cover::STYLE,
            colors: cover::COLORS.to_vec(),
            elements: cover::ELEMENTS.to_vec(),
        },
        download_url: ctx.download_url(ArtifactKind::Image, &filename),
        file_info: FileInfo {
            filename,
            format: Some(cover::FORMAT),
            dimensions: Some(cover::DIMENSIONS),
            size_mb: cover::SIZE_MB,
        },
    }
}

pub fn generate_audio(request: &AudioRequest, ctx: &PipelineContext) -> AudioPayload {
    let filename = format!("podcast_episode_{}.mp3", ctx.file_stamp());

    AudioPayload {
        audio_info: AudioInfo {
            duration_seconds: audio::DURATION_SECONDS,
            format: audio::FORMAT,
            quality: audio::QUALITY,
            sample_rate: audio::SAMPLE_RATE,
            segments_processed: request.segment_count(),
        },
        download_url: ctx.download_url(ArtifactKind::Audio, &filename),
        file_info: FileInfo {
            filename,
            format: None,
            dimensions: None,
            size_mb: audio::SIZE_MB,
        },
    }
}

pub fn generate_video(request: &VideoRequest, ctx: &PipelineContext) -> VideoPayload {
    let video_type = request.video_type();
    let kind = VideoKind::from_type(video_type);
    let filename = format!(
        "podcast_{}_{}.mp4",
        filename_segment(video_type),
        ctx.file_stamp()
    );

    VideoPayload {
        video_info: VideoInfo {
            video_type: video_type.to_string(),
            duration_seconds: kind.duration_seconds(),
            format: video::FORMAT,
            resolution: kind.resolution(),
            fps: video::FPS,
        },
        download_url: ctx.download_url(ArtifactKind::Video, &filename),
        file_info: FileInfo {
            filename,
            format: None,
            dimensions: None,
            size_mb: video::SIZE_MB,
        },
    }
}

/// Reduce a caller-supplied label to characters safe in a filename and URL path
fn filename_segment(label: &str) -> String {
    let safe: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if safe.is_empty() {
        "custom".to_string()
    } else {
        safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EpisodeData;
    use serde_json::json;

    #[test]
    fn test_cover_default_theme() {
        let payload = generate_cover(&CoverRequest::default(), &PipelineContext::default());
        assert_eq!(payload.cover_info.theme, "Fofocas do Dia");
        assert_eq!(payload.file_info.filename, "podcast_cover_20250701.png");
        assert_eq!(
            payload.download_url,
            "http://localhost:5000/download/image/podcast_cover_20250701.png"
        );
    }

    #[test]
    fn test_cover_supplied_theme() {
        let request = CoverRequest {
            episode_data: Some(EpisodeData {
                episode_theme: Some("Especial de Verão".to_string()),
            }),
        };
        let payload = generate_cover(&request, &PipelineContext::default());
        assert_eq!(payload.cover_info.theme, "Especial de Verão");

        let json = serde_json::to_value(&payload.file_info).unwrap();
        assert_eq!(json["format"], "PNG");
        assert_eq!(json["dimensions"], "1400x1400");
    }

    #[test]
    fn test_audio_counts_segments() {
        let request: AudioRequest =
            serde_json::from_value(json!({ "audio_segments": [1, 2, 3] })).unwrap();
        let payload = generate_audio(&request, &PipelineContext::default());
        assert_eq!(payload.audio_info.segments_processed, 3);
        assert_eq!(
            payload.download_url,
            "http://localhost:5000/download/audio/podcast_episode_20250701.mp3"
        );

        // audio file info carries only filename and size
        let json = serde_json::to_value(&payload.file_info).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_video_reel_and_standard() {
        let reel = generate_video(&VideoRequest::default(), &PipelineContext::default());
        assert_eq!(reel.video_info.video_type, "reel");
        assert_eq!(reel.video_info.resolution, "1080x1920");
        assert_eq!(reel.video_info.duration_seconds, 30);
        assert_eq!(reel.file_info.filename, "podcast_reel_20250701.mp4");

        let request = VideoRequest {
            video_type: Some("standard".to_string()),
            episode_data: None,
        };
        let standard = generate_video(&request, &PipelineContext::default());
        assert_eq!(standard.video_info.resolution, "1920x1080");
        assert_eq!(standard.video_info.duration_seconds, 60);
        assert_eq!(
            standard.download_url,
            "http://localhost:5000/download/video/podcast_standard_20250701.mp4"
        );
    }

    #[test]
    fn test_video_type_is_sanitized_in_filename() {
        let request = VideoRequest {
            video_type: Some("../teaser clip".to_string()),
            episode_data: None,
        };
        let payload = generate_video(&request, &PipelineContext::default());
        assert_eq!(payload.video_info.video_type, "../teaser clip");
        assert_eq!(payload.file_info.filename, "podcast_teaserclip_20250701.mp4");

        assert_eq!(filename_segment("/// "), "custom");
    }
}
