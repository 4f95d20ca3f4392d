//! Liveness and status payloads

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthPayload {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Operational,
}

/// Per-subsystem state of the (simulated) pipeline
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Components {
    pub gossip_scraper: ComponentState,
    pub script_generator: ComponentState,
    pub audio_generator: ComponentState,
    pub cover_generator: ComponentState,
    pub video_generator: ComponentState,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiInfo {
    pub version: &'static str,
    pub environment: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusPayload {
    pub system_status: &'static str,
    pub api_info: ApiInfo,
    pub components: Components,
}
