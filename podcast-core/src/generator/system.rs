//! Liveness and status reports

use crate::context::PipelineContext;
use crate::fixtures::{ENVIRONMENT, SERVICE_NAME, SERVICE_VERSION};
use crate::types::{ApiInfo, ComponentState, Components, HealthPayload, StatusPayload};

pub fn health(ctx: &PipelineContext) -> HealthPayload {
    HealthPayload {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: ctx.health_timestamp(),
    }
}

/// Every simulated subsystem always reports operational
pub fn system_status() -> StatusPayload {
    StatusPayload {
        system_status: "online",
        api_info: ApiInfo {
            version: SERVICE_VERSION,
            environment: ENVIRONMENT,
        },
        components: Components {
            gossip_scraper: ComponentState::Operational,
            script_generator: ComponentState::Operational,
            audio_generator: ComponentState::Operational,
            cover_generator: ComponentState::Operational,
            video_generator: ComponentState::Operational,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_payload() {
        let payload = serde_json::to_value(health(&PipelineContext::default())).unwrap();
        assert_eq!(
            payload,
            json!({
                "status": "healthy",
                "service": "podcast-automation",
                "version": "1.0.0",
                "timestamp": "2025-07-01T09:00:00Z"
            })
        );
    }

    #[test]
    fn test_status_components() {
        let payload = serde_json::to_value(system_status()).unwrap();
        assert_eq!(payload["system_status"], "online");
        assert_eq!(payload["api_info"]["environment"], "development");

        let components = payload["components"].as_object().unwrap();
        assert_eq!(components.len(), 5);
        assert!(components.values().all(|state| state == "operational"));
    }
}
